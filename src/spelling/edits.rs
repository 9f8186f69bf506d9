//! Candidate generation by elementary string edits.
//!
//! An elementary edit is one of delete, transpose (adjacent swap), replace or
//! insert over the 26-letter lowercase alphabet. Results keep duplicates and
//! no-op edits: callers filter candidates through the frequency model, where
//! a repeated string costs one extra lookup and nothing else.
//!
//! Edits operate on Unicode scalar values, so a misspelled word containing
//! non-ASCII characters is handled without slicing inside a character.

use ahash::AHashSet;

use crate::spelling::dictionary::FrequencyModel;

/// The alphabet used for replacements and insertions.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of strings [`edits1`] yields for a word of `len` characters.
///
/// `len` deletes, `len - 1` transposes, `26 * len` replaces and
/// `26 * (len + 1)` inserts.
pub fn edits1_len(len: usize) -> usize {
    len + len.saturating_sub(1) + ALPHABET.len() * len + ALPHABET.len() * (len + 1)
}

/// Call `visit` with every string one elementary edit away from `word`.
///
/// Edits are produced family by family: all deletes, then transposes, then
/// replaces, then inserts, each scanning positions left to right.
pub fn for_each_edit1<F: FnMut(String)>(word: &str, mut visit: F) {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut buf: Vec<char> = Vec::with_capacity(len + 1);

    let mut emit = |parts: &[&[char]], buf: &mut Vec<char>| {
        buf.clear();
        for part in parts {
            buf.extend_from_slice(part);
        }
        visit(buf.iter().collect());
    };

    // Deletes
    for i in 0..len {
        emit(&[&chars[..i], &chars[i + 1..]], &mut buf);
    }

    // Transposes
    for i in 0..len.saturating_sub(1) {
        emit(&[&chars[..i], &[chars[i + 1], chars[i]], &chars[i + 2..]], &mut buf);
    }

    // Replaces
    for i in 0..len {
        for c in ALPHABET {
            emit(&[&chars[..i], &[c], &chars[i + 1..]], &mut buf);
        }
    }

    // Inserts
    for i in 0..=len {
        for c in ALPHABET {
            emit(&[&chars[..i], &[c], &chars[i..]], &mut buf);
        }
    }
}

/// All strings exactly one elementary edit away from `word`, duplicates kept.
pub fn edits1(word: &str) -> Vec<String> {
    let mut edits = Vec::with_capacity(edits1_len(word.chars().count()));
    for_each_edit1(word, |edit| edits.push(edit));
    edits
}

/// All strings reachable by applying [`edits1`] twice, duplicates kept.
///
/// This materializes every distance-2 string and grows quadratically with
/// the word length; prefer [`known_edits2`] when only model members matter.
pub fn edits2(word: &str) -> Vec<String> {
    let mut edits = Vec::new();
    for_each_edit1(word, |first| {
        for_each_edit1(&first, |second| edits.push(second));
    });
    edits
}

/// The distance-2 edits of `word` that occur in `model`.
///
/// Equivalent to filtering [`edits2`] through the model and keeping the first
/// occurrence of each word, without holding the full edit space in memory.
pub fn known_edits2(word: &str, model: &FrequencyModel) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut known = Vec::new();
    for_each_edit1(word, |first| {
        for_each_edit1(&first, |second| {
            if model.contains(&second) && seen.insert(second.clone()) {
                known.push(second);
            }
        });
    });
    known
}
