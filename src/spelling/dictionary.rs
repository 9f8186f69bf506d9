//! Word-frequency model for spelling correction.
//!
//! A [`FrequencyModel`] maps each word seen in a corpus to the number of times
//! it occurred. It is built in a single pass and never mutated afterwards, so
//! a model can be shared across threads behind an `Arc` without locking.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::letter_tokenizer;
use crate::error::{Result, SpellerError};

/// A word paired with its corpus count, used for ranking and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Number of occurrences in the corpus.
    pub count: u32,
}

impl WordCount {
    /// Create a new word count.
    pub fn new<S: Into<String>>(word: S, count: u32) -> Self {
        WordCount {
            word: word.into(),
            count,
        }
    }
}

/// Whether `word` has the shape of a corpus token: a non-empty `[a-z]+` run.
fn is_model_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Immutable word-frequency table built from a corpus.
///
/// Every stored word has a count of at least 1; absent words count as 0.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    /// Words and their occurrence counts
    counts: AHashMap<String, u32>,
    /// Sum of all counts, the denominator for probabilities
    total_count: u64,
}

impl FrequencyModel {
    /// Build a model by counting every token once.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        let mut model = FrequencyModel::default();
        for token in tokens {
            model.increment(token);
        }
        model
    }

    /// Tokenize a corpus and count its words.
    pub fn from_corpus(text: &str) -> Self {
        Self::from_tokens(letter_tokenizer().words(text).map(|token| token.text))
    }

    /// Tokenize a corpus given as raw bytes and count its words.
    pub fn from_corpus_bytes(bytes: &[u8]) -> Self {
        Self::from_tokens(
            letter_tokenizer()
                .tokenize_bytes(bytes)
                .map(|token| token.text),
        )
    }

    /// Load a model from a plain-text corpus file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        let bytes = fs::read(path)?;
        let model = Self::from_corpus_bytes(&bytes);

        info!(
            "Built model from {}: {} words, {} tokens in {:.2?}",
            path.display(),
            model.len(),
            model.total_count(),
            start.elapsed()
        );

        Ok(model)
    }

    /// Load a model from a frequency file with format "word count" per line.
    ///
    /// Lines that do not parse are skipped, as are words that the corpus
    /// tokenizer could never produce (anything but `[a-z]+`). Repeated words
    /// have their counts summed; a repeat that would overflow the count is
    /// skipped.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut model = FrequencyModel::default();
        let reader = BufReader::new(File::open(path)?);

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let line_num = line_num + 1;
            match parts.as_slice() {
                [word, _] if !is_model_word(word) => {
                    warn!("Skipping line {line_num} of {}: '{word}' is not a lowercase word", path.display())
                }
                [word, count] => match count.parse::<u32>() {
                    Ok(count) if count > 0 => {
                        if !model.add(*word, count) {
                            warn!("Skipping line {line_num} of {}: count for '{word}' overflows", path.display());
                        }
                    }
                    _ => warn!("Skipping line {line_num} of {}: bad count", path.display()),
                },
                _ => warn!("Skipping line {line_num} of {}: expected 'word count'", path.display()),
            }
        }

        info!(
            "Loaded frequency file {}: {} words, {} tokens",
            path.display(),
            model.len(),
            model.total_count()
        );

        Ok(model)
    }

    /// Save the model as a frequency file, most frequent words first.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);

        for WordCount { word, count } in self.top_k(self.len()) {
            writeln!(writer, "{word} {count}")?;
        }
        writer.flush()?;

        Ok(())
    }

    fn increment<S: AsRef<str> + Into<String>>(&mut self, word: S) {
        if !self.add(word, 1) {
            warn!("Word count saturated at {}", u32::MAX);
        }
    }

    /// Add `count` occurrences of `word`. Returns false, leaving the model
    /// unchanged, when the word's count would overflow.
    fn add<S: AsRef<str> + Into<String>>(&mut self, word: S, count: u32) -> bool {
        match self.counts.get_mut(word.as_ref()) {
            Some(existing) => match existing.checked_add(count) {
                Some(sum) => *existing = sum,
                None => return false,
            },
            None => {
                self.counts.insert(word.into(), count);
            }
        }
        self.total_count += u64::from(count);
        true
    }

    /// Check if a word occurs in the corpus.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of occurrences of `word`, 0 if never seen.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Relative frequency of `word` in the corpus.
    ///
    /// Fails with [`SpellerError::EmptyModel`] when the model holds no words.
    pub fn probability(&self, word: &str) -> Result<f64> {
        if self.total_count == 0 {
            return Err(SpellerError::EmptyModel);
        }
        Ok(self.count(word) as f64 / self.total_count as f64)
    }

    /// The most frequent word, or `None` for an empty model.
    ///
    /// Equal counts are resolved in favour of the alphabetically smaller word.
    pub fn max_entry(&self) -> Option<WordCount> {
        self.counts
            .iter()
            .max_by(|(a_word, a_count), (b_word, b_count)| {
                a_count.cmp(b_count).then_with(|| b_word.cmp(a_word))
            })
            .map(|(word, &count)| WordCount::new(word.as_str(), count))
    }

    /// The `k` most frequent words in descending count order.
    ///
    /// Equal counts are ordered alphabetically. Returns fewer than `k` entries
    /// when the model has fewer distinct words.
    pub fn top_k(&self, k: usize) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount::new(word.as_str(), count))
            .collect();

        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries.truncate(k);
        entries
    }

    /// Iterate over all (word, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the model holds no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}
