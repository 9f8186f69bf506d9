//! Tokenizer implementations for text analysis.
//!
//! [`LetterTokenizer`] is the tokenizer the frequency model is built with:
//! it case-folds its input and emits every maximal run of `a-z`. Digits,
//! punctuation and whitespace only separate tokens.
//!
//! # Examples
//!
//! ```
//! use speller::analysis::tokenizer::{LetterTokenizer, Tokenizer};
//!
//! let tokenizer = LetterTokenizer::new();
//! let words: Vec<String> = tokenizer
//!     .tokenize("This is a TEST.")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//! assert_eq!(words, vec!["this", "is", "a", "test"]);
//! ```

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SpellerError};

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Pattern matching a maximal run of lowercase ASCII letters.
pub const LETTER_PATTERN: &str = "[a-z]+";

static LETTER_TOKENIZER: LazyLock<LetterTokenizer> = LazyLock::new(LetterTokenizer::new);

/// The shared `[a-z]+` tokenizer, compiled once per process.
pub fn letter_tokenizer() -> &'static LetterTokenizer {
    &LETTER_TOKENIZER
}

/// A regex tokenizer that lowercases its input before matching.
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    pattern: Arc<Regex>,
}

impl LetterTokenizer {
    /// Create a tokenizer extracting `[a-z]+` runs.
    pub fn new() -> Self {
        Self::with_pattern(LETTER_PATTERN).expect("Letter pattern should be valid")
    }

    /// Create a tokenizer with a custom pattern applied to case-folded text.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SpellerError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(LetterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize arbitrary bytes; invalid UTF-8 sequences act as separators.
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> TokenStream {
        let text: Cow<'_, str> = String::from_utf8_lossy(bytes);
        self.words(&text)
    }

    /// Case-fold `text` and collect every match of the pattern.
    pub fn words(&self, text: &str) -> TokenStream {
        let folded = text.to_lowercase();
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&folded)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Box::new(tokens.into_iter())
    }
}

impl Default for LetterTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.words(text))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

/// Tokenize `text` with the default [`LetterTokenizer`], returning the words.
pub fn tokenize(text: &str) -> Vec<String> {
    letter_tokenizer()
        .words(text)
        .map(|token| token.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: TokenStream) -> Vec<String> {
        tokens.map(|token| token.text).collect()
    }

    #[test]
    fn test_letter_tokenizer() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_separators_are_dropped() {
        assert_eq!(
            tokenize("This is a test. 123; A TEST this is."),
            vec!["this", "is", "a", "test", "a", "test", "this", "is"]
        );
        assert_eq!(tokenize("don't stop-me2now"), vec!["don", "t", "stop", "me", "now"]);
    }

    #[test]
    fn test_empty_and_letterless_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 ... !!! \n\t").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
    }

    #[test]
    fn test_tokenize_bytes_lossy() {
        let tokenizer = LetterTokenizer::new();
        let bytes = b"Good\xffMorning";
        assert_eq!(texts(tokenizer.tokenize_bytes(bytes)), vec!["good", "morning"]);
    }

    #[test]
    fn test_shared_tokenizer() {
        assert!(std::ptr::eq(letter_tokenizer(), letter_tokenizer()));
        assert_eq!(letter_tokenizer().pattern(), LETTER_PATTERN);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(LetterTokenizer::with_pattern("[a-").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(LetterTokenizer::new().name(), "letter");
        assert_eq!(LetterTokenizer::new().pattern(), LETTER_PATTERN);
    }
}
