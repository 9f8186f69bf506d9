//! Statistical spelling correction.
//!
//! A [`dictionary::FrequencyModel`] counts corpus words,
//! [`edits`] enumerates strings within one or two edits of a word, and
//! [`corrector`] picks the most frequent known candidate.

pub mod corrector;
pub mod dictionary;
pub mod edits;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use edits::*;
