//! # Speller
//!
//! A statistical spelling corrector. A corpus is tokenized into lowercase
//! words and counted; a misspelled word is corrected to the most frequent
//! known word within two elementary edits.
//!
//! ```
//! use speller::spelling::{FrequencyModel, SpellingCorrector};
//!
//! let model = FrequencyModel::from_corpus("the spelling of spelling is hard");
//! let corrector = SpellingCorrector::new(model);
//! assert_eq!(corrector.correct("speling"), "spelling");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod evaluation;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, SpellerError};
    pub use crate::evaluation::{EvaluationReport, TestCase};
    pub use crate::spelling::{
        CandidateStage, Candidates, Correction, CorrectorConfig, FrequencyModel,
        SpellingCorrector, WordCount,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
