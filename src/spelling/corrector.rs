//! Candidate selection and word correction.
//!
//! Correction cascades through four stages and stops at the first that
//! produces candidates:
//!
//! 1. the word itself, when the model knows it;
//! 2. known words one edit away;
//! 3. known words two edits away;
//! 4. the word itself, unchanged.
//!
//! Among several candidates the most frequent wins. Candidates are kept in
//! generation order and scanned left to right, replacing the running best only
//! on a strictly greater count, so equal counts resolve to the candidate
//! generated first.

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellerError};
use crate::spelling::dictionary::FrequencyModel;
use crate::spelling::edits::{edits1, known_edits2};

/// Which stage of the cascade produced a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStage {
    /// The word is already in the model.
    Known,
    /// Known words one edit away.
    Edit1,
    /// Known words two edits away.
    Edit2,
    /// Nothing matched; the word is echoed back.
    Unknown,
}

impl fmt::Display for CandidateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CandidateStage::Known => "known",
            CandidateStage::Edit1 => "edit1",
            CandidateStage::Edit2 => "edit2",
            CandidateStage::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A non-empty candidate set together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidates {
    /// Stage of the cascade the words came from.
    pub stage: CandidateStage,
    /// Distinct candidate words in generation order.
    pub words: Vec<String>,
}

impl Candidates {
    fn single(stage: CandidateStage, word: &str) -> Self {
        Candidates {
            stage,
            words: vec![word.to_string()],
        }
    }
}

/// The words of `words` present in `model`, first occurrence of each kept.
pub fn known<I>(words: I, model: &FrequencyModel) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = AHashSet::new();
    words
        .into_iter()
        .filter(|word| model.contains(word) && seen.insert(word.clone()))
        .collect()
}

/// Candidate corrections for `word`, searching up to two edits away.
pub fn candidates(word: &str, model: &FrequencyModel) -> Candidates {
    candidates_within(word, model, 2)
}

fn candidates_within(word: &str, model: &FrequencyModel, max_distance: usize) -> Candidates {
    if model.contains(word) {
        return Candidates::single(CandidateStage::Known, word);
    }

    let words = known(edits1(word), model);
    if !words.is_empty() {
        return Candidates {
            stage: CandidateStage::Edit1,
            words,
        };
    }

    if max_distance >= 2 {
        let words = known_edits2(word, model);
        if !words.is_empty() {
            return Candidates {
                stage: CandidateStage::Edit2,
                words,
            };
        }
    }

    Candidates::single(CandidateStage::Unknown, word)
}

/// Pick the most frequent candidate, keeping the earliest on ties.
fn select_best(candidates: &Candidates, model: &FrequencyModel) -> (String, u32) {
    let mut words = candidates.words.iter();
    // Candidate sets are never empty.
    let first = words.next().map(String::as_str).unwrap_or_default();
    if candidates.words.len() == 1 {
        return (first.to_string(), model.count(first));
    }

    let mut best = first;
    let mut best_count = model.count(first);
    for word in words {
        let count = model.count(word);
        if count > best_count {
            best = word.as_str();
            best_count = count;
        }
    }

    (best.to_string(), best_count)
}

/// The most probable correction of `word` under `model`.
pub fn correct(word: &str, model: &FrequencyModel) -> String {
    select_best(&candidates(word, model), model).0
}

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum edit distance searched, 1 or 2.
    pub max_distance: usize,
    /// Whether batch correction runs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: 2,
            parallel: true,
        }
    }
}

impl CorrectorConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !(1..=2).contains(&self.max_distance) {
            return Err(SpellerError::invalid_config(format!(
                "max_distance must be 1 or 2, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// The outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The word as given.
    pub original: String,
    /// The chosen correction, equal to `original` when nothing better exists.
    pub corrected: String,
    /// Stage of the cascade the correction came from.
    pub stage: CandidateStage,
    /// Corpus count of the correction (0 for unknown words).
    pub count: u32,
}

impl Correction {
    /// Whether the correction differs from the input.
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }
}

/// Spelling corrector over a shared, read-only frequency model.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    model: Arc<FrequencyModel>,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new<M: Into<Arc<FrequencyModel>>>(model: M) -> Self {
        SpellingCorrector {
            model: model.into(),
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config<M: Into<Arc<FrequencyModel>>>(
        model: M,
        config: CorrectorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(SpellingCorrector {
            model: model.into(),
            config,
        })
    }

    /// The underlying frequency model.
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Check if a word is known to the model.
    pub fn is_correct(&self, word: &str) -> bool {
        self.model.contains(word)
    }

    /// Candidate corrections for `word` within the configured distance.
    pub fn candidates(&self, word: &str) -> Candidates {
        candidates_within(word, &self.model, self.config.max_distance)
    }

    /// Correct `word` and report how the correction was found.
    pub fn correction(&self, word: &str) -> Correction {
        let candidates = self.candidates(word);
        let (corrected, count) = select_best(&candidates, &self.model);

        debug!(
            "correct({word}) => {corrected} via {} ({} candidates)",
            candidates.stage,
            candidates.words.len()
        );

        Correction {
            original: word.to_string(),
            corrected,
            stage: candidates.stage,
            count,
        }
    }

    /// The most probable correction of `word`.
    pub fn correct(&self, word: &str) -> String {
        self.correction(word).corrected
    }

    /// Correct many words, in parallel when configured.
    ///
    /// Output order matches input order.
    pub fn correct_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<Correction> {
        if self.config.parallel {
            words
                .par_iter()
                .map(|word| self.correction(word.as_ref()))
                .collect()
        } else {
            words
                .iter()
                .map(|word| self.correction(word.as_ref()))
                .collect()
        }
    }
}
