//! Accuracy benchmarks over labelled misspellings.
//!
//! A test set is a text file of records `<correct>: <wrong-1> <wrong-2> ...`,
//! one per line. Each misspelling becomes a [`TestCase`], and [`evaluate`]
//! runs them all through a [`SpellingCorrector`] to produce an
//! [`EvaluationReport`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellerError};
use crate::spelling::corrector::SpellingCorrector;

/// A misspelled word paired with its expected correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// The correct spelling.
    pub expected: String,
    /// A misspelling of `expected`.
    pub misspelled: String,
}

impl TestCase {
    /// Create a new test case.
    pub fn new<E: Into<String>, M: Into<String>>(expected: E, misspelled: M) -> Self {
        TestCase {
            expected: expected.into(),
            misspelled: misspelled.into(),
        }
    }
}

/// Parse test-set records into test cases.
///
/// Blank lines are skipped. A non-blank line without the `": "` separator is
/// an error carrying its 1-based line number.
pub fn parse_test_set(text: &str) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (expected, misspellings) = line
            .split_once(": ")
            .ok_or_else(|| SpellerError::fixture(line_num + 1, "expected '<word>: <misspellings>'"))?;

        let before = cases.len();
        cases.extend(
            misspellings
                .split_whitespace()
                .map(|wrong| TestCase::new(expected, wrong)),
        );
        if cases.len() == before {
            warn!("Line {} lists no misspellings for '{expected}'", line_num + 1);
        }
    }

    Ok(cases)
}

/// Read and parse a test-set file.
pub fn load_test_set<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    let text = fs::read_to_string(path)?;
    parse_test_set(&text)
}

/// A test case the corrector got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// The input word.
    pub misspelled: String,
    /// What the corrector returned.
    pub got: String,
    /// Corpus count of `got`.
    pub got_count: u32,
    /// The expected correction.
    pub expected: String,
    /// Corpus count of `expected`; 0 means the answer was unreachable.
    pub expected_count: u32,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "correction({}) => {} ({}); expected {} ({})",
            self.misspelled, self.got, self.got_count, self.expected, self.expected_count
        )
    }
}

/// Summary statistics of an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Number of test cases.
    pub total: usize,
    /// Cases corrected to the expected word.
    pub correct: usize,
    /// Failed cases whose expected word is absent from the model.
    pub unknown: usize,
    /// Wall-clock time spent correcting.
    pub elapsed_secs: f64,
    /// Throughput of the run.
    pub words_per_second: f64,
    /// Every failed case, in test-set order.
    pub failures: Vec<Failure>,
}

impl EvaluationReport {
    /// Percentage of cases corrected as expected.
    pub fn accuracy(&self) -> f64 {
        percent(self.correct, self.total)
    }

    /// Percentage of cases whose expected word the model has never seen.
    pub fn unknown_rate(&self) -> f64 {
        percent(self.unknown, self.total)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}% of {} correct ({:.0}% unknown) at {:.0} words per second",
            self.accuracy(),
            self.total,
            self.unknown_rate(),
            self.words_per_second
        )
    }
}

/// Correct every misspelling in `cases` and score the results.
pub fn evaluate(corrector: &SpellingCorrector, cases: &[TestCase]) -> EvaluationReport {
    let start = Instant::now();
    let misspelled: Vec<&str> = cases.iter().map(|case| case.misspelled.as_str()).collect();
    let corrections = corrector.correct_batch(&misspelled);
    let elapsed_secs = start.elapsed().as_secs_f64();

    let model = corrector.model();
    let mut correct = 0;
    let mut unknown = 0;
    let mut failures = Vec::new();

    for (case, correction) in cases.iter().zip(corrections) {
        if correction.corrected == case.expected {
            correct += 1;
            continue;
        }

        let expected_count = model.count(&case.expected);
        if expected_count == 0 {
            unknown += 1;
        }
        failures.push(Failure {
            misspelled: correction.original,
            got: correction.corrected,
            got_count: correction.count,
            expected: case.expected.clone(),
            expected_count,
        });
    }

    let total = cases.len();
    let words_per_second = if elapsed_secs > 0.0 {
        total as f64 / elapsed_secs
    } else {
        0.0
    };

    let report = EvaluationReport {
        total,
        correct,
        unknown,
        elapsed_secs,
        words_per_second,
        failures,
    };
    info!("Evaluation finished: {report}");
    report
}
