//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellerArgs};
use crate::error::Result;
use crate::evaluation::EvaluationReport;
use crate::spelling::corrector::Correction;
use crate::spelling::dictionary::WordCount;

/// Result structure for word corrections.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub corrections: Vec<Correction>,
    pub explain: bool,
}

/// Result structure for one evaluated test set.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestSetResult {
    pub test_set: String,
    pub report: EvaluationReport,
}

/// Result structure for evaluation runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResults {
    pub results: Vec<TestSetResult>,
    pub show_failures: bool,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub distinct_words: usize,
    pub total_words: u64,
    pub most_frequent: Option<WordCount>,
    pub top_words: Vec<WordCount>,
}

/// Result structure for frequency file export.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResult {
    pub output: String,
    pub distinct_words: usize,
    pub total_words: u64,
}

/// Results that know how to render themselves for humans.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for CorrectionResults {
    fn print_human(&self) {
        for correction in &self.corrections {
            if self.explain {
                println!(
                    "{} => {} ({}, count {})",
                    correction.original, correction.corrected, correction.stage, correction.count
                );
            } else {
                println!("{}", correction.corrected);
            }
        }
    }
}

impl HumanOutput for EvaluationResults {
    fn print_human(&self) {
        for TestSetResult { test_set, report } in &self.results {
            if self.show_failures {
                for failure in &report.failures {
                    println!("{failure}");
                }
            }
            println!("{test_set}: {report}");
        }
    }
}

impl HumanOutput for CorpusStats {
    fn print_human(&self) {
        println!("Corpus Statistics:");
        println!("══════════════════");
        println!("Distinct words: {}", self.distinct_words);
        println!("Total words: {}", self.total_words);

        if let Some(WordCount { word, count }) = &self.most_frequent {
            println!("Most frequent: {word} ({count})");
        }

        if !self.top_words.is_empty() {
            println!();
            println!("Top {} words:", self.top_words.len());
            println!("──────────────");
            for (rank, WordCount { word, count }) in self.top_words.iter().enumerate() {
                println!("{:>4}. {word:<20} {count}", rank + 1);
            }
        }
    }
}

impl HumanOutput for CountResult {
    fn print_human(&self) {
        println!("Output: {}", self.output);
        println!("Distinct words: {}", self.distinct_words);
        println!("Total words: {}", self.total_words);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellerArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::corrector::CandidateStage;

    #[test]
    fn test_correction_results_json() {
        let results = CorrectionResults {
            corrections: vec![Correction {
                original: "speling".into(),
                corrected: "spelling".into(),
                stage: CandidateStage::Edit1,
                count: 4,
            }],
            explain: false,
        };

        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["corrections"][0]["corrected"], "spelling");
        assert_eq!(value["corrections"][0]["stage"], "edit1");
    }

    #[test]
    fn test_corpus_stats_json() {
        let stats = CorpusStats {
            distinct_words: 2,
            total_words: 3,
            most_frequent: Some(WordCount::new("the", 2)),
            top_words: vec![WordCount::new("the", 2), WordCount::new("cat", 1)],
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["most_frequent"]["word"], "the");
        assert_eq!(value["top_words"][1]["count"], 1);
    }
}
