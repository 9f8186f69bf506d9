//! Command implementations for the speller CLI.

use std::path::Path;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::evaluation::{evaluate, load_test_set};
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::dictionary::FrequencyModel;

/// Extension marking a precomputed frequency file.
pub const FREQUENCY_FILE_EXTENSION: &str = "freq";

/// Execute a CLI command.
pub fn execute_command(args: SpellerArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args, &args),
        Command::Evaluate(evaluate_args) => evaluate_test_sets(evaluate_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Count(count_args) => count_words(count_args, &args),
    }
}

/// Load a model from a corpus or frequency file, chosen by extension.
pub fn load_model(path: &Path) -> Result<FrequencyModel> {
    let is_frequency_file = path
        .extension()
        .is_some_and(|ext| ext == FREQUENCY_FILE_EXTENSION);

    let model = if is_frequency_file {
        FrequencyModel::load_from_frequency_file(path)
    } else {
        FrequencyModel::load_from_file(path)
    };

    Ok(model.with_context(|| format!("cannot load corpus {}", path.display()))?)
}

fn build_corrector(args: &CorpusArgs) -> Result<SpellingCorrector> {
    let model = load_model(&args.corpus)?;
    SpellingCorrector::with_config(model, args.corrector_config())
}

/// Correct the given words.
fn correct_words(args: &CorrectArgs, cli_args: &SpellerArgs) -> Result<()> {
    let corrector = build_corrector(&args.corpus)?;
    let corrections = corrector.correct_batch(&args.words);

    output_result(
        "Corrections",
        &CorrectionResults {
            corrections,
            explain: args.explain,
        },
        cli_args,
    )
}

/// Run every test set against the corrector.
fn evaluate_test_sets(args: &EvaluateArgs, cli_args: &SpellerArgs) -> Result<()> {
    let corrector = build_corrector(&args.corpus)?;
    let mut results = Vec::with_capacity(args.test_sets.len());

    for path in &args.test_sets {
        let cases = load_test_set(path)
            .with_context(|| format!("cannot load test set {}", path.display()))?;
        info!("Loaded {} test cases from {}", cases.len(), path.display());

        results.push(TestSetResult {
            test_set: path.display().to_string(),
            report: evaluate(&corrector, &cases),
        });
    }

    output_result(
        "Evaluation results",
        &EvaluationResults {
            results,
            show_failures: args.show_failures,
        },
        cli_args,
    )
}

/// Show corpus statistics.
fn show_stats(args: &StatsArgs, cli_args: &SpellerArgs) -> Result<()> {
    let model = load_model(&args.corpus)?;

    output_result(
        "Corpus statistics",
        &CorpusStats {
            distinct_words: model.len(),
            total_words: model.total_count(),
            most_frequent: model.max_entry(),
            top_words: model.top_k(args.top),
        },
        cli_args,
    )
}

/// Count a corpus and save it as a frequency file.
fn count_words(args: &CountArgs, cli_args: &SpellerArgs) -> Result<()> {
    let model = load_model(&args.corpus)?;
    model
        .save_to_file(&args.output)
        .with_context(|| format!("cannot write frequency file {}", args.output.display()))?;

    output_result(
        "Frequency file written",
        &CountResult {
            output: args.output.display().to_string(),
            distinct_words: model.len(),
            total_words: model.total_count(),
        },
        cli_args,
    )
}
