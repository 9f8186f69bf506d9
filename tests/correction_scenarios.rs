//! End-to-end correction scenarios over a small English corpus.

use std::sync::Arc;
use std::thread;

use speller::analysis::tokenizer::tokenize;
use speller::prelude::*;
use speller::spelling::{candidates, correct, edits1, known};

const CORPUS: &str = "
The poetry of the correct word is a matter of spelling. Spelling is hard, and
the corrected spelling of a word arranged on a page is not always convenient.
She rode her bicycle to the library, where the poetry books were arranged by
author. It was inconvenient that the bicycle rack was full, but the librarian
corrected the catalogue and arranged a new spot. A word to the wise: check
your spelling, read more poetry, and ride a bicycle when the weather is fine.
The word of the day was inconvenient; the word of the week was poetry.
";

fn model() -> FrequencyModel {
    FrequencyModel::from_corpus(CORPUS)
}

#[test]
fn test_reference_corrections() {
    let model = model();

    assert_eq!(correct("speling", &model), "spelling"); // insert
    assert_eq!(correct("korrectud", &model), "corrected"); // replace 2
    assert_eq!(correct("bycycle", &model), "bicycle"); // replace
    assert_eq!(correct("inconvient", &model), "inconvenient"); // insert 2
    assert_eq!(correct("arrainged", &model), "arranged"); // delete
    assert_eq!(correct("peotry", &model), "poetry"); // transpose
    assert_eq!(correct("word", &model), "word"); // known
    assert_eq!(correct("quintessential", &model), "quintessential"); // unknown
}

#[test]
fn test_cascade_stages() {
    let model = model();

    assert_eq!(candidates("word", &model).stage, CandidateStage::Known);
    assert_eq!(candidates("peotry", &model).stage, CandidateStage::Edit1);
    assert_eq!(candidates("korrectud", &model).stage, CandidateStage::Edit2);
    assert_eq!(candidates("inconvient", &model).stage, CandidateStage::Edit2);
    assert_eq!(
        candidates("quintessential", &model).stage,
        CandidateStage::Unknown
    );
}

#[test]
fn test_known_words_are_fixed_points() {
    let model = model();
    let corrector = SpellingCorrector::new(model.clone());

    for (word, count) in model.iter() {
        assert!(count >= 1);
        assert_eq!(corrector.correct(word), word);
    }
}

#[test]
fn test_edit1_candidates_win_over_edit2() {
    let model = model();

    for word in ["speling", "bycycle", "arrainged", "peotry", "thw", "wrod", "poetyr"] {
        let edit1 = known(edits1(word), &model);
        assert!(!edit1.is_empty(), "{word} should have a known neighbour");
        assert!(edit1.contains(&correct(word, &model)));
    }
}

#[test]
fn test_fallback_always_returns_a_word() {
    let model = model();

    for word in ["quintessential", "zzzzzzzzzz", "x", "naïveté", "über"] {
        let corrected = correct(word, &model);
        assert!(!corrected.is_empty());
    }
    assert_eq!(correct("zzzzzzzzzz", &model), "zzzzzzzzzz");
}

#[test]
fn test_model_queries() {
    let model = model();

    assert_eq!(model.max_entry(), Some(WordCount::new("the", 14)));
    assert_eq!(model.probability("quintessential").unwrap(), 0.0);

    let the = model.probability("the").unwrap();
    assert!((the - 14.0 / model.total_count() as f64).abs() < 1e-12);

    let top = model.top_k(4);
    assert_eq!(
        top,
        vec![
            WordCount::new("the", 14),
            WordCount::new("a", 6),
            WordCount::new("of", 5),
            WordCount::new("word", 5),
        ]
    );

    let total: f64 = model
        .iter()
        .map(|(word, _)| model.probability(word).unwrap())
        .sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_tokenizer_reference_inputs() {
    let mut words = tokenize("This is a TEST.");
    words.sort();
    assert_eq!(words, vec!["a", "is", "test", "this"]);

    let model = FrequencyModel::from_corpus("This is a test. 123; A TEST this is.");
    assert_eq!(model.len(), 4);
    for word in ["a", "is", "test", "this"] {
        assert_eq!(model.count(word), 2);
    }
}

#[test]
fn test_shared_model_across_threads() {
    let corrector = Arc::new(SpellingCorrector::new(model()));
    let words = ["speling", "bycycle", "peotry", "arrainged"];
    let expected = ["spelling", "bicycle", "poetry", "arranged"];

    thread::scope(|scope| {
        for (word, want) in words.iter().zip(expected) {
            let corrector = Arc::clone(&corrector);
            scope.spawn(move || assert_eq!(corrector.correct(word), want));
        }
    });
}

#[test]
#[ignore = "requires the big.txt reference corpus in SPELLER_CORPUS"]
fn test_reference_corpus() -> Result<()> {
    let path = std::env::var("SPELLER_CORPUS").unwrap_or_else(|_| "big.txt".to_string());
    let model = FrequencyModel::load_from_file(path)?;

    assert_eq!(model.len(), 29157);
    assert_eq!(model.max_entry(), Some(WordCount::new("the", 80030)));
    assert_eq!(model.probability("quintessential")?, 0.0);

    let the = model.probability("the")?;
    assert!((0.07..=0.08).contains(&the));

    let top: Vec<(String, u32)> = model
        .top_k(10)
        .into_iter()
        .map(|entry| (entry.word, entry.count))
        .collect();
    let expected = [
        ("the", 80030),
        ("of", 40025),
        ("and", 38313),
        ("to", 28766),
        ("in", 22050),
        ("a", 21155),
        ("that", 12512),
        ("he", 12401),
        ("was", 11410),
        ("it", 10681),
    ];
    assert_eq!(
        top,
        expected
            .iter()
            .map(|&(word, count)| (word.to_string(), count))
            .collect::<Vec<_>>()
    );

    let corrector = SpellingCorrector::new(model);
    assert_eq!(corrector.correct("speling"), "spelling");
    assert_eq!(corrector.correct("korrectud"), "corrected");
    assert_eq!(corrector.correct("bycycle"), "bicycle");
    assert_eq!(corrector.correct("inconvient"), "inconvenient");
    assert_eq!(corrector.correct("arrainged"), "arranged");
    assert_eq!(corrector.correct("peotry"), "poetry");
    assert_eq!(corrector.correct("word"), "word");
    assert_eq!(corrector.correct("quintessential"), "quintessential");

    Ok(())
}
