//! Text analysis module for speller.
//!
//! Turns raw corpus text into the lowercase alphabetic tokens the frequency
//! model counts.

pub mod token;
pub mod tokenizer;
