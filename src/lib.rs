//! Sentence-level word occurrence counting.
//!
//! [`reading::tokenize`] splits text into sentences of word and punctuation
//! tokens; [`reading::count_occurrences`] reports how many sentences contain
//! each query word, ignoring case. The remaining modules make up the
//! interactive `sentcount` shell around them.

pub mod app;
pub mod engine;
pub mod reading;
pub mod repl;
pub mod telemetry;
pub mod ui;

pub use reading::{count_occurrences, tokenize, Document, Sentence, Token, WordCount};
