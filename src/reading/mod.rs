pub mod counter;
pub mod sentence;
pub mod token;
pub mod tokenizer;

pub use counter::{count_occurrences, count_sentences_containing, WordCount};
pub use sentence::{Document, Sentence};
pub use token::Token;
pub use tokenizer::tokenize;
