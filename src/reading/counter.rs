use super::sentence::Document;
use std::fmt;

/// Number of sentences a query word appears in.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordCount {
    pub word: String,
    pub sentences: usize,
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is in {} sentence(s)", self.word, self.sentences)
    }
}

/// Counts the sentences holding at least one word equal to `query`,
/// ignoring case. A sentence counts once however often the word repeats.
pub fn count_sentences_containing(document: &Document, query: &str) -> usize {
    let mut count = 0;
    for sentence in document {
        if sentence.contains_word(query) {
            count += 1;
        }
    }
    count
}

/// One row per query, in query order. Duplicate queries get their own rows.
pub fn count_occurrences<S: AsRef<str>>(document: &Document, queries: &[S]) -> Vec<WordCount> {
    queries
        .iter()
        .map(|query| {
            let word = query.as_ref();
            WordCount {
                word: word.to_string(),
                sentences: count_sentences_containing(document, word),
            }
        })
        .collect()
}
