use super::token::{trim_blank, Token};
use std::fmt;

/// Ordered tokens of one sentence, in order of appearance.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Presence test: true if any word token equals `query` ignoring case.
    pub fn contains_word(&self, query: &str) -> bool {
        self.tokens.iter().any(|token| token.matches_word(query))
    }
}

/// Words are followed by one space, punctuation is written as-is, and the
/// result is trimmed. `Hello, world!` renders as `Hello ,world !`.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for token in &self.tokens {
            match token {
                Token::Word(text) => {
                    rendered.push_str(text);
                    rendered.push(' ');
                }
                Token::Punctuation(mark) => rendered.push(*mark),
            }
        }
        f.write_str(trim_blank(&rendered))
    }
}

/// Tokenized text: sentences in order of appearance.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.sentences.iter().map(Sentence::to_string).collect();
        f.write_str(trim_blank(&rendered.join(" ")))
    }
}
