use std::fmt;

/// Marks that always form a token of their own.
pub const PUNCTUATION_MARKS: [char; 6] = ['.', ',', '!', '?', '"', '\''];

/// Marks that close a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

pub fn is_punctuation_mark(c: char) -> bool {
    PUNCTUATION_MARKS.contains(&c)
}

pub fn is_sentence_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Characters that separate sentences and pieces: ASCII space, tab, line
/// feed, vertical tab, form feed and carriage return. Other Unicode spaces
/// (e.g. U+00A0) are part of the surrounding word.
pub fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Strips leading and trailing control characters and spaces (`<= U+0020`).
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Smallest classified unit of a sentence.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Token {
    /// Literal text as it appeared in the input, casing preserved.
    Word(String),
    Punctuation(char),
}

impl Token {
    /// Classifies a piece produced by the sentence splitter.
    ///
    /// Only a single character from [`PUNCTUATION_MARKS`] is punctuation;
    /// every other piece is kept verbatim as a word.
    pub fn from_piece(piece: &str) -> Self {
        let mut chars = piece.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_punctuation_mark(c) => Token::Punctuation(c),
            _ => Token::Word(piece.to_string()),
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(text) => Some(text),
            Token::Punctuation(_) => None,
        }
    }

    /// True when this is a word equal to `query` ignoring case.
    /// Punctuation never matches.
    pub fn matches_word(&self, query: &str) -> bool {
        self.as_word().is_some_and(|text| eq_ignore_case(text, query))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(text) => f.write_str(text),
            Token::Punctuation(mark) => write!(f, "{}", mark),
        }
    }
}

/// Single-character upper-case mapping; characters whose upper case is
/// several characters (e.g. `ß` → `SS`) map to themselves.
pub fn simple_uppercase(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Single-character lower-case mapping, see [`simple_uppercase`].
///
/// `İ` (U+0130) lower-cases to `i` plus a combining dot; its one-character
/// mapping is plain `i`.
pub fn simple_lowercase(c: char) -> char {
    if c == '\u{130}' {
        return 'i';
    }
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}

/// Per-character case-insensitive equality.
///
/// Two characters match when they are equal, equal after upper-casing, or
/// equal after lower-casing. Only single-character case mappings are used,
/// so the result never depends on the current locale.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }
    a.chars().zip(b.chars()).all(|(x, y)| {
        x == y
            || simple_uppercase(x) == simple_uppercase(y)
            || simple_lowercase(x) == simple_lowercase(y)
    })
}
