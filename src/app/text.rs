use crate::reading::token::{is_sentence_terminator, trim_blank};

/// Text accepted for analysis
#[derive(Debug, PartialEq, Clone)]
pub struct PreparedText {
    pub text: String,
    /// Set when `terminator` had to be appended
    pub terminator_appended: bool,
}

/// Trims raw input and makes sure it ends in a sentence terminator.
///
/// Returns `None` for blank input.
pub fn prepare_text(raw: &str, terminator: char) -> Option<PreparedText> {
    let trimmed = trim_blank(raw);
    let last = trimmed.chars().last()?;

    if is_sentence_terminator(last) {
        return Some(PreparedText {
            text: trimmed.to_string(),
            terminator_appended: false,
        });
    }

    let mut text = String::with_capacity(trimmed.len() + terminator.len_utf8());
    text.push_str(trimmed);
    text.push(terminator);
    Some(PreparedText {
        text,
        terminator_appended: true,
    })
}
