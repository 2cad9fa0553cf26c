use crate::reading::{Document, WordCount};

/// Result of a completed session
#[derive(Debug, PartialEq, Clone)]
pub struct Report {
    pub document: Document,
    pub counts: Vec<WordCount>,
}

/// Application events emitted while handling input
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// The text lacked a terminator and this one was appended
    TerminatorAppended(char),
    EmptyText,
    InvalidCount(String),
    NonPositiveCount(i32),
    TooManyQueries { requested: usize, max: usize },
    EmptyWord,
    Report(Report),
}

impl AppEvent {
    /// A token rejected at the count prompt; each one is followed by the
    /// prompt again
    pub fn is_count_rejection(&self) -> bool {
        matches!(
            self,
            AppEvent::InvalidCount(_)
                | AppEvent::NonPositiveCount(_)
                | AppEvent::TooManyQueries { .. }
        )
    }
}
