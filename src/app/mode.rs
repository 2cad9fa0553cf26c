/// Where the session is in collecting its input
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppMode {
    /// Waiting for the text to analyse
    Text,
    /// Waiting for how many query words will follow
    QueryCount,
    /// Waiting for query word number `index + 1`
    QueryWord { index: usize },
    /// Counts produced; nothing more to read
    Report,
}

impl AppMode {
    /// What the session is waiting for, for end-of-input errors
    pub fn stage(&self) -> &'static str {
        match self {
            AppMode::Text => "the text",
            AppMode::QueryCount => "the number of words",
            AppMode::QueryWord { .. } => "a query word",
            AppMode::Report => "nothing",
        }
    }
}
