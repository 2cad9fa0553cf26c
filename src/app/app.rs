use super::event::{AppEvent, Report};
use super::mode::AppMode;
use super::text::prepare_text;
use crate::engine::ShellConfig;
use crate::reading::token::trim_blank;
use crate::reading::{count_occurrences, tokenize};
use crate::repl::parser::{scan_count_line, CountInput};

pub struct App {
    pub mode: AppMode,
    config: ShellConfig,
    text: Option<String>,
    expected_queries: usize,
    queries: Vec<String>,
}

impl App {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            mode: AppMode::Text,
            config,
            text: None,
            expected_queries: 0,
            queries: Vec::new(),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        self.mode == AppMode::Report
    }

    /// Prompt for the current mode, `None` once the report is out
    pub fn prompt(&self) -> Option<String> {
        match self.mode {
            AppMode::Text => Some("Please enter the text:".to_string()),
            AppMode::QueryCount => Some(
                "Enter the number of words to search for (positive integer):".to_string(),
            ),
            AppMode::QueryWord { index } => Some(format!("Enter word #{}:", index + 1)),
            AppMode::Report => None,
        }
    }

    /// Feed one line of user input to whatever the session is waiting for
    pub fn handle_line(&mut self, line: &str) -> Vec<AppEvent> {
        match self.mode {
            AppMode::Text => self.submit_text(line),
            AppMode::QueryCount => self.submit_count_line(line),
            AppMode::QueryWord { .. } => self.submit_word(line),
            AppMode::Report => Vec::new(),
        }
    }

    pub fn submit_text(&mut self, raw: &str) -> Vec<AppEvent> {
        let mut events = Vec::new();
        match prepare_text(raw, self.config.terminator) {
            Some(prepared) => {
                if prepared.terminator_appended {
                    events.push(AppEvent::TerminatorAppended(self.config.terminator));
                }
                tracing::debug!(chars = prepared.text.chars().count(), "Text accepted");
                self.text = Some(prepared.text);
            }
            None => events.push(AppEvent::EmptyText),
        }
        self.settle(&mut events);
        events
    }

    fn submit_count_line(&mut self, line: &str) -> Vec<AppEvent> {
        let mut events = Vec::new();
        for input in scan_count_line(line) {
            match input {
                CountInput::Valid(count) if count > self.config.max_queries => {
                    events.push(AppEvent::TooManyQueries {
                        requested: count,
                        max: self.config.max_queries,
                    });
                }
                CountInput::Valid(count) => self.expected_queries = count,
                CountInput::NonPositive(value) => events.push(AppEvent::NonPositiveCount(value)),
                CountInput::Invalid(token) => events.push(AppEvent::InvalidCount(token)),
            }
        }
        self.settle(&mut events);
        events
    }

    fn submit_word(&mut self, line: &str) -> Vec<AppEvent> {
        let mut events = Vec::new();
        let word = trim_blank(line);
        if word.is_empty() {
            events.push(AppEvent::EmptyWord);
        } else {
            self.queries.push(word.to_string());
        }
        self.settle(&mut events);
        events
    }

    /// Supply every query word up front, skipping the count and word prompts.
    ///
    /// Blank entries are dropped; an all-blank list leaves the prompts in place.
    pub fn preset_queries<I, S>(&mut self, words: I) -> Vec<AppEvent>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut events = Vec::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| trim_blank(word.as_ref()).to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            tracing::warn!("No usable preset query words, prompting instead");
        } else {
            self.expected_queries = words.len();
            self.queries = words;
        }
        self.settle(&mut events);
        events
    }

    fn next_mode(&self) -> AppMode {
        if self.text.is_none() {
            AppMode::Text
        } else if self.expected_queries == 0 {
            AppMode::QueryCount
        } else if self.queries.len() < self.expected_queries {
            AppMode::QueryWord {
                index: self.queries.len(),
            }
        } else {
            AppMode::Report
        }
    }

    /// Recompute the mode and produce the report when input is complete
    fn settle(&mut self, events: &mut Vec<AppEvent>) {
        let next = self.next_mode();
        if next == self.mode {
            return;
        }
        self.mode = next;

        if next == AppMode::Report {
            if let Some(text) = self.text.as_deref() {
                events.push(AppEvent::Report(self.analyze(text)));
            }
        }
    }

    fn analyze(&self, text: &str) -> Report {
        let document = tokenize(text);
        tracing::debug!(
            sentences = document.len(),
            tokens = document.token_count(),
            "Tokenized text"
        );

        let counts = count_occurrences(&document, &self.queries);
        for row in &counts {
            tracing::debug!(word = %row.word, sentences = row.sentences, "Counted query word");
        }

        Report { document, counts }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
