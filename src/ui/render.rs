use super::theme::Theme;
use crate::app::{AppEvent, Report};

/// Message shown for a rejected or adjusted input
pub fn notice_text(event: &AppEvent) -> Option<String> {
    let text = match event {
        AppEvent::TerminatorAppended('.') => {
            "Text was missing a sentence-ending punctuation, a period was added.".to_string()
        }
        AppEvent::TerminatorAppended(mark) => format!(
            "Text was missing a sentence-ending punctuation, '{}' was added.",
            mark
        ),
        AppEvent::EmptyText => "Text cannot be empty. Please try again.".to_string(),
        AppEvent::InvalidCount(_) => "Please enter a valid number.".to_string(),
        AppEvent::NonPositiveCount(_) => {
            "The number of words must be positive. Please try again.".to_string()
        }
        AppEvent::TooManyQueries { max, .. } => {
            format!("At most {} words can be searched for. Please try again.", max)
        }
        AppEvent::EmptyWord => "Word cannot be empty. Please enter again.".to_string(),
        AppEvent::Report(_) => return None,
    };
    Some(text)
}

/// Lines printed once the session is complete
pub fn render_report(report: &Report, theme: &Theme, show_sentences: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if show_sentences {
        lines.push(String::new());
        lines.push("Sentences:".to_string());
        for (index, sentence) in report.document.iter().enumerate() {
            let line = format!("  {}. {}", index + 1, sentence);
            lines.push(theme.paint(&line, theme.dimmed));
        }
    }

    lines.push(String::new());
    lines.push("Word(s):".to_string());
    for row in &report.counts {
        lines.push(theme.paint(&row.to_string(), theme.result));
    }
    lines
}

pub fn render_event(event: &AppEvent, theme: &Theme, show_sentences: bool) -> Vec<String> {
    match event {
        AppEvent::Report(report) => render_report(report, theme, show_sentences),
        other => notice_text(other)
            .map(|text| vec![theme.paint(&text, theme.notice)])
            .unwrap_or_default(),
    }
}
