//! Interactive prompt loop
//!
//! ## Module Structure
//!
//! - **parser.rs**: Classifies tokens typed at the query-count prompt
//! - **input.rs**: Line reader over stdin or any other `BufRead`
//!
//! `run_session` ties them to an [`App`]: print the prompt for the current
//! mode, read a line, feed it to the app, print whatever it emits.

pub mod input;
pub mod parser;

pub use input::LineReader;
pub use parser::{parse_count_token, scan_count_line, CountInput};

use crate::app::{App, AppEvent, AppMode};
use crate::engine::ShellError;
use crate::ui::{render_event, Theme};
use std::io::{BufRead, Write};

/// Write the rendered form of each event
pub fn write_events<W: Write>(
    out: &mut W,
    events: &[AppEvent],
    theme: &Theme,
    show_sentences: bool,
) -> Result<(), ShellError> {
    for event in events {
        for line in render_event(event, theme, show_sentences) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// Prompt and read until the app has produced its report
///
/// The count prompt behaves like a token scanner: each rejected token is
/// answered with its notice and the prompt again, and a blank line is read
/// without re-prompting.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut App,
    reader: &mut LineReader<R>,
    out: &mut W,
    theme: &Theme,
) -> Result<(), ShellError> {
    let show_sentences = app.config().show_sentences;
    let mut prompt_due = true;

    while let Some(prompt) = app.prompt() {
        if prompt_due {
            writeln!(out, "{}", theme.paint(&prompt, theme.prompt))?;
        }
        out.flush()?;

        let line = match reader.read_line()? {
            Some(line) => line,
            None => {
                tracing::warn!(stage = app.mode.stage(), "Input closed before session finished");
                return Err(ShellError::EndOfInput {
                    stage: app.mode.stage(),
                });
            }
        };

        let mode = app.mode;
        let events = app.handle_line(&line);
        for event in &events {
            write_events(out, std::slice::from_ref(event), theme, show_sentences)?;
            if event.is_count_rejection() {
                writeln!(out, "{}", theme.paint(&prompt, theme.prompt))?;
            }
        }

        prompt_due = app.mode != mode || mode != AppMode::QueryCount;
    }

    out.flush()?;
    Ok(())
}
