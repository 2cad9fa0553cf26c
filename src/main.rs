use std::io;
use std::path::PathBuf;

use clap::Parser;
use sentcount::app::App;
use sentcount::engine::{load_text_file, ShellConfig};
use sentcount::repl::{run_session, write_events, LineReader};
use sentcount::telemetry;
use sentcount::ui::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "sentcount",
    about = "Count how many sentences of a text contain each query word"
)]
struct Cli {
    /// Read the text from a file instead of prompting for it
    #[arg(long)]
    file: Option<PathBuf>,

    /// Query word; repeat to search for several (skips the word prompts)
    #[arg(long = "word", short = 'w')]
    words: Vec<String>,

    /// List the tokenized sentences before the counts
    #[arg(long)]
    show_sentences: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Largest number of query words accepted at the prompt
    #[arg(long, default_value_t = ShellConfig::default().max_queries)]
    max_queries: usize,
}

impl Cli {
    fn config(&self) -> ShellConfig {
        ShellConfig {
            max_queries: self.max_queries,
            show_sentences: self.show_sentences,
            color: !self.no_color,
            ..ShellConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let cli = Cli::parse();
    let config = cli.config();
    let theme = Theme::for_stdout(config.color);
    let show_sentences = config.show_sentences;

    let mut app = App::new(config);
    let mut stdout = io::stdout().lock();

    if let Some(path) = &cli.file {
        let text = load_text_file(path).map_err(|e| {
            tracing::error!(path = %path.display(), "Failed to load text: {e}");
            e
        })?;
        tracing::info!(path = %path.display(), "Loaded text from file");
        let events = app.submit_text(&text);
        write_events(&mut stdout, &events, &theme, show_sentences)?;
    }

    if !cli.words.is_empty() {
        let events = app.preset_queries(&cli.words);
        write_events(&mut stdout, &events, &theme, show_sentences)?;
    }

    let mut reader = LineReader::new(io::stdin().lock());
    run_session(&mut app, &mut reader, &mut stdout, &theme).map_err(|e| {
        tracing::error!("Session ended early: {e}");
        e
    })?;

    Ok(())
}
