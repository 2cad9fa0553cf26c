use crate::reading::token::trim_blank;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the interactive shell. Bad user input is not an error; the
/// shell re-prompts instead.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended while waiting for {stage}")]
    EndOfInput { stage: &'static str },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads text for analysis from a UTF-8 file, rejecting blank files.
pub fn load_text_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if trim_blank(&content).is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}
