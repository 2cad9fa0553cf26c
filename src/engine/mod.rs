pub mod config;
pub mod error;

pub use config::ShellConfig;
pub use error::{load_text_file, LoadError, ShellError};
