use std::io::{self, BufRead};

/// Line-at-a-time reader over any buffered source
///
/// Provides:
/// - Line terminator stripping (`\n` and `\r\n`)
/// - `None` at end of input instead of an empty string
pub struct LineReader<R> {
    source: R,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: String::new(),
        }
    }

    /// Read the next line, without its terminator
    ///
    /// This is a blocking call when reading from stdin
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.source.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        let line = self.buffer.trim_end_matches(['\n', '\r']);
        Ok(Some(line.to_string()))
    }
}
