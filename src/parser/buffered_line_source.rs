//! Buffered reader implementation of line source for parsing.
//!
//! This module provides [BufferedLineSource], which wraps a file in a [BufReader]
//! and hands out one line at a time.

use crate::parser::line_source::{LineSource, strip_carriage_return};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =#========================================================================#=
// BUFFERED LINE SOURCE
// =#========================================================================#=
/// A buffered line source for streaming files.
///
/// The file stays open for as long as the source lives and is closed when
/// the source (and thus the owning parser) is dropped.
pub struct BufferedLineSource {
    /// Underlying reader of file
    reader: BufReader<File>,

    /// Reused buffer for the line currently being read
    buffer: String,

    /// Number of lines handed out so far
    line_number: usize,
}

impl BufferedLineSource {
    /// Creates a new buffered line source from a file path.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<BufferedLineSource> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            buffer: String::new(),
            line_number: 0,
        })
    }
}

impl LineSource for BufferedLineSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        let read = self.reader.read_line(&mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.line_number += 1;
        Ok(Some(strip_carriage_return(self.buffer.clone())))
    }

    #[inline]
    fn line_number(&self) -> usize {
        self.line_number
    }
}

// =#========================================================================#=
// TESTS - BUFFERED LINE SOURCE
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_buffered_reads_all_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Fhat\r\ns1,s2\nS0,1,1").unwrap();

        let mut source = BufferedLineSource::from_file(file.path()).unwrap();
        assert_eq!(source.next_line().unwrap().as_deref(), Some("Fhat"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("s1,s2"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("S0,1,1"));
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.line_number(), 3);
    }
}
