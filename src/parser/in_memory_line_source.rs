//! In-memory implementation of line source for parsing.

use crate::parser::line_source::{LineSource, strip_carriage_return};
use std::fs;
use std::io;
use std::path::Path;

// =#========================================================================#=
// IN MEMORY LINE SOURCE
// =#========================================================================#=
/// An in-memory line source that owns its text.
///
/// The default line source; CALDER solution and DOT files comfortably fit
/// into memory.
pub struct InMemoryLineSource {
    /// The owned text being parsed
    input: String,
    /// Current byte offset into `input`
    pos: usize,
    /// Number of lines handed out so far
    line_number: usize,
}

impl InMemoryLineSource {
    /// Creates a new in-memory line source from a String.
    ///
    /// # Arguments
    /// * `input` - The text to parse
    pub fn from_string(input: String) -> Self {
        Self {
            input,
            pos: 0,
            line_number: 0,
        }
    }

    /// Reads the entire file into memory.
    ///
    /// The file handle is released before this function returns.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<InMemoryLineSource> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_string(contents))
    }
}

impl LineSource for InMemoryLineSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.pos >= self.input.len() {
            return Ok(None);
        }

        let rest = &self.input[self.pos..];
        let (line, consumed) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        let line = line.to_string();

        self.pos += consumed;
        self.line_number += 1;
        Ok(Some(strip_carriage_return(line)))
    }

    #[inline]
    fn line_number(&self) -> usize {
        self.line_number
    }
}
