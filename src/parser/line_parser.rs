//! Low-level line-by-line parser for text formats.
//!
//! This module provides [LineParser] for parsing line-oriented text formats with
//! support for trimming, skipping blank lines and context extraction for error
//! reporting. Used as the foundation for the solution and DOT parsers.

use crate::parser::buffered_line_source::BufferedLineSource;
use crate::parser::in_memory_line_source::InMemoryLineSource;
use crate::parser::line_source::LineSource;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// =#========================================================================#=
// READ STRATEGY
// =#========================================================================#=
/// Controls how a file is read during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReadStrategy {
    /// Load the entire file into memory before parsing (default).
    #[default]
    InMemory,

    /// Read the file line by line through a buffered I/O reader.
    Buffered,
}

// =#========================================================================#=
// LINE PARSER
// =#========================================================================#=
/// A line-by-line parser over any [LineSource].
///
/// Remembers the last line it handed out, so that errors can report the
/// offending line together with its line number.
///
/// # Example
/// ```
/// use calder_neutree::parser::LineParser;
///
/// let mut parser = LineParser::for_str("\n\n  Fhat  \ns1,s2\n");
/// assert_eq!(parser.skip_blank_lines().unwrap().as_deref(), Some("Fhat"));
/// assert_eq!(parser.line_number(), 3);
/// assert_eq!(parser.next_trimmed().unwrap().as_deref(), Some("s1,s2"));
/// assert_eq!(parser.next_trimmed().unwrap(), None);
/// ```
pub struct LineParser<S: LineSource> {
    source: S,
    last_line: Option<String>,
}

impl LineParser<InMemoryLineSource> {
    /// Creates a new `LineParser` from a string slice by copying it.
    ///
    /// # Arguments
    /// * `input` - The text to parse
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryLineSource::from_string(input.to_string()))
    }

    /// Creates a new `LineParser` with the whole file loaded into memory.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        Ok(Self::new(InMemoryLineSource::from_file(path)?))
    }
}

impl LineParser<BufferedLineSource> {
    /// Creates a new `LineParser` reading the file through a buffered reader.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file_buffered<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        Ok(Self::new(BufferedLineSource::from_file(path)?))
    }
}

impl<S: LineSource> LineParser<S> {
    /// Creates a new `LineParser` from a line source.
    ///
    /// # Arguments
    /// * `source` - The line source to parse
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_line: None,
        }
    }

    /// Gets the next line as is and consumes it.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The next line if available
    /// * `Ok(None)` - If at end of data (EOF)
    ///
    /// # Errors
    /// Returns an error if the underlying source fails to read.
    pub fn next_line(&mut self) -> Result<Option<String>, ParsingError> {
        let line = self.source.next_line()?;
        if let Some(line) = &line {
            self.last_line = Some(line.clone());
        }
        Ok(line)
    }

    /// Gets the next line with leading and trailing whitespace removed.
    ///
    /// # Errors
    /// Returns an error if the underlying source fails to read.
    pub fn next_trimmed(&mut self) -> Result<Option<String>, ParsingError> {
        Ok(self.next_line()?.map(|line| line.trim().to_string()))
    }

    /// Skips (consumes) all consecutive blank lines and returns the first
    /// non-blank line, trimmed.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The first non-blank line
    /// * `Ok(None)` - If EOF was reached before any non-blank line
    ///
    /// # Errors
    /// Returns an error if the underlying source fails to read.
    pub fn skip_blank_lines(&mut self) -> Result<Option<String>, ParsingError> {
        while let Some(line) = self.next_trimmed()? {
            if !line.is_empty() {
                return Ok(Some(line));
            }
        }

        Ok(None)
    }

    /// Returns the 1-based number of the last line read, 0 before any read.
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    /// Returns up to `k` characters of the last line read, for error context.
    pub fn get_context(&self, k: usize) -> String {
        match &self.last_line {
            Some(line) => line.chars().take(k).collect(),
            None => String::new(),
        }
    }
}

// =#========================================================================#=
// TESTS - LINE PARSER
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_blank_lines_reaches_eof() {
        let mut parser = LineParser::for_str("\n   \n\t\n");
        assert_eq!(parser.skip_blank_lines().unwrap(), None);
    }

    #[test]
    fn test_context_is_last_line() {
        let mut parser = LineParser::for_str("first\nsecond line\n");
        parser.next_line().unwrap();
        parser.next_line().unwrap();
        assert_eq!(parser.get_context(6), "second");
        assert_eq!(parser.line_number(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LineParser::from_file("does/not/exist.txt");
        assert!(matches!(
            result.map(|_| ()).unwrap_err().kind(),
            crate::parser::ParsingErrorType::IoError(_)
        ));
    }
}
