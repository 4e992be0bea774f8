//! Line source abstractions for parsing.
//!
//! This module provides the [LineSource] trait, implemented by
//! [InMemoryLineSource](crate::parser::in_memory_line_source::InMemoryLineSource)
//! and [BufferedLineSource](crate::parser::buffered_line_source::BufferedLineSource).

use std::io;

// =#========================================================================#=
// LINE SOURCE (Trait)
// =#========================================================================#=
/// Trait defining the interface for different line sources used by
/// [LineParser](crate::parser::LineParser).
///
/// This trait abstracts over different ways of accessing text line by line:
/// - Text held entirely in memory (`String`)
/// - Buffered reading from files (`BufReader<File>`)
///
/// Both CALDER output formats are small, line-oriented text files, so the
/// same parser logic works with either source.
pub trait LineSource {
    /// Get the next line and advance (consume it).
    ///
    /// Line terminators (`\n` and `\r\n`) are not part of the returned line.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The next line if available
    /// * `Ok(None)` - If at end of data (EOF)
    /// * `Err(io::Error)` - If the underlying reader fails
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Returns the 1-based number of the line last returned by
    /// [next_line](Self::next_line), or 0 if no line was read yet.
    fn line_number(&self) -> usize;
}

/// Removes a trailing carriage return left over from `\r\n` line endings.
pub(crate) fn strip_carriage_return(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}
