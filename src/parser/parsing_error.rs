//! Error types for the CALDER solution, DOT and SSM parsers.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading the text formats of this crate.

use crate::parser::line_parser::LineParser;
use crate::parser::line_source::LineSource;
use std::error::Error;
use std::fmt;

/// Maximum number of characters of the offending line kept as context
const DEFAULT_CONTEXT_LENGTH: usize = 80;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Malformed matrix block - {0}")]
    MalformedBlock(String),
    #[error("Missing matrix '{0}' in solution file")]
    MissingMatrix(String),
    #[error("Unrecognized DOT syntax: {0}")]
    UnrecognizedDotSyntax(String),
    #[error("Invalid SSM file - {0}")]
    InvalidSsm(String),
    #[error("Invalid parameter file - {0}")]
    InvalidParams(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line number and offending line).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    line: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: LineSource>(kind: ParsingErrorType, parser: &LineParser<S>) -> Self {
        Self {
            kind,
            line: parser.line_number(),
            context: parser.get_context(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for MalformedBlock
    pub fn malformed_block<S: LineSource>(parser: &LineParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::MalformedBlock(msg), parser)
    }

    /// Convenience constructor for UnrecognizedDotSyntax
    pub fn unrecognized_dot_syntax<S: LineSource>(parser: &LineParser<S>, line: &str) -> Self {
        Self::from_parser(ParsingErrorType::UnrecognizedDotSyntax(line.to_string()), parser)
    }

    /// Convenience constructor for MissingMatrix
    pub fn missing_matrix(name: &str) -> Self {
        Self::without_context(ParsingErrorType::MissingMatrix(name.to_string()))
    }

    /// Convenience constructor for InvalidSsm, with the offending line number
    pub fn invalid_ssm(line: usize, msg: String) -> Self {
        Self {
            kind: ParsingErrorType::InvalidSsm(msg),
            line,
            context: String::new(),
        }
    }

    /// Convenience constructor for InvalidParams
    pub fn invalid_params(msg: String) -> Self {
        Self::without_context(ParsingErrorType::InvalidParams(msg))
    }

    /// Create a ParsingError without parser context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            line: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the 1-based line where the error occurred, 0 if unknown
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if self.line > 0 {
            write!(f, " at line {}", self.line)?;
        }

        if !self.context.is_empty() {
            write!(f, "\n  Context: {}", self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
