//! CALDER solution file parser.
//!
//! This module provides [SolutionParser] to read the matrices CALDER writes
//! into its solution file, most importantly the frequency matrix `Fhat`.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_file`] - parses a file, returns a [SolutionBundle]
//! * [`parse_str`] - parses text held in memory
//!
//! # Format
//! A solution file is a sequence of blocks separated by blank lines:
//! * `block ::= name NL column_labels NL row (NL row)*`
//! * `column_labels ::= label (',' label)*`
//! * `row ::= row_label (',' number)*`
//!
//! Furthermore:
//! * Every row has exactly one number per column label
//! * An empty leading column label (corner cell) is ignored
//! * The number of blocks is not stated anywhere; EOF ends the file
//! * A block named `Fhat` must be present
//!
//! Matrices are stored transposed, see [LabeledMatrix].

pub mod block;
mod defs;
pub mod matrix;
pub mod parser;

pub use defs::FREQUENCY_MATRIX;
pub use matrix::LabeledMatrix;
pub use parser::{SolutionBundle, SolutionParser};

use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a CALDER solution file using default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// Returns an error if the file cannot be read, a block is malformed,
/// or no `Fhat` block is present.
///
/// # Example
/// ```no_run
/// use calder_neutree::solution::parse_file;
///
/// let bundle = parse_file("calder.sol.csv")?;
/// let (num_samples, num_svids) = bundle.frequency_matrix().shape();
/// println!("Fhat has {num_samples} samples and {num_svids} supervariants");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SolutionBundle, ParsingError> {
    SolutionParser::new().parse_file(path)
}

/// Parses CALDER solution text using default settings.
pub fn parse_str<S: AsRef<str>>(solution: S) -> Result<SolutionBundle, ParsingError> {
    SolutionParser::new().parse_str(solution.as_ref())
}
