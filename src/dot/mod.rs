//! DOT tree file parser.
//!
//! This module provides [DotParser] to read the tree structure CALDER writes
//! as a DOT graph. The result is a [DotGraph]: a vertex-label table and an
//! edge list, both still in vertex token space. Use
//! [TreeReconciler](crate::model::TreeReconciler) to turn it into a tree over
//! supervariants.
//!
//! # Quick API
//! * [`parse_file`] - parses a file with the permissive line policy
//! * [`parse_str`] - parses text held in memory
//!
//! # Format
//! Only a small subset of DOT is understood, one statement per line:
//! * `digraph <name> {` - header, skipped
//! * `<token> [label="<svid>"];` - vertex label declaration
//! * `<token> -> <token>;` - edge from parent to child
//! * `}` - end of graph; anything after it is ignored
//!
//! Furthermore:
//! * Leading and trailing whitespace and blank lines are ignored
//! * Redeclaring a token's label overwrites the earlier declaration
//! * Any other line is skipped or rejected depending on the [LinePolicy]

pub mod classifier;
mod defs;
pub mod parser;

pub use classifier::{DotLine, DotLineClassifier};
pub use parser::{DotGraph, DotParser, LinePolicy};

use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a CALDER DOT file using default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Example
/// ```no_run
/// use calder_neutree::dot::parse_file;
///
/// let graph = parse_file("calder.tree.dot")?;
/// println!("{} edges over {} vertices", graph.edges().len(), graph.num_vertices());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DotGraph, ParsingError> {
    DotParser::new().parse_file(path)
}

/// Parses CALDER DOT text using default settings.
pub fn parse_str<S: AsRef<str>>(dot: S) -> Result<DotGraph, ParsingError> {
    DotParser::new().parse_str(dot.as_ref())
}
