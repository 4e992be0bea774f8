//! Structs and logic to parse CALDER solution files.
//!
//! This module provides the [SolutionParser] and the [SolutionBundle] it
//! produces.

use crate::model::{SvidOrdering, TreeError};
use crate::parser::{LineParser, LineSource, ParsingError, ReadStrategy};
use crate::solution::block::read_block;
use crate::solution::defs::FREQUENCY_MATRIX;
use crate::solution::matrix::LabeledMatrix;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

// =#========================================================================#=
// SOLUTION BUNDLE
// =#========================================================================#=
/// All matrices of a solution file, by name.
///
/// A bundle always contains the frequency matrix it was parsed for
/// (by default `Fhat`).
#[derive(Debug, Clone)]
pub struct SolutionBundle {
    /// Matrices in order of first appearance
    matrices: Vec<LabeledMatrix>,
    /// Map from matrix name to its position in `matrices`
    index: HashMap<String, usize>,
    /// Position of the frequency matrix in `matrices`
    frequency_index: usize,
}

impl SolutionBundle {
    /// Returns the matrix with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&LabeledMatrix> {
        self.index.get(name).map(|&i| &self.matrices[i])
    }

    /// Returns the frequency matrix (`Fhat` unless configured otherwise).
    pub fn frequency_matrix(&self) -> &LabeledMatrix {
        &self.matrices[self.frequency_index]
    }

    /// Consumes the bundle and returns the frequency matrix.
    pub fn into_frequency_matrix(mut self) -> LabeledMatrix {
        self.matrices.swap_remove(self.frequency_index)
    }

    /// Builds the svid ordering from the frequency matrix's row labels.
    ///
    /// The first row label is the reserved root entry.
    ///
    /// # Errors
    /// Returns [TreeError::MalformedTree] if a row label occurs twice.
    pub fn svid_ordering(&self) -> Result<SvidOrdering, TreeError> {
        SvidOrdering::new(self.frequency_matrix().row_labels().to_vec())
    }

    /// Names of all matrices, in order of first appearance.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matrices.iter().map(|m| m.name())
    }

    /// Returns the number of distinct matrices.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Always `false`; a bundle holds at least the frequency matrix.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

// =#========================================================================#=
// SOLUTION PARSER
// =#========================================================================#=
/// Parser for CALDER solution files.
///
/// Reads blocks until EOF and requires the frequency matrix to be present.
///
/// # Example
/// ```
/// use calder_neutree::solution::SolutionParser;
///
/// let solution = "U\ns1,s2\nS0,1,0\n\nFhat\ns1,s2\nS0,1.0,1.0\nS1,0.4,0.7\n";
/// let bundle = SolutionParser::new().parse_str(solution)?;
///
/// assert_eq!(bundle.len(), 2);
/// assert_eq!(bundle.frequency_matrix().row_labels(), &["S0", "S1"]);
/// # Ok::<(), calder_neutree::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolutionParser {
    frequency_matrix: String,
    read_strategy: ReadStrategy,
}

impl Default for SolutionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionParser {
    /// Creates a parser requiring an `Fhat` block, reading files into memory.
    pub fn new() -> Self {
        SolutionParser {
            frequency_matrix: FREQUENCY_MATRIX.to_string(),
            read_strategy: ReadStrategy::default(),
        }
    }

    /// Sets the name of the block that must be present.
    pub fn with_frequency_matrix<N: Into<String>>(mut self, name: N) -> Self {
        self.frequency_matrix = name.into();
        self
    }

    /// Sets how files are read.
    pub fn with_read_strategy(mut self, read_strategy: ReadStrategy) -> Self {
        self.read_strategy = read_strategy;
        self
    }

    /// Parses the solution file at `path`.
    ///
    /// The file is closed before this method returns, also on failure.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, a block is malformed,
    /// or the frequency matrix is missing.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<SolutionBundle, ParsingError> {
        match self.read_strategy {
            ReadStrategy::InMemory => self.parse(LineParser::from_file(path)?),
            ReadStrategy::Buffered => self.parse(LineParser::from_file_buffered(path)?),
        }
    }

    /// Parses solution text held in memory.
    pub fn parse_str(&self, solution: &str) -> Result<SolutionBundle, ParsingError> {
        self.parse(LineParser::for_str(solution))
    }

    /// Parses all blocks provided by `parser` until EOF.
    pub fn parse<S: LineSource>(&self, mut parser: LineParser<S>) -> Result<SolutionBundle, ParsingError> {
        let mut matrices: Vec<LabeledMatrix> = Vec::new();
        let mut index = HashMap::new();

        while let Some(block) = read_block(&mut parser)? {
            debug!(name = block.name(), shape = ?block.shape(), "read matrix block");
            let existing = index.get(block.name()).copied();
            match existing {
                Some(i) => {
                    warn!(name = block.name(), "duplicate matrix block, keeping the last one");
                    matrices[i] = block;
                }
                None => {
                    index.insert(block.name().to_string(), matrices.len());
                    matrices.push(block);
                }
            }
        }

        let frequency_index = *index
            .get(&self.frequency_matrix)
            .ok_or_else(|| ParsingError::missing_matrix(&self.frequency_matrix))?;

        Ok(SolutionBundle {
            matrices,
            index,
            frequency_index,
        })
    }
}
