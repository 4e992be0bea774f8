//! Structs and logic to parse CALDER DOT tree files.
//!
//! This module provides the [DotParser], configured by a [LinePolicy], and
//! the [DotGraph] it produces.

use crate::dot::classifier::{DotLine, DotLineClassifier};
use crate::model::{Edge, VertexLabelTable};
use crate::parser::{LineParser, LineSource, ParsingError, ReadStrategy};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

// =#========================================================================#=
// LINE POLICY
// =#========================================================================#=
/// How the [DotParser] treats lines that match none of the DOT patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePolicy {
    /// Skip unrecognized lines, e.g. graph attributes (default).
    #[default]
    Permissive,

    /// Fail with `UnrecognizedDotSyntax` on the first unrecognized line.
    Strict,
}

// =#========================================================================#=
// DOT GRAPH
// =#========================================================================#=
/// Vertex labels and edges read from a DOT file, still in token space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotGraph {
    labels: VertexLabelTable,
    edges: Vec<Edge>,
}

impl DotGraph {
    /// The `token -> label` declarations.
    pub fn labels(&self) -> &VertexLabelTable {
        &self.labels
    }

    /// Edges in order of appearance.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct tokens with a label declaration or edge endpoint.
    pub fn num_vertices(&self) -> usize {
        let mut tokens: HashSet<&str> = self.labels.iter().map(|(token, _)| token).collect();
        for edge in &self.edges {
            tokens.insert(edge.parent());
            tokens.insert(edge.child());
        }
        tokens.len()
    }

    /// Splits the graph into its label table and edge list.
    pub fn into_parts(self) -> (VertexLabelTable, Vec<Edge>) {
        (self.labels, self.edges)
    }
}

// =#========================================================================#=
// DOT PARSER
// =#========================================================================#=
/// Parser for the DOT subset CALDER writes its trees in.
///
/// # Example
/// ```
/// use calder_neutree::dot::{DotParser, LinePolicy};
///
/// let dot = "digraph data_tree1 {\nv0 [label=\"S0\"];\nv1 [label=\"S1\"];\nv0 -> v1;\n}\n";
/// let graph = DotParser::new().with_line_policy(LinePolicy::Strict).parse_str(dot)?;
///
/// assert_eq!(graph.edges().len(), 1);
/// assert_eq!(graph.labels().get("v1"), Some("S1"));
/// # Ok::<(), calder_neutree::parser::ParsingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotParser {
    line_policy: LinePolicy,
    read_strategy: ReadStrategy,
    classifier: DotLineClassifier,
}

impl DotParser {
    /// Creates a permissive parser reading files into memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how unrecognized lines are treated.
    pub fn with_line_policy(mut self, line_policy: LinePolicy) -> Self {
        self.line_policy = line_policy;
        self
    }

    /// Sets how files are read.
    pub fn with_read_strategy(mut self, read_strategy: ReadStrategy) -> Self {
        self.read_strategy = read_strategy;
        self
    }

    /// Parses the DOT file at `path`.
    ///
    /// The file is closed before this method returns, also on failure.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, or under
    /// [LinePolicy::Strict] if a line is not recognized.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<DotGraph, ParsingError> {
        match self.read_strategy {
            ReadStrategy::InMemory => self.parse(LineParser::from_file(path)?),
            ReadStrategy::Buffered => self.parse(LineParser::from_file_buffered(path)?),
        }
    }

    /// Parses DOT text held in memory.
    pub fn parse_str(&self, dot: &str) -> Result<DotGraph, ParsingError> {
        self.parse(LineParser::for_str(dot))
    }

    /// Parses lines provided by `parser` until the closing brace or EOF.
    pub fn parse<S: LineSource>(&self, mut parser: LineParser<S>) -> Result<DotGraph, ParsingError> {
        let mut graph = DotGraph::default();

        while let Some(line) = parser.next_trimmed()? {
            if line.is_empty() {
                continue;
            }

            match self.classifier.classify(&line) {
                Some(DotLine::Header) => {}
                Some(DotLine::VertexLabel { token, label }) => {
                    if let Some(previous) = graph.labels.insert(token, label) {
                        warn!(token, previous = %previous, label, "vertex label redeclared, keeping the last one");
                    }
                }
                Some(DotLine::Edge { parent, child }) => {
                    graph.edges.push(Edge::new(parent, child));
                }
                Some(DotLine::Terminator) => break,
                None => match self.line_policy {
                    LinePolicy::Permissive => {
                        debug!(line = parser.line_number(), content = %line, "skipping unrecognized DOT line");
                    }
                    LinePolicy::Strict => {
                        return Err(ParsingError::unrecognized_dot_syntax(&parser, &line));
                    }
                },
            }
        }

        debug!(
            vertices = graph.labels.len(),
            edges = graph.edges.len(),
            "read DOT graph"
        );
        Ok(graph)
    }
}
