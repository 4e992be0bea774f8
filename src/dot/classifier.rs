//! Classification of single DOT lines.

use crate::dot::defs::{EDGE_PATTERN, HEADER_PATTERN, TERMINATOR_PATTERN, VERTEX_LABEL_PATTERN};
use regex::Regex;

// =#========================================================================#=
// DOT LINE
// =#========================================================================#=
/// Kind of a recognized DOT line, with its captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotLine<'a> {
    /// `digraph <name> {`
    Header,
    /// `<token> [label="<label>"];`
    VertexLabel { token: &'a str, label: &'a str },
    /// `<parent> -> <child>;`
    Edge { parent: &'a str, child: &'a str },
    /// `}`
    Terminator,
}

// =#========================================================================#=
// DOT LINE CLASSIFIER
// =#========================================================================#=
/// Matches trimmed lines against the four DOT line patterns.
///
/// Patterns are tried in a fixed order: header, vertex label, edge,
/// terminator. The first match wins.
///
/// # Example
/// ```
/// use calder_neutree::dot::{DotLine, DotLineClassifier};
///
/// let classifier = DotLineClassifier::new();
/// assert_eq!(
///     classifier.classify("v1 -> v2;"),
///     Some(DotLine::Edge { parent: "v1", child: "v2" })
/// );
/// assert_eq!(classifier.classify("rankdir=LR;"), None);
/// ```
#[derive(Debug, Clone)]
pub struct DotLineClassifier {
    header_re: Regex,
    vertex_label_re: Regex,
    edge_re: Regex,
    terminator_re: Regex,
}

impl Default for DotLineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DotLineClassifier {
    pub fn new() -> Self {
        DotLineClassifier {
            header_re: Regex::new(HEADER_PATTERN).expect("header pattern must compile"),
            vertex_label_re: Regex::new(VERTEX_LABEL_PATTERN).expect("vertex label pattern must compile"),
            edge_re: Regex::new(EDGE_PATTERN).expect("edge pattern must compile"),
            terminator_re: Regex::new(TERMINATOR_PATTERN).expect("terminator pattern must compile"),
        }
    }

    /// Classifies a trimmed line.
    ///
    /// # Returns
    /// * `Some(DotLine)` - The first matching line kind
    /// * `None` - If no pattern matches
    pub fn classify<'a>(&self, line: &'a str) -> Option<DotLine<'a>> {
        if self.header_re.is_match(line) {
            return Some(DotLine::Header);
        }

        if let Some(caps) = self.vertex_label_re.captures(line) {
            let (_, [token, label]) = caps.extract();
            return Some(DotLine::VertexLabel { token, label });
        }

        if let Some(caps) = self.edge_re.captures(line) {
            let (_, [parent, child]) = caps.extract();
            return Some(DotLine::Edge { parent, child });
        }

        if self.terminator_re.is_match(line) {
            return Some(DotLine::Terminator);
        }

        None
    }
}
