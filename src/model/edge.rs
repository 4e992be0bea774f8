//! Directed edge between two DOT vertex tokens.

use std::fmt;

/// An edge as declared in a DOT file (`v0 -> v1;`), before label resolution.
///
/// Direction is the natural DOT direction: parent to child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    parent: String,
    child: String,
}

impl Edge {
    pub fn new<P: Into<String>, C: Into<String>>(parent: P, child: C) -> Self {
        Edge {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Vertex token of the edge's tail.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Vertex token of the edge's head.
    pub fn child(&self) -> &str {
        &self.child
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.parent, self.child)
    }
}
