//! Vertex label resolution for DOT tree files.
//!
//! CALDER names the vertices of its DOT output with internal tokens (`v0`,
//! `v1`, ...) and attaches the supervariant id through a `label` attribute.
//! [VertexLabelTable] records these declarations and resolves edge endpoints
//! from token space into svid space.

use crate::model::tree_error::TreeError;
use std::collections::HashMap;
use std::fmt;

// =#========================================================================#=
// VERTEX LABEL TABLE
// =#========================================================================#=
/// Maps DOT vertex tokens to external identifiers (svids).
///
/// Declaring the same token twice overwrites the earlier declaration
/// (last write wins).
///
/// # Example
/// ```
/// use calder_neutree::model::VertexLabelTable;
///
/// let mut table = VertexLabelTable::new();
/// table.insert("v0", "S0");
/// table.insert("v1", "S1");
///
/// assert_eq!(table.resolve("v1").unwrap(), "S1");
/// assert!(table.resolve("v7").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexLabelTable {
    map: HashMap<String, String>,
}

impl VertexLabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `token -> label`.
    ///
    /// # Returns
    /// The label previously declared for `token`, if any.
    pub fn insert<T: Into<String>, L: Into<String>>(&mut self, token: T, label: L) -> Option<String> {
        self.map.insert(token.into(), label.into())
    }

    /// Looks up the label of a token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(|s| s.as_str())
    }

    /// Resolves a token into its label.
    ///
    /// # Errors
    /// Returns [TreeError::UnresolvedVertex] if no label was declared for `token`.
    pub fn resolve(&self, token: &str) -> Result<&str, TreeError> {
        self.get(token)
            .ok_or_else(|| TreeError::UnresolvedVertex(token.to_string()))
    }

    /// Checks if a label was declared for the token.
    pub fn contains_token(&self, token: &str) -> bool {
        self.map.contains_key(token)
    }

    /// Returns the number of declared tokens.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over all `(token, label)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(t, l)| (t.as_str(), l.as_str()))
    }
}

impl fmt::Display for VertexLabelTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort();
        writeln!(f, "VertexLabelTable ({} vertices):", pairs.len())?;
        for (token, label) in pairs {
            writeln!(f, "  {} -> {}", token, label)?;
        }
        Ok(())
    }
}
