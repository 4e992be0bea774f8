//! Supervariant ordering for tree reconstruction output.
//!
//! - `SvidOrdering`: Bidirectional mapping between supervariant ids and the
//!   index space of a [ParentVector](crate::model::ParentVector).

use crate::model::tree_error::TreeError;
use std::collections::HashMap;
use std::fmt;

/// Index of a supervariant (and thus a tree node) in an [SvidOrdering].
pub type NodeIndex = usize;

/// Index of the root node, the reserved first entry of every ordering.
pub const ROOT_INDEX: NodeIndex = 0;

// =#========================================================================#=
// SVID ORDERING
// =#========================================================================#=
/// Maps supervariant ids (svids) to node indices and back.
///
/// The ordering is the authoritative index space for the output tree. It is
/// taken verbatim from the row labels of the frequency matrix: the first
/// entry is reserved for the root, all further entries are the
/// supervariants that receive a parent in the tree.
///
/// # Example
/// ```
/// use calder_neutree::model::SvidOrdering;
///
/// let labels = vec!["S0".to_string(), "S1".to_string(), "S2".to_string()];
/// let ordering = SvidOrdering::new(labels).unwrap();
///
/// assert_eq!(ordering.root(), "S0");
/// assert_eq!(ordering.index_of("S2"), Some(2));
/// assert_eq!(ordering.non_root(), &["S1".to_string(), "S2".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SvidOrdering {
    /// Svids in index order, root first
    labels: Vec<String>,
    /// Map from svid to its index
    map: HashMap<String, NodeIndex>,
}

impl SvidOrdering {
    /// Creates an ordering from labels given in index order, root first.
    ///
    /// # Errors
    /// Returns [TreeError::MalformedTree] if `labels` is empty
    /// or contains a label twice.
    pub fn new(labels: Vec<String>) -> Result<Self, TreeError> {
        if labels.is_empty() {
            return Err(TreeError::MalformedTree(
                "supervariant ordering is empty".to_string(),
            ));
        }

        let mut map = HashMap::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            if map.insert(label.clone(), index).is_some() {
                return Err(TreeError::MalformedTree(format!(
                    "supervariant '{label}' occurs twice in ordering"
                )));
            }
        }

        Ok(SvidOrdering { labels, map })
    }

    /// Retrieves the index for a given svid.
    ///
    /// # Returns
    /// `Some(index)` if the svid exists, `None` otherwise
    pub fn index_of(&self, svid: &str) -> Option<NodeIndex> {
        self.map.get(svid).copied()
    }

    /// Retrieves the svid for a given index.
    ///
    /// # Returns
    /// `Some(&str)` if the index is valid, `None` otherwise
    pub fn label(&self, index: NodeIndex) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Checks if a svid is part of this ordering.
    pub fn contains(&self, svid: &str) -> bool {
        self.map.contains_key(svid)
    }

    /// Returns the reserved root entry.
    pub fn root(&self) -> &str {
        &self.labels[ROOT_INDEX]
    }

    /// Returns all svids except the reserved root entry, in index order.
    ///
    /// The svid at position `i` of this slice has node index `i + 1`.
    pub fn non_root(&self) -> &[String] {
        &self.labels[ROOT_INDEX + 1..]
    }

    /// Returns all svids, root first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of svids including the root.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; an ordering holds at least the root.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for SvidOrdering {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SvidOrdering ({} svids):", self.labels.len())?;
        for (idx, label) in self.labels.iter().enumerate() {
            writeln!(f, "  [{}] {}", idx, label)?;
        }
        Ok(())
    }
}

impl std::ops::Index<NodeIndex> for SvidOrdering {
    type Output = str;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.labels[index]
    }
}
