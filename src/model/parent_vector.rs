//! Parent-pointer representation of a rooted tree ("struct").
//!
//! - `ParentVector`: Entry `i` holds the parent of node `i + 1`;
//!   node 0 is the root and has no entry.

use crate::model::svid_ordering::{NodeIndex, ROOT_INDEX};
use crate::model::tree_error::TreeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// *During validation only*, marks nodes by how far their ancestry is known.
#[derive(Clone, Copy, PartialEq)]
enum Visit {
    Unvisited,
    OnPath,
    ReachesRoot,
}

// =#========================================================================#=
// PARENT VECTOR
// =#========================================================================#=
/// A rooted tree over nodes `0..n` given as a vector of parent indices.
///
/// For a tree with `n` nodes the vector has `n - 1` entries, where entry `i`
/// is the parent of node `i + 1`. Node 0 ([ROOT_INDEX]) is the root.
///
/// # Example
/// ```
/// use calder_neutree::model::ParentVector;
///
/// // 0 -> 1 -> 2 and 0 -> 3
/// let tree = ParentVector::from_parents(vec![0, 1, 0]).unwrap();
/// assert_eq!(tree.num_nodes(), 4);
/// assert_eq!(tree.parent_of(2), Some(1));
/// assert_eq!(tree.children_of(0), vec![1, 3]);
///
/// // 1 -> 2 -> 1 is a cycle
/// assert!(ParentVector::from_parents(vec![0, 3, 2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParentVector {
    parents: Vec<NodeIndex>,
}

impl ParentVector {
    /// Wraps a parent vector without validating it.
    ///
    /// Test validity with [ParentVector::validate].
    pub fn new(parents: Vec<NodeIndex>) -> Self {
        ParentVector { parents }
    }

    /// Wraps a parent vector after validating it.
    ///
    /// # Errors
    /// Returns [TreeError::MalformedTree] if [validate](Self::validate) fails.
    pub fn from_parents(parents: Vec<NodeIndex>) -> Result<Self, TreeError> {
        let tree = Self::new(parents);
        tree.validate()?;
        Ok(tree)
    }

    /// Validates that this vector describes a single tree rooted at node 0.
    ///
    /// Checks:
    /// - All parent indices are valid node indices
    /// - No node is its own parent
    /// - Following parents from any node reaches the root (no cycles)
    ///
    /// # Errors
    /// Returns [TreeError::MalformedTree] naming the first offending node.
    pub fn validate(&self) -> Result<(), TreeError> {
        let num_nodes = self.num_nodes();

        for (entry, &parent) in self.parents.iter().enumerate() {
            let node = entry + 1;
            if parent >= num_nodes {
                return Err(TreeError::MalformedTree(format!(
                    "parent {parent} of node {node} is out of bounds for {num_nodes} nodes"
                )));
            }
            if parent == node {
                return Err(TreeError::MalformedTree(format!("node {node} is its own parent")));
            }
        }

        // Walk up from every node; each node is put on a path at most once
        let mut visits = vec![Visit::Unvisited; num_nodes];
        visits[ROOT_INDEX] = Visit::ReachesRoot;
        let mut path = Vec::new();

        for start in 1..num_nodes {
            let mut node = start;
            while visits[node] == Visit::Unvisited {
                visits[node] = Visit::OnPath;
                path.push(node);
                node = self.parents[node - 1];
            }

            if visits[node] == Visit::OnPath {
                return Err(TreeError::MalformedTree(format!(
                    "cycle through node {node}, which is not connected to the root"
                )));
            }

            for visited in path.drain(..) {
                visits[visited] = Visit::ReachesRoot;
            }
        }

        Ok(())
    }

    /// Returns the number of nodes including the root.
    pub fn num_nodes(&self) -> usize {
        self.parents.len() + 1
    }

    /// Returns the raw parent entries.
    pub fn parents(&self) -> &[NodeIndex] {
        &self.parents
    }

    /// Returns the parent of `node`, or `None` for the root
    /// and for indices outside the tree.
    pub fn parent_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        if node == ROOT_INDEX {
            return None;
        }
        self.parents.get(node - 1).copied()
    }

    /// Returns the children of `node` in increasing index order.
    pub fn children_of(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.edges()
            .filter(|&(parent, _)| parent == node)
            .map(|(_, child)| child)
            .collect()
    }

    /// Iterates over all `(parent, child)` pairs, ordered by child index.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .map(|(entry, &parent)| (parent, entry + 1))
    }

    /// Consumes the tree and returns the raw parent entries.
    pub fn into_vec(self) -> Vec<NodeIndex> {
        self.parents
    }
}

impl fmt::Display for ParentVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: Vec<String> = self.parents.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", entries.join(", "))
    }
}

// =#========================================================================#=
// TESTS - PARENT VECTOR
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node_tree_is_valid() {
        let tree = ParentVector::from_parents(vec![]).unwrap();
        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.parent_of(0), None);
    }

    #[test]
    fn test_out_of_bounds_parent() {
        let result = ParentVector::from_parents(vec![0, 5]);
        assert!(matches!(result, Err(TreeError::MalformedTree(_))));
    }

    #[test]
    fn test_self_loop() {
        let result = ParentVector::from_parents(vec![1]);
        assert!(matches!(result, Err(TreeError::MalformedTree(_))));
    }

    #[test]
    fn test_long_chain_is_valid() {
        let parents: Vec<usize> = (0..1000).collect();
        let tree = ParentVector::from_parents(parents).unwrap();
        assert_eq!(tree.parent_of(1000), Some(999));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let tree = ParentVector::new(vec![0, 1]);
        assert_eq!(serde_json::to_string(&tree).unwrap(), "[0,1]");
    }
}
