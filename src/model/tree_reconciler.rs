//! Reconciliation of DOT edges with the supervariant ordering of a solution.
//!
//! The DOT file and the solution file live in different label spaces:
//! edges name vertex tokens (`v3`), the frequency matrix names svids (`S3`).
//! [TreeReconciler] composes two lookups to translate the edge list into a
//! [ParentVector] over the ordering's index space:
//!
//! ```text
//! vertex token ──[VertexLabelTable]──→ svid ──[SvidOrdering]──→ node index
//! ```

use crate::model::edge::Edge;
use crate::model::parent_vector::ParentVector;
use crate::model::svid_ordering::{NodeIndex, SvidOrdering};
use crate::model::tree_error::TreeError;
use crate::model::vertex_label_table::VertexLabelTable;
use std::collections::HashMap;
use tracing::debug;

// =#========================================================================#=
// TREE RECONCILER
// =#========================================================================#=
/// Builds a validated [ParentVector] from DOT edges.
///
/// The ordering is an explicit input; it is never derived from the edges.
///
/// # Example
/// ```
/// use calder_neutree::model::{Edge, SvidOrdering, TreeReconciler, VertexLabelTable};
///
/// let ordering = SvidOrdering::new(vec!["S0".into(), "S1".into(), "S2".into()]).unwrap();
/// let mut labels = VertexLabelTable::new();
/// labels.insert("v0", "S0");
/// labels.insert("v1", "S1");
/// labels.insert("v2", "S2");
/// let edges = vec![Edge::new("v0", "v1"), Edge::new("v1", "v2")];
///
/// let tree = TreeReconciler::new(&ordering).reconcile(&labels, &edges).unwrap();
/// assert_eq!(tree.parents(), &[0, 1]);
/// ```
pub struct TreeReconciler<'a> {
    ordering: &'a SvidOrdering,
}

impl<'a> TreeReconciler<'a> {
    /// Creates a reconciler indexing into `ordering`.
    pub fn new(ordering: &'a SvidOrdering) -> Self {
        TreeReconciler { ordering }
    }

    /// Translates `edges` into a parent vector over the ordering.
    ///
    /// Steps:
    /// 1. Resolve both endpoints of every edge through `labels`
    /// 2. Map each child svid to its parent svid
    /// 3. Identify the single root, which must be the ordering's reserved entry
    /// 4. Look up the parent index of every non-root svid
    /// 5. Validate entry count and acyclicity
    ///
    /// # Errors
    /// - [TreeError::UnresolvedVertex] if an edge token has no label
    /// - [TreeError::DuplicateChild] if a svid has two parents
    /// - [TreeError::NoRoot] / [TreeError::MultipleRoots] unless exactly one svid has no parent
    /// - [TreeError::UnknownParentLabel] if a parent svid is not in the ordering
    /// - [TreeError::MalformedTree] for a misplaced root, children outside the ordering or cycles
    pub fn reconcile(&self, labels: &VertexLabelTable, edges: &[Edge]) -> Result<ParentVector, TreeError> {
        let resolved = Self::resolve_edges(labels, edges)?;
        let parent_of = Self::child_to_parent(&resolved)?;
        self.check_root(&parent_of)?;
        let parents = self.parent_indices(&parent_of)?;

        // Every child must have been consumed by exactly one non-root svid
        if parent_of.len() != parents.len() {
            let mut extraneous: Vec<&str> = parent_of
                .keys()
                .copied()
                .filter(|child| !self.ordering.contains(child))
                .collect();
            extraneous.sort_unstable();
            return Err(TreeError::MalformedTree(format!(
                "expected {} edges but found {}, children outside the ordering: {}",
                parents.len(),
                parent_of.len(),
                extraneous.join(", ")
            )));
        }

        let tree = ParentVector::new(parents);
        tree.validate()?;
        debug!(num_nodes = tree.num_nodes(), "reconciled tree");

        Ok(tree)
    }

    /// Translates every edge from token space into svid space.
    fn resolve_edges<'l>(labels: &'l VertexLabelTable, edges: &[Edge]) -> Result<Vec<(&'l str, &'l str)>, TreeError> {
        let mut resolved = Vec::with_capacity(edges.len());
        for edge in edges {
            resolved.push((labels.resolve(edge.parent())?, labels.resolve(edge.child())?));
        }
        Ok(resolved)
    }

    /// Builds the child svid -> parent svid map, rejecting multi-parent svids.
    fn child_to_parent<'l>(resolved: &[(&'l str, &'l str)]) -> Result<HashMap<&'l str, &'l str>, TreeError> {
        let mut parent_of = HashMap::with_capacity(resolved.len());
        for &(parent, child) in resolved {
            if parent_of.insert(child, parent).is_some() {
                return Err(TreeError::DuplicateChild(child.to_string()));
            }
        }
        Ok(parent_of)
    }

    /// Asserts exactly one svid of the ordering is nobody's child, and that
    /// it is the reserved root entry.
    fn check_root(&self, parent_of: &HashMap<&str, &str>) -> Result<(), TreeError> {
        let roots: Vec<&String> = self
            .ordering
            .labels()
            .iter()
            .filter(|svid| !parent_of.contains_key(svid.as_str()))
            .collect();

        match roots.as_slice() {
            [] => Err(TreeError::NoRoot),
            [root] if root.as_str() == self.ordering.root() => Ok(()),
            [root] => Err(TreeError::MalformedTree(format!(
                "root is '{}' but the reserved first entry is '{}'",
                root,
                self.ordering.root()
            ))),
            _ => Err(TreeError::MultipleRoots(roots.iter().map(|root| root.to_string()).collect())),
        }
    }

    /// Looks up the parent index of every non-root svid, in ordering order.
    fn parent_indices(&self, parent_of: &HashMap<&str, &str>) -> Result<Vec<NodeIndex>, TreeError> {
        let mut parents = Vec::with_capacity(self.ordering.len() - 1);
        for child in self.ordering.non_root() {
            // Root check guarantees every non-root svid has a parent
            let parent = *parent_of.get(child.as_str()).ok_or(TreeError::NoRoot)?;
            let index = self.ordering.index_of(parent).ok_or_else(|| TreeError::UnknownParentLabel {
                parent: parent.to_string(),
                child: child.clone(),
            })?;
            parents.push(index);
        }
        Ok(parents)
    }
}
