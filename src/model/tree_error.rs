//! Errors raised while reconciling a DOT edge list into a [ParentVector].
//!
//! [ParentVector]: crate::model::ParentVector

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Reasons why an edge list does not describe a single rooted tree over the
/// supervariants of a solution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// An edge endpoint has no `label` declaration in the DOT file.
    #[error("Could not resolve vertex '{0}' - no label declared for it")]
    UnresolvedVertex(String),

    /// A supervariant has more than one incoming edge.
    #[error("Supervariant '{0}' appears as a child more than once")]
    DuplicateChild(String),

    /// A parent label is not part of the supervariant ordering.
    #[error("Parent '{parent}' of supervariant '{child}' is not a known supervariant")]
    UnknownParentLabel { parent: String, child: String },

    /// Structural problem not covered by a more specific variant,
    /// e.g. a cycle or a wrong number of entries.
    #[error("Malformed tree - {0}")]
    MalformedTree(String),

    /// More than one supervariant has no parent.
    #[error("Multiple roots: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),

    /// Every supervariant has a parent.
    #[error("No root - every supervariant has a parent")]
    NoRoot,
}
