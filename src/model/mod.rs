//! Data model for reconstructed supervariant trees.
//!
//! # Tree representation
//! A reconstructed tree is a [ParentVector] ("struct"): entry `i` holds the
//! parent of node `i + 1`, node 0 being the root. Node indices are positions
//! in an [SvidOrdering], taken from the row labels of the frequency matrix.
//!
//! # Label handling
//! The DOT output of CALDER names vertices by tokens, so reconciling a tree
//! composes two lookups:
//! 1. [VertexLabelTable]: vertex token to svid (from `label` declarations)
//! 2. [SvidOrdering]: svid to node index
//!
//! [TreeReconciler] performs this translation for an edge list and rejects
//! anything that is not a single tree rooted at the reserved first entry,
//! reporting a [TreeError].

pub mod edge;
pub mod parent_vector;
pub mod svid_ordering;
pub mod tree_error;
pub mod tree_reconciler;
pub mod vertex_label_table;

pub use edge::Edge;
pub use parent_vector::ParentVector;
pub use svid_ordering::{NodeIndex, ROOT_INDEX, SvidOrdering};
pub use tree_error::TreeError;
pub use tree_reconciler::TreeReconciler;
pub use vertex_label_table::VertexLabelTable;
