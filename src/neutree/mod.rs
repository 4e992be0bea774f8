//! Neutree records: the common output format used for evaluation.
//!
//! This module provides the [Neutree] record and [assemble], which bundles a
//! reconciled tree with the frequency matrix and clustering metadata.
//!
//! Records are written as JSON objects with the keys `structs`, `phis`,
//! `counts`, `logscores`, `clusterings` and `garbage`.

mod record;

pub use record::{Clustering, Neutree, Phi};

use crate::model::ParentVector;
use crate::solution::LabeledMatrix;

/// Bundles the outcome of one CALDER run into a single-tree record.
///
/// The frequency matrix is taken as is, i.e. indexed `[sample][supervariant]`.
/// No validation happens here; `tree` must already be reconciled.
pub fn assemble(
    tree: ParentVector,
    frequency_matrix: LabeledMatrix,
    clustering: Clustering,
    garbage: Vec<String>,
) -> Neutree {
    Neutree::single(tree, frequency_matrix.into_values(), clustering, garbage)
}
