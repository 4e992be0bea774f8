//! Calder-neutree converts between the file formats of the CALDER tree
//! reconstruction tool and Neutree records.
//!
//! Two directions are supported:
//! - Inputs: an SSM read-count file and its parameter file are aggregated
//!   into supervariants and written as a CALDER input table.
//!   See [convert_inputs].
//! - Outputs: a CALDER solution file (matrix blocks, among them the
//!   frequency matrix `Fhat`) and a DOT tree file are parsed, the tree is
//!   reconciled into a parent vector over the `Fhat` supervariant ordering,
//!   and the result is saved as a [Neutree](crate::neutree::Neutree) record.
//!   See [convert_outputs].
//!
//! Core functionality per module:
//! - [solution]: Parse CALDER solution files into labeled matrices.
//! - [dot]: Parse the DOT subset CALDER emits into vertex labels and edges.
//! - [model]: Supervariant ordering, label table, parent vectors and the
//!   [TreeReconciler](crate::model::TreeReconciler) linking them.
//! - [neutree]: The canonical record, saved as JSON.
//! - [ssm] and [calder]: The input direction.
//!
//! # Usage patterns
//! 1. The pipeline functions [convert_inputs] and [convert_outputs] do a
//!    full conversion between files with default settings.
//! 2. Each format module has a quick API (`parse_file`, `parse_str`) as well
//!    as a configurable parser for finer control.
//!
//! ## Example Pipeline
//! ```no_run
//! use calder_neutree::convert_outputs;
//! use calder_neutree::dot::DotParser;
//!
//! let record = convert_outputs(
//!     "sim.params.json",
//!     "calder.sol.csv",
//!     "calder.dot",
//!     "calder.neutree.json",
//!     &DotParser::new(),
//! )?;
//! println!("Tree: {}", record.structs()[0]);
//! # Ok::<(), calder_neutree::Error>(())
//! ```
//!
//! ## Example Reconciliation
//! ```
//! use calder_neutree::{dot, solution};
//! use calder_neutree::model::TreeReconciler;
//!
//! let bundle = solution::parse_str("Fhat\ns1,s2\nS0,1.0,1.0\nS1,0.6,0.4\nS2,0.2,0.1\n")?;
//! let graph = dot::parse_str(
//!     "digraph data_tree1 {\nv0 [label=\"S0\"];\nv1 [label=\"S1\"];\nv2 [label=\"S2\"];\nv0 -> v1;\nv1 -> v2;\n}\n",
//! )?;
//!
//! let ordering = bundle.svid_ordering()?;
//! let tree = TreeReconciler::new(&ordering).reconcile(graph.labels(), graph.edges())?;
//! assert_eq!(tree.parents(), &[0, 1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calder;
pub mod dot;
mod error;
pub mod model;
pub mod neutree;
mod output;
pub mod parser;
pub mod solution;
pub mod ssm;

pub use error::{Error, Result};

use crate::dot::DotParser;
use crate::model::TreeReconciler;
use crate::neutree::Neutree;
use crate::solution::SolutionParser;
use crate::ssm::Params;
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// CONVERSION PIPELINES (pub)
// ============================================================================
/// Converts an SSM file and its parameter file into a CALDER input file.
///
/// Clustered variants are combined into supervariants `S0`, `S1`, ...
/// (one per cluster), whose read counts are written per sample.
///
/// # Arguments
/// * `ssm_path` - Tab-separated SSM file
/// * `params_path` - JSON parameter file with `samples` and `clusters`
/// * `calder_input_path` - Destination of the CALDER input table
///
/// # Errors
/// Returns an error if either input cannot be read or parsed, a cluster
/// references an unknown variant, or the output cannot be written.
pub fn convert_inputs<P, Q, R>(ssm_path: P, params_path: Q, calder_input_path: R) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let (ssm_path, params_path) = (ssm_path.as_ref(), params_path.as_ref());

    let variants = ssm::load_ssm(ssm_path).map_err(|err| Error::in_file(ssm_path, err))?;
    let params = ssm::load_params(params_path).map_err(|err| Error::in_file(params_path, err))?;
    debug!(variants = variants.len(), clusters = params.clusters().len(), "inputs loaded");

    let supervars =
        ssm::clusters_to_supervars(params.clusters(), &variants).map_err(|err| Error::in_file(params_path, err))?;
    calder::write_calder_input(calder_input_path, params.samples(), &supervars)
}

/// Converts CALDER output files into a [Neutree] record and saves it.
///
/// # Arguments
/// * `params_path` - JSON parameter file providing clustering and garbage list
/// * `solution_path` - CALDER solution file containing an `Fhat` block
/// * `dot_path` - CALDER DOT tree file
/// * `neutree_path` - Destination of the record
/// * `dot_parser` - Parser used for the DOT file, e.g. with a strict line policy
///
/// # Returns
/// The record that was written.
///
/// # Errors
/// See [calder_to_neutree]. Additionally fails if the parameter file cannot
/// be read or the record cannot be written; in that case nothing is left
/// at `neutree_path`.
pub fn convert_outputs<P, S, D, N>(
    params_path: P,
    solution_path: S,
    dot_path: D,
    neutree_path: N,
    dot_parser: &DotParser,
) -> Result<Neutree>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    D: AsRef<Path>,
    N: AsRef<Path>,
{
    let params_path = params_path.as_ref();
    let params = ssm::load_params(params_path).map_err(|err| Error::in_file(params_path, err))?;

    let record = calder_to_neutree(&params, solution_path, dot_path, dot_parser)?;
    record.save(neutree_path)?;
    Ok(record)
}

/// Builds a [Neutree] record from a CALDER solution file and DOT file.
///
/// The solution file is parsed first, so a missing `Fhat` block is reported
/// before the DOT file is even opened.
///
/// # Errors
/// * Parsing errors (wrapped with the path of the offending file):
///   `MalformedBlock`, `MissingMatrix`, `UnrecognizedDotSyntax`, I/O
/// * Tree errors from reconciling the DOT tree with the `Fhat` ordering
pub fn calder_to_neutree<S, D>(params: &Params, solution_path: S, dot_path: D, dot_parser: &DotParser) -> Result<Neutree>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let (solution_path, dot_path) = (solution_path.as_ref(), dot_path.as_ref());

    let bundle = SolutionParser::new()
        .parse_file(solution_path)
        .map_err(|err| Error::in_file(solution_path, err))?;
    let ordering = bundle.svid_ordering()?;
    debug!(blocks = bundle.len(), svids = ordering.len(), "solution parsed");

    let graph = dot_parser
        .parse_file(dot_path)
        .map_err(|err| Error::in_file(dot_path, err))?;
    let tree = TreeReconciler::new(&ordering).reconcile(graph.labels(), graph.edges())?;
    info!(tree = %tree, "tree reconciled");

    Ok(neutree::assemble(
        tree,
        bundle.into_frequency_matrix(),
        params.clusters().clone(),
        params.garbage().to_vec(),
    ))
}
