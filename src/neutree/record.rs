//! The Neutree canonical record.

use crate::error::{Error, Result};
use crate::model::ParentVector;
use crate::output::write_atomically;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Clusters of variant ids; cluster `k` forms supervariant `S{k}`.
pub type Clustering = Vec<Vec<String>>;

/// Frequencies indexed `[sample][supervariant]`.
pub type Phi = Vec<Vec<f64>>;

// =#========================================================================#=
// NEUTREE
// =#========================================================================#=
/// Common evaluation format for reconstructed trees.
///
/// Holds an ensemble of trees: entry `i` of `structs`, `phis`, `counts`,
/// `logscores` and `clusterings` together describe tree `i`. The garbage
/// list (variants excluded from clustering) is shared by all trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neutree {
    structs: Vec<ParentVector>,
    phis: Vec<Phi>,
    counts: Vec<u64>,
    logscores: Vec<f64>,
    clusterings: Vec<Clustering>,
    garbage: Vec<String>,
}

impl Neutree {
    /// Creates a record, checking that all per-tree sequences have equal length.
    ///
    /// # Errors
    /// Returns [Error::InconsistentRecord] on a length mismatch.
    pub fn new(
        structs: Vec<ParentVector>,
        phis: Vec<Phi>,
        counts: Vec<u64>,
        logscores: Vec<f64>,
        clusterings: Vec<Clustering>,
        garbage: Vec<String>,
    ) -> Result<Self> {
        let record = Neutree {
            structs,
            phis,
            counts,
            logscores,
            clusterings,
            garbage,
        };
        record.validate()?;
        Ok(record)
    }

    /// Creates a record holding exactly one tree, with count 1 and
    /// log-score 0, as produced by a single deterministic solver run.
    pub fn single(tree: ParentVector, phi: Phi, clustering: Clustering, garbage: Vec<String>) -> Self {
        Neutree {
            structs: vec![tree],
            phis: vec![phi],
            counts: vec![1],
            logscores: vec![0.0],
            clusterings: vec![clustering],
            garbage,
        }
    }

    /// Checks that all per-tree sequences have the same length.
    pub fn validate(&self) -> Result<()> {
        let num_trees = self.structs.len();
        let lengths = [
            ("phis", self.phis.len()),
            ("counts", self.counts.len()),
            ("logscores", self.logscores.len()),
            ("clusterings", self.clusterings.len()),
        ];

        for (field, len) in lengths {
            if len != num_trees {
                return Err(Error::InconsistentRecord(format!(
                    "{num_trees} structs but {len} {field}"
                )));
            }
        }

        Ok(())
    }

    /// Writes the record as JSON to `path`, replacing it atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        write_atomically(path, |writer| Ok(serde_json::to_writer(writer, self)?))?;
        info!(path = %path.display(), num_trees = self.num_trees(), "wrote neutree");
        Ok(())
    }

    /// Reads a record written by [save](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let record: Neutree = serde_json::from_reader(reader)?;
        record.validate()?;
        Ok(record)
    }

    pub fn num_trees(&self) -> usize {
        self.structs.len()
    }

    pub fn structs(&self) -> &[ParentVector] {
        &self.structs
    }

    pub fn phis(&self) -> &[Phi] {
        &self.phis
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn logscores(&self) -> &[f64] {
        &self.logscores
    }

    pub fn clusterings(&self) -> &[Clustering] {
        &self.clusterings
    }

    pub fn garbage(&self) -> &[String] {
        &self.garbage
    }
}
