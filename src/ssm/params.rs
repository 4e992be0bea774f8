//! Parameter files (`.params.json`) accompanying an SSM file.

use crate::neutree::Clustering;
use crate::parser::ParsingError;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sample names, clustering and garbage list of a dataset.
///
/// Only the keys used here are read; others (e.g. `structures`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Params {
    samples: Vec<String>,
    clusters: Clustering,
    #[serde(default)]
    garbage: Vec<String>,
}

impl Params {
    pub fn new(samples: Vec<String>, clusters: Clustering, garbage: Vec<String>) -> Self {
        Params {
            samples,
            clusters,
            garbage,
        }
    }

    /// Sample names, in the column order of the SSM read-count arrays.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Variant ids per cluster.
    pub fn clusters(&self) -> &Clustering {
        &self.clusters
    }

    /// Variant ids excluded from clustering.
    pub fn garbage(&self) -> &[String] {
        &self.garbage
    }
}

/// Loads a parameter file.
///
/// # Errors
/// Returns an `IoError` if the file cannot be opened, or an `InvalidParams`
/// error if it is not valid JSON or lacks `samples` or `clusters`.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<Params, ParsingError> {
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|err| ParsingError::invalid_params(err.to_string()))
}

/// Parses parameter JSON held in memory.
pub fn parse_params_str(params: &str) -> Result<Params, ParsingError> {
    serde_json::from_str(params).map_err(|err| ParsingError::invalid_params(err.to_string()))
}
