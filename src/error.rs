//! Crate-level error type returned by the conversion pipelines.

use crate::model::TreeError;
use crate::parser::{ParsingError, ParsingErrorType};
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Parsing failed; `path` names the offending input file.
    #[error("failed to read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: ParsingError,
    },

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Inconsistent record - {0}")]
    InconsistentRecord(String),
}

impl Error {
    /// Attaches the path of the input file to a parsing error.
    pub fn in_file<P: AsRef<Path>>(path: P, source: ParsingError) -> Self {
        Error::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the kind of the underlying parsing error, if this is one.
    pub fn parsing_kind(&self) -> Option<&ParsingErrorType> {
        match self {
            Error::File { source, .. } | Error::Parsing(source) => Some(source.kind()),
            _ => None,
        }
    }

    /// Returns the underlying tree error, if this is one.
    pub fn tree_error(&self) -> Option<&TreeError> {
        match self {
            Error::Tree(err) => Some(err),
            _ => None,
        }
    }
}

// =#========================================================================#=
// TESTS - ERROR
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_file_error_names_path_once() {
        let err = Error::in_file("calder.sol.csv", ParsingError::missing_matrix("Fhat"));

        assert_eq!(err.to_string(), "failed to read calder.sol.csv");
        let source = err.source().unwrap().to_string();
        assert!(source.contains("Fhat"));
        assert!(!source.contains("calder.sol.csv"));
    }

    #[test]
    fn test_tree_error_is_not_repeated() {
        let err = Error::from(TreeError::MultipleRoots(vec!["S0".to_string(), "S2".to_string()]));

        assert_eq!(err.to_string(), "Multiple roots: S0, S2");
        assert!(err.source().is_none());
    }
}
