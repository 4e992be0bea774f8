//! Named matrix with row and column labels, as emitted in CALDER solution files.

use crate::parser::{ParsingError, ParsingErrorType};

// =#========================================================================#=
// LABELED MATRIX
// =#========================================================================#=
/// A named 2D matrix of floats with labeled rows and columns.
///
/// Values are stored *transposed* relative to the text layout: the first
/// axis indexes the columns of the file (samples), the second axis its rows
/// (supervariants). So `values()[s][k]` is the entry in row `k`, column `s`
/// of the block.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix {
    name: String,
    column_labels: Vec<String>,
    row_labels: Vec<String>,
    /// `values[column][row]`
    values: Vec<Vec<f64>>,
}

impl LabeledMatrix {
    /// Creates a matrix from column-major values.
    ///
    /// # Arguments
    /// * `name` - Name of the matrix (e.g. `Fhat`)
    /// * `column_labels` - One label per column (sample)
    /// * `row_labels` - One label per row (supervariant)
    /// * `values` - `values[column][row]`
    ///
    /// # Errors
    /// Returns a [ParsingErrorType::MalformedBlock] error if the label counts do
    /// not match the dimensions of `values`.
    pub fn new(
        name: String,
        column_labels: Vec<String>,
        row_labels: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, ParsingError> {
        if values.len() != column_labels.len() {
            return Err(Self::shape_error(&name, format!(
                "{} column labels for {} columns",
                column_labels.len(),
                values.len()
            )));
        }
        if let Some(column) = values.iter().find(|column| column.len() != row_labels.len()) {
            return Err(Self::shape_error(&name, format!(
                "{} row labels for {} rows",
                row_labels.len(),
                column.len()
            )));
        }

        Ok(LabeledMatrix {
            name,
            column_labels,
            row_labels,
            values,
        })
    }

    fn shape_error(name: &str, msg: String) -> ParsingError {
        ParsingError::without_context(ParsingErrorType::MalformedBlock(format!(
            "matrix '{name}' has {msg}"
        )))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Labels of the file's columns (samples).
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Labels of the file's rows (supervariants).
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Returns `(number of columns, number of rows)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.column_labels.len(), self.row_labels.len())
    }

    /// All values, indexed `[column][row]`.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Value at the given column and row, `None` if out of bounds.
    pub fn value(&self, column: usize, row: usize) -> Option<f64> {
        self.values.get(column)?.get(row).copied()
    }

    /// All values of one column (one sample across all supervariants).
    pub fn column(&self, column: usize) -> Option<&[f64]> {
        self.values.get(column).map(|c| c.as_slice())
    }

    /// Consumes the matrix and returns its values, indexed `[column][row]`.
    pub fn into_values(self) -> Vec<Vec<f64>> {
        self.values
    }
}
