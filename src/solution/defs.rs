//! CALDER solution file constants.

/// Separator between fields of column-label and data lines
pub(crate) const FIELD_SEPARATOR: char = ',';

/// Name of the frequency matrix block
pub const FREQUENCY_MATRIX: &str = "Fhat";
