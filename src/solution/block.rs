//! Reader for a single labeled-matrix block of a CALDER solution file.
//!
//! A block looks like
//! ```text
//! Fhat
//! s1,s2
//! S0,1.0,1.0
//! S1,0.6,0.3
//! ```
//! i.e. a name line, a comma-separated column-label line and comma-separated
//! data rows whose first field is the row label. A blank line or EOF ends it.

use crate::parser::{LineParser, LineSource, ParsingError};
use crate::solution::defs::FIELD_SEPARATOR;
use crate::solution::matrix::LabeledMatrix;

/// Reads the next block from `parser`, skipping leading blank lines.
///
/// # Returns
/// * `Ok(Some(LabeledMatrix))` - The next block
/// * `Ok(None)` - If only blank lines remained before EOF
///
/// # Errors
/// Returns a `MalformedBlock` error if
/// - the name line looks like a data row,
/// - the column-label line is missing or empty,
/// - a row has a different number of values than there are column labels,
/// - a value is not a number, or
/// - the block has no data rows.
pub fn read_block<S: LineSource>(parser: &mut LineParser<S>) -> Result<Option<LabeledMatrix>, ParsingError> {
    let name = match parser.skip_blank_lines()? {
        Some(name) => name,
        None => return Ok(None),
    };
    if name.contains(FIELD_SEPARATOR) {
        return Err(ParsingError::malformed_block(
            parser,
            "expected a matrix name but found a data row".to_string(),
        ));
    }

    let column_labels = read_column_labels(parser, &name)?;

    let mut row_labels = Vec::new();
    let mut rows = Vec::new();
    while let Some(line) = parser.next_trimmed()? {
        if line.is_empty() {
            break;
        }
        let (row_label, row) = read_row(parser, &line, column_labels.len())?;
        row_labels.push(row_label);
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParsingError::malformed_block(
            parser,
            format!("matrix '{name}' has no data rows"),
        ));
    }

    let values = transpose(&rows, column_labels.len());
    LabeledMatrix::new(name, column_labels, row_labels, values).map(Some)
}

/// Reads the column-label line following the name line.
///
/// An empty leading cell (the corner above the row labels) is dropped; any
/// other empty label makes the block malformed.
fn read_column_labels<S: LineSource>(parser: &mut LineParser<S>, name: &str) -> Result<Vec<String>, ParsingError> {
    let header = match parser.next_trimmed()? {
        Some(header) => header,
        None => {
            return Err(ParsingError::malformed_block(
                parser,
                format!("matrix '{name}' ends before its column labels"),
            ));
        }
    };

    let mut column_labels: Vec<String> = header
        .split(FIELD_SEPARATOR)
        .map(|label| label.trim().to_string())
        .collect();
    if column_labels.first().is_some_and(|corner| corner.is_empty()) {
        column_labels.remove(0);
    }

    if column_labels.is_empty() {
        return Err(ParsingError::malformed_block(
            parser,
            format!("matrix '{name}' has no column labels"),
        ));
    }
    if let Some(position) = column_labels.iter().position(|label| label.is_empty()) {
        return Err(ParsingError::malformed_block(
            parser,
            format!("matrix '{name}' has an empty column label at position {}", position + 1),
        ));
    }

    Ok(column_labels)
}

/// Splits a data row into its label and values.
fn read_row<S: LineSource>(
    parser: &LineParser<S>,
    line: &str,
    num_columns: usize,
) -> Result<(String, Vec<f64>), ParsingError> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    // `split` always yields at least one field
    let row_label = fields.next().unwrap_or_default().to_string();

    let values = fields
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                ParsingError::malformed_block(
                    parser,
                    format!("value '{field}' in row '{row_label}' is not a number"),
                )
            })
        })
        .collect::<Result<Vec<f64>, ParsingError>>()?;

    if values.len() != num_columns {
        return Err(ParsingError::malformed_block(
            parser,
            format!(
                "row '{row_label}' has {} values but there are {num_columns} column labels",
                values.len()
            ),
        ));
    }

    Ok((row_label, values))
}

/// Turns `rows[row][column]` into `values[column][row]`.
fn transpose(rows: &[Vec<f64>], num_columns: usize) -> Vec<Vec<f64>> {
    (0..num_columns)
        .map(|column| rows.iter().map(|row| row[column]).collect())
        .collect()
}

// =#========================================================================#=
// TESTS - BLOCK READER
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsingErrorType;

    #[test]
    fn test_read_single_block() {
        let mut parser = LineParser::for_str("\n\nFhat\ns1,s2\nS0,1,1\nS1,0.5,0.25\n");
        let block = read_block(&mut parser).unwrap().unwrap();

        assert_eq!(block.name(), "Fhat");
        assert_eq!(block.column_labels(), &["s1", "s2"]);
        assert_eq!(block.row_labels(), &["S0", "S1"]);
        assert_eq!(block.values(), &[vec![1.0, 0.5], vec![1.0, 0.25]]);
        assert!(read_block(&mut parser).unwrap().is_none());
    }

    #[test]
    fn test_corner_cell_is_dropped() {
        let mut parser = LineParser::for_str("U\n,s1,s2\nS0,1,0\n");
        let block = read_block(&mut parser).unwrap().unwrap();
        assert_eq!(block.column_labels(), &["s1", "s2"]);
    }

    #[test]
    fn test_empty_column_label() {
        // Only the corner cell may be empty
        for header in [",", "s1,,s2", ",s1,"] {
            let mut parser = LineParser::for_str(&format!("Fhat\n{header}\nS0,1\n"));
            let err = read_block(&mut parser).unwrap_err();
            assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
            assert_eq!(err.line(), 2);
        }
    }

    #[test]
    fn test_missing_header() {
        let mut parser = LineParser::for_str("Fhat\n");
        let err = read_block(&mut parser).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
    }

    #[test]
    fn test_not_a_number() {
        let mut parser = LineParser::for_str("Fhat\ns1\nS0,abc\n");
        let err = read_block(&mut parser).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_empty_block() {
        let mut parser = LineParser::for_str("Fhat\ns1,s2\n\nU\n");
        let err = read_block(&mut parser).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
    }
}
