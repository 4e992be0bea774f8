//! Simple somatic mutation (SSM) files.
//!
//! An SSM file is tab-separated with a header line
//! `id  name  var_reads  total_reads  var_read_prob`; the last three columns
//! hold one comma-separated value per sample.

use crate::parser::ParsingError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Raw row of an SSM file, before splitting the per-sample columns.
#[derive(Debug, Deserialize)]
struct SsmRecord {
    id: String,
    name: String,
    var_reads: String,
    total_reads: String,
    var_read_prob: String,
}

// =#========================================================================#=
// VARIANT
// =#========================================================================#=
/// One mutation with its per-sample read counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub id: String,
    pub name: String,
    /// Reads supporting the variant allele, per sample
    pub var_reads: Vec<u64>,
    /// All reads covering the locus, per sample
    pub total_reads: Vec<u64>,
    /// Probability of observing the variant allele in a cell carrying
    /// the mutation (omega), per sample
    pub var_read_prob: Vec<f64>,
}

impl Variant {
    /// Reads not supporting the variant allele, per sample.
    pub fn ref_reads(&self) -> Vec<u64> {
        self.total_reads
            .iter()
            .zip(&self.var_reads)
            .map(|(total, var)| total.saturating_sub(*var))
            .collect()
    }

    pub fn num_samples(&self) -> usize {
        self.var_reads.len()
    }
}

/// Loads all variants of an SSM file, in file order.
///
/// # Errors
/// Returns an `InvalidSsm` error if a row is malformed, a value is not a
/// number, a `var_read_prob` lies outside `[0, 1]`, or the per-sample
/// arrays differ in length within a row or across rows.
pub fn load_ssm<P: AsRef<Path>>(path: P) -> Result<Vec<Variant>, ParsingError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|err| csv_error(err, 0))?;
    read_variants(reader)
}

/// Parses SSM content held in memory.
pub fn parse_ssm_str(ssm: &str) -> Result<Vec<Variant>, ParsingError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(ssm.as_bytes());
    read_variants(reader)
}

fn read_variants<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Variant>, ParsingError> {
    let mut variants: Vec<Variant> = Vec::new();

    for (row, result) in reader.deserialize::<SsmRecord>().enumerate() {
        // Header is line 1
        let line = row + 2;
        let record = result.map_err(|err| csv_error(err, line))?;
        let variant = Variant {
            var_reads: parse_values(&record.var_reads, "var_reads", line)?,
            total_reads: parse_values(&record.total_reads, "total_reads", line)?,
            var_read_prob: parse_values(&record.var_read_prob, "var_read_prob", line)?,
            id: record.id,
            name: record.name,
        };

        let num_samples = variants.first().map_or(variant.num_samples(), |v| v.num_samples());
        if variant.total_reads.len() != variant.num_samples()
            || variant.var_read_prob.len() != variant.num_samples()
            || variant.num_samples() != num_samples
        {
            return Err(ParsingError::invalid_ssm(
                line,
                format!("variant '{}' does not have {num_samples} values per column", variant.id),
            ));
        }
        if variant.var_reads.iter().zip(&variant.total_reads).any(|(v, t)| v > t) {
            return Err(ParsingError::invalid_ssm(
                line,
                format!("variant '{}' has more variant than total reads", variant.id),
            ));
        }
        if let Some(prob) = variant.var_read_prob.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(ParsingError::invalid_ssm(
                line,
                format!("variant '{}' has var_read_prob {prob} outside [0, 1]", variant.id),
            ));
        }

        variants.push(variant);
    }

    debug!(num_variants = variants.len(), "read SSM file");
    Ok(variants)
}

/// Parses one comma-separated per-sample column.
fn parse_values<T: std::str::FromStr>(field: &str, column: &str, line: usize) -> Result<Vec<T>, ParsingError> {
    field
        .split(',')
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| {
                ParsingError::invalid_ssm(line, format!("'{value}' in column {column} is not a number"))
            })
        })
        .collect()
}

fn csv_error(err: csv::Error, line: usize) -> ParsingError {
    match err.kind() {
        csv::ErrorKind::Io(io_err) => ParsingError::from(std::io::Error::new(io_err.kind(), io_err.to_string())),
        _ => ParsingError::invalid_ssm(line, err.to_string()),
    }
}

// =#========================================================================#=
// TESTS - SSM
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsingErrorType;

    const SSM: &str = "id\tname\tvar_reads\ttotal_reads\tvar_read_prob\n\
                       s0\tTP53\t10,20\t100,100\t0.5,0.5\n\
                       s1\tKRAS\t0,5\t50,60\t0.5,1.0\n";

    #[test]
    fn test_parse_variants() {
        let variants = parse_ssm_str(SSM).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[1].name, "KRAS");
        assert_eq!(variants[1].var_reads, vec![0, 5]);
        assert_eq!(variants[1].ref_reads(), vec![50, 55]);
        assert_eq!(variants[1].var_read_prob, vec![0.5, 1.0]);
    }

    #[test]
    fn test_sample_count_mismatch() {
        let ssm = "id\tname\tvar_reads\ttotal_reads\tvar_read_prob\n\
                   s0\tA\t1,2\t3,4\t0.5,0.5\n\
                   s1\tB\t1\t3\t0.5\n";
        let err = parse_ssm_str(ssm).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidSsm(_)));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_var_read_prob_out_of_range() {
        for prob in ["-0.5", "1.5", "NaN"] {
            let ssm = format!("id\tname\tvar_reads\ttotal_reads\tvar_read_prob\ns0\tA\t1,2\t3,4\t0.5,{prob}\n");
            let err = parse_ssm_str(&ssm).unwrap_err();
            assert!(matches!(err.kind(), ParsingErrorType::InvalidSsm(_)));
            assert_eq!(err.line(), 2);
        }
    }

    #[test]
    fn test_var_read_prob_bounds_are_valid() {
        let ssm = "id\tname\tvar_reads\ttotal_reads\tvar_read_prob\ns0\tA\t0,2\t3,4\t0,1\n";
        let variants = parse_ssm_str(ssm).unwrap();
        assert_eq!(variants[0].var_read_prob, vec![0.0, 1.0]);
    }

    #[test]
    fn test_not_a_number() {
        let ssm = "id\tname\tvar_reads\ttotal_reads\tvar_read_prob\ns0\tA\tx\t3\t0.5\n";
        let err = parse_ssm_str(ssm).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidSsm(_)));
    }
}
