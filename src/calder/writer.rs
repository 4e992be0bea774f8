//! Writer for the tab-separated CALDER input format.

use crate::error::Result;
use crate::output::write_atomically;
use crate::parser::ParsingError;
use crate::ssm::Supervariant;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes supervariant read counts to `path` in CALDER input format.
///
/// The file is written atomically: on error, `path` is left untouched.
///
/// # Arguments
/// * `path` - Destination of the CALDER input file
/// * `samples` - Sample names, one per entry of the read-count arrays
/// * `supervars` - Supervariants in any order; they are written sorted by id
///
/// # Errors
/// Returns an `InvalidParams` error if a supervariant does not have one read
/// count per sample, or an I/O error if writing fails.
pub fn write_calder_input<P: AsRef<Path>>(path: P, samples: &[String], supervars: &[Supervariant]) -> Result<()> {
    let path = path.as_ref();
    write_atomically(path, |w| write_calder_input_to(w, samples, supervars))?;
    info!(
        path = %path.display(),
        samples = samples.len(),
        supervariants = supervars.len(),
        "CALDER input written"
    );
    Ok(())
}

/// Writes CALDER input to any writer, e.g. a `Vec<u8>`.
///
/// See [write_calder_input] for the layout and errors.
pub fn write_calder_input_to<W: Write>(writer: W, samples: &[String], supervars: &[Supervariant]) -> Result<()> {
    for supervar in supervars {
        if supervar.var_reads.len() != samples.len() || supervar.ref_reads.len() != samples.len() {
            return Err(ParsingError::invalid_params(format!(
                "{} samples named but supervariant {} has {} read counts",
                samples.len(),
                supervar.id,
                supervar.var_reads.len()
            ))
            .into());
        }
    }

    let mut ordered: Vec<&Supervariant> = supervars.iter().collect();
    ordered.sort_by(|a, b| svid_key(&a.id).cmp(&svid_key(&b.id)));

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    // Rows carry the sample name in front, the header does not
    let mut header = Vec::with_capacity(2 * ordered.len());
    for supervar in &ordered {
        header.push(supervar.id.clone());
        header.push(supervar.id.clone());
    }
    csv_writer.write_record(&header)?;

    for (s, sample) in samples.iter().enumerate() {
        let mut row = Vec::with_capacity(2 * ordered.len() + 1);
        row.push(sample.clone());
        for supervar in &ordered {
            row.push(supervar.ref_reads[s].to_string());
            row.push(supervar.var_reads[s].to_string());
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Sort key for svids: numeric suffix after the first character, with ids
/// lacking one placed last in lexicographic order.
fn svid_key(id: &str) -> (bool, u64, &str) {
    match id.get(1..).and_then(|suffix| suffix.parse::<u64>().ok()) {
        Some(n) => (false, n, id),
        None => (true, 0, id),
    }
}

// =#========================================================================#=
// TESTS - CALDER INPUT WRITER
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;

    fn supervar(id: &str, var: Vec<u64>, reference: Vec<u64>) -> Supervariant {
        let total_reads = var.iter().zip(&reference).map(|(v, r)| v + r).collect();
        Supervariant {
            id: id.to_string(),
            var_reads: var,
            ref_reads: reference,
            total_reads,
        }
    }

    fn render(samples: &[String], supervars: &[Supervariant]) -> String {
        let mut out = Vec::new();
        write_calder_input_to(&mut out, samples, supervars).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_layout() {
        let samples = vec!["P1".to_string(), "P2".to_string()];
        let supervars = vec![supervar("S0", vec![5, 6], vec![95, 94])];

        assert_eq!(render(&samples, &supervars), "S0\tS0\nP1\t95\t5\nP2\t94\t6\n");
    }

    #[test]
    fn test_orders_by_numeric_suffix() {
        let samples = vec!["P1".to_string()];
        let supervars = vec![
            supervar("S10", vec![1], vec![2]),
            supervar("S2", vec![3], vec![4]),
            supervar("S0", vec![5], vec![6]),
        ];

        let out = render(&samples, &supervars);
        let header = out.lines().next().unwrap();
        assert_eq!(header, "S0\tS0\tS2\tS2\tS10\tS10");
        assert_eq!(out.lines().nth(1).unwrap(), "P1\t6\t5\t4\t3\t2\t1");
    }

    #[test]
    fn test_sample_count_mismatch() {
        let samples = vec!["P1".to_string(), "P2".to_string()];
        let supervars = vec![supervar("S0", vec![1], vec![2])];

        let mut out = Vec::new();
        let err = write_calder_input_to(&mut out, &samples, &supervars).unwrap_err();
        assert!(err.parsing_kind().is_some());
    }
}
