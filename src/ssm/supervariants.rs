//! Aggregation of clustered variants into supervariants.

use crate::parser::ParsingError;
use crate::ssm::variant::Variant;
use std::collections::HashMap;

/// Read-count probability assigned to every supervariant, as for a
/// heterozygous mutation in a diploid region.
const SUPERVARIANT_VAR_READ_PROB: f64 = 0.5;

// =#========================================================================#=
// SUPERVARIANT
// =#========================================================================#=
/// Combined read counts of all variants in one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Supervariant {
    /// `S{k}` for cluster `k`
    pub id: String,
    pub var_reads: Vec<u64>,
    pub ref_reads: Vec<u64>,
    pub total_reads: Vec<u64>,
}

/// Builds one supervariant per cluster, named `S0`, `S1`, ... in cluster order.
///
/// Read counts are rescaled to a variant read probability of 0.5 before
/// summing: per sample `N' = N * omega / 0.5` and `V' = min(V, N')`.
///
/// # Errors
/// Returns an `InvalidParams` error if a cluster is empty or names a
/// variant missing from `variants`.
pub fn clusters_to_supervars(clusters: &[Vec<String>], variants: &[Variant]) -> Result<Vec<Supervariant>, ParsingError> {
    let by_id: HashMap<&str, &Variant> = variants.iter().map(|v| (v.id.as_str(), v)).collect();

    clusters
        .iter()
        .enumerate()
        .map(|(k, cluster)| {
            let members = cluster
                .iter()
                .map(|id| {
                    by_id.get(id.as_str()).copied().ok_or_else(|| {
                        ParsingError::invalid_params(format!("cluster {k} references unknown variant '{id}'"))
                    })
                })
                .collect::<Result<Vec<&Variant>, ParsingError>>()?;
            make_supervar(format!("S{k}"), &members)
        })
        .collect()
}

fn make_supervar(id: String, members: &[&Variant]) -> Result<Supervariant, ParsingError> {
    let num_samples = match members.first() {
        Some(first) => first.num_samples(),
        None => return Err(ParsingError::invalid_params(format!("cluster {id} is empty"))),
    };

    let mut var_sum = vec![0.0; num_samples];
    let mut total_sum = vec![0.0; num_samples];
    for variant in members {
        for s in 0..num_samples {
            let total_hat = variant.total_reads[s] as f64 * variant.var_read_prob[s] / SUPERVARIANT_VAR_READ_PROB;
            let var_hat = (variant.var_reads[s] as f64).min(total_hat);
            var_sum[s] += var_hat;
            total_sum[s] += total_hat;
        }
    }

    let var_reads: Vec<u64> = var_sum.iter().map(|v| v.round() as u64).collect();
    let total_reads: Vec<u64> = total_sum.iter().map(|t| t.round() as u64).collect();
    let ref_reads = total_reads
        .iter()
        .zip(&var_reads)
        .map(|(total, var)| total.saturating_sub(*var))
        .collect();

    Ok(Supervariant {
        id,
        var_reads,
        ref_reads,
        total_reads,
    })
}

// =#========================================================================#=
// TESTS - SUPERVARIANTS
// =#========================================================================#=
#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: &str, var: u64, total: u64, omega: f64) -> Variant {
        Variant {
            id: id.to_string(),
            name: id.to_string(),
            var_reads: vec![var],
            total_reads: vec![total],
            var_read_prob: vec![omega],
        }
    }

    #[test]
    fn test_sums_diploid_variants() {
        let variants = vec![variant("s0", 10, 100, 0.5), variant("s1", 30, 50, 0.5)];
        let clusters = vec![vec!["s0".to_string(), "s1".to_string()]];

        let supervars = clusters_to_supervars(&clusters, &variants).unwrap();
        assert_eq!(supervars[0].id, "S0");
        assert_eq!(supervars[0].var_reads, vec![40]);
        assert_eq!(supervars[0].total_reads, vec![150]);
        assert_eq!(supervars[0].ref_reads, vec![110]);
    }

    #[test]
    fn test_rescales_haploid_variant() {
        // omega = 1 doubles the effective depth
        let variants = vec![variant("s0", 30, 40, 1.0)];
        let clusters = vec![vec!["s0".to_string()]];

        let supervars = clusters_to_supervars(&clusters, &variants).unwrap();
        assert_eq!(supervars[0].total_reads, vec![80]);
        assert_eq!(supervars[0].var_reads, vec![30]);
    }

    #[test]
    fn test_unknown_variant() {
        let clusters = vec![vec!["nope".to_string()]];
        assert!(clusters_to_supervars(&clusters, &[]).is_err());
    }
}
