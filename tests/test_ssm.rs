use calder_neutree::parser::ParsingErrorType;
use calder_neutree::ssm::{clusters_to_supervars, load_params, load_ssm, parse_ssm_str};
use std::path::Path;

// --- TESTS SSM FILES ---
#[test]
fn test_fixture_variants() {
    let variants = load_ssm(Path::new("tests").join("fixtures").join("sim_k3_s2.ssm")).unwrap();

    assert_eq!(variants.len(), 5);
    assert_eq!(variants[1].id, "s1");
    assert_eq!(variants[1].name, "S_1");
    assert_eq!(variants[1].var_reads, vec![42, 30]);
    assert_eq!(variants[1].ref_reads(), vec![58, 60]);
    assert_eq!(variants[3].var_read_prob, vec![1.0, 1.0]);
}

#[test]
fn test_sample_count_differs_between_rows() {
    let ssm = "id\tname\tvar_reads\ttotal_reads\tvar_read_prob\n\
               s0\tS_0\t1,2\t10,10\t0.5,0.5\n\
               s1\tS_1\t1\t10\t0.5\n";
    let err = parse_ssm_str(ssm).unwrap_err();

    assert!(matches!(err.kind(), ParsingErrorType::InvalidSsm(_)));
    assert_eq!(err.line(), 3);
}

#[test]
fn test_missing_ssm_file() {
    let err = load_ssm(Path::new("tests").join("fixtures").join("missing.ssm")).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

// --- TESTS PARAMS AND SUPERVARIANTS ---
#[test]
fn test_fixture_supervariants() {
    let dir = Path::new("tests").join("fixtures");
    let variants = load_ssm(dir.join("sim_k3_s2.ssm")).unwrap();
    let params = load_params(dir.join("sim_k3_s2.params.json")).unwrap();

    assert_eq!(params.samples(), &["P1", "P2"]);
    assert_eq!(params.garbage(), &["s4"]);

    let supervars = clusters_to_supervars(params.clusters(), &variants).unwrap();
    let ids: Vec<&str> = supervars.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["S0", "S1", "S2"]);

    // s0 + s1, both diploid
    assert_eq!(supervars[0].var_reads, vec![82, 65]);
    assert_eq!(supervars[0].total_reads, vec![200, 190]);
    // s3 with var_read_prob 1 counts double depth
    assert_eq!(supervars[2].total_reads, vec![120, 100]);
    assert_eq!(supervars[2].ref_reads, vec![65, 80]);
}

#[test]
fn test_missing_params_file() {
    let err = load_params(Path::new("tests").join("fixtures").join("missing.params.json")).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}
