use calder_neutree::parser::{ParsingErrorType, ReadStrategy};
use calder_neutree::solution::{SolutionParser, parse_file, parse_str};
use std::path::Path;

// --- TESTS SOLUTION FILE PARSING ---
#[test]
fn test_fixture_blocks() {
    let path = Path::new("tests").join("fixtures").join("calder_t4_s2.sol.csv");
    let bundle = parse_file(&path).unwrap();

    assert_eq!(bundle.len(), 3);
    assert_eq!(bundle.names().collect::<Vec<_>>(), vec!["U", "Fhat", "F"]);

    // Fhat of shape (2 samples x 4 svids)
    let fhat = bundle.frequency_matrix();
    assert_eq!(fhat.shape(), (2, 4));
    assert_eq!(fhat.column_labels(), &["s1", "s2"]);
    assert_eq!(fhat.row_labels(), &["S0", "S1", "S2", "S3"]);
    assert_eq!(fhat.value(1, 2), Some(0.15));
    assert_eq!(fhat.value(2, 0), None);

    // Stored transposed: one inner vector per sample
    assert_eq!(fhat.column(0), Some(&[1.0, 0.65, 0.0, 0.1][..]));

    let u = bundle.get("U").unwrap();
    assert_eq!(u.shape(), (4, 2));
}

#[test]
fn test_buffered_matches_in_memory() {
    let path = Path::new("tests").join("fixtures").join("calder_t4_s2.sol.csv");
    let in_memory = SolutionParser::new().parse_file(&path).unwrap();
    let buffered = SolutionParser::new()
        .with_read_strategy(ReadStrategy::Buffered)
        .parse_file(&path)
        .unwrap();

    assert_eq!(in_memory.frequency_matrix(), buffered.frequency_matrix());
}

#[test]
fn test_label_counts_match_shape() {
    let solution = "Fhat\ns1,s2,s3\nS0,1,1,1\nS1,0.5,0.4,0.3\n";
    let bundle = parse_str(solution).unwrap();
    let fhat = bundle.frequency_matrix();

    let (num_samples, num_svids) = fhat.shape();
    assert_eq!(fhat.column_labels().len(), num_samples);
    assert_eq!(fhat.row_labels().len(), num_svids);
    assert_eq!(bundle.svid_ordering().unwrap().non_root(), &["S1"]);
}

#[test]
fn test_crlf_and_extra_blank_lines() {
    let solution = "\r\n\r\nU\r\nS0,S1\r\ns1,0.5,0.5\r\n\r\n\r\n\r\nFhat\r\ns1\r\nS0,1.0\r\nS1,0.5\r\n\r\n";
    let bundle = parse_str(solution).unwrap();

    assert_eq!(bundle.len(), 2);
    assert_eq!(bundle.frequency_matrix().row_labels(), &["S0", "S1"]);
}

#[test]
fn test_custom_frequency_matrix_name() {
    let solution = "F\ns1\nS0,1.0\nS1,0.4\n";
    let bundle = SolutionParser::new()
        .with_frequency_matrix("F")
        .parse_str(solution)
        .unwrap();

    assert_eq!(bundle.frequency_matrix().name(), "F");
}

// --- TESTS SOLUTION FILE ERRORS ---
#[test]
fn test_missing_fhat() {
    let err = parse_str("U\nS0,S1\ns1,0.5,0.5\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::MissingMatrix(name) if name == "Fhat"));
}

#[test]
fn test_row_with_too_few_values() {
    let err = parse_str("Fhat\ns1,s2\nS0,1.0,1.0\nS1,0.5\n").unwrap_err();

    assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
    assert_eq!(err.line(), 4);
}

#[test]
fn test_row_with_too_many_values() {
    let err = parse_str("Fhat\ns1,s2\nS0,1.0,1.0,1.0\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
}

#[test]
fn test_non_numeric_value() {
    let err = parse_str("Fhat\ns1\nS0,abc\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
}

#[test]
fn test_header_of_only_corner_cell() {
    let err = parse_str("Fhat\n,\nS0,1.0\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
}

#[test]
fn test_block_without_rows() {
    let err = parse_str("Fhat\ns1,s2\n\nU\ns1\nS0,1\n").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::MalformedBlock(_)));
}

#[test]
fn test_missing_file() {
    let err = parse_file(Path::new("tests").join("fixtures").join("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}
