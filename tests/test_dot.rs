use calder_neutree::dot::{DotLine, DotLineClassifier, DotParser, LinePolicy, parse_file, parse_str};
use calder_neutree::parser::ParsingErrorType;
use std::path::Path;

// --- TESTS DOT PARSING ---
#[test]
fn test_fixture_tree() {
    let path = Path::new("tests").join("fixtures").join("calder_t4.dot");
    let graph = parse_file(&path).unwrap();

    // Rooted tree over 4 vertices has 3 edges
    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.edges().len(), 3);
    for edge in graph.edges() {
        assert!(graph.labels().contains_token(edge.parent()));
        assert!(graph.labels().contains_token(edge.child()));
    }
    assert_eq!(graph.labels().get("v3"), Some("S3"));
}

#[test]
fn test_edges_keep_dot_direction_and_order() {
    let dot = "digraph data_tree1 {\nv0 -> v1;\nv1 -> v2;\nv0 -> v3;\n}\n";
    let graph = parse_str(dot).unwrap();

    let edges: Vec<(&str, &str)> = graph.edges().iter().map(|e| (e.parent(), e.child())).collect();
    assert_eq!(edges, vec![("v0", "v1"), ("v1", "v2"), ("v0", "v3")]);
}

#[test]
fn test_stops_at_terminator() {
    let dot = "digraph data_tree1 {\nv0 [label=\"S0\"];\n}\nv1 [label=\"S1\"];\nv0 -> v1;\n";
    let graph = parse_str(dot).unwrap();

    assert_eq!(graph.labels().len(), 1);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_last_label_wins() {
    let dot = "digraph g {\nv0 [label=\"S0\"];\nv0 [label=\"S5\"];\n}\n";
    let graph = parse_str(dot).unwrap();

    assert_eq!(graph.labels().get("v0"), Some("S5"));
}

#[test]
fn test_permissive_skips_attribute_lines() {
    let path = Path::new("tests").join("fixtures").join("calder_t4.dot");
    let graph = DotParser::new()
        .with_line_policy(LinePolicy::Permissive)
        .parse_file(&path)
        .unwrap();

    assert_eq!(graph.edges().len(), 3);
}

#[test]
fn test_strict_rejects_attribute_lines() {
    let path = Path::new("tests").join("fixtures").join("calder_t4.dot");
    let err = DotParser::new()
        .with_line_policy(LinePolicy::Strict)
        .parse_file(&path)
        .unwrap_err();

    assert!(matches!(err.kind(), ParsingErrorType::UnrecognizedDotSyntax(_)));
    assert_eq!(err.line(), 2);
}

#[test]
fn test_strict_accepts_blank_lines() {
    let dot = "digraph data_tree1 {\n\nv0 [label=\"S0\"];\n\n}\n";
    let graph = DotParser::new()
        .with_line_policy(LinePolicy::Strict)
        .parse_str(dot)
        .unwrap();

    assert_eq!(graph.labels().len(), 1);
}

#[test]
fn test_missing_file() {
    let err = parse_file(Path::new("tests").join("fixtures").join("missing.dot")).unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

// --- TESTS LINE CLASSIFIER ---
#[test]
fn test_classifier_priority() {
    let classifier = DotLineClassifier::new();

    assert_eq!(classifier.classify("digraph data_tree1 {"), Some(DotLine::Header));
    assert_eq!(
        classifier.classify("v12 [label=\"S3\"];"),
        Some(DotLine::VertexLabel { token: "v12", label: "S3" })
    );
    assert_eq!(
        classifier.classify("v0 -> v12;"),
        Some(DotLine::Edge { parent: "v0", child: "v12" })
    );
    assert_eq!(classifier.classify("}"), Some(DotLine::Terminator));
    assert_eq!(classifier.classify("node [shape=box];"), None);
}
