//! DOT line patterns for CALDER tree files.
//!
//! Tokens are vertex names as CALDER writes them (`v0`, `v1`, ...);
//! labels are any non-empty string without double quotes.

/// Graph declaration, e.g. `digraph data_tree1 {`
pub(crate) const HEADER_PATTERN: &str = r"^digraph\s+[A-Za-z0-9_]+\s*\{$";

/// Vertex label declaration, e.g. `v3 [label="S3"];`
pub(crate) const VERTEX_LABEL_PATTERN: &str = r#"^([A-Za-z0-9_]+)\s*\[label="([^"]+)"\];$"#;

/// Edge declaration, e.g. `v0 -> v3;`
pub(crate) const EDGE_PATTERN: &str = r"^([A-Za-z0-9_]+)\s*->\s*([A-Za-z0-9_]+);$";

/// Closing brace of the graph
pub(crate) const TERMINATOR_PATTERN: &str = r"^\}$";
