//! Basic low-level line parser functionality.
//!
//! Both CALDER output formats (the solution file and the DOT tree file) are
//! line oriented; this module provides the shared line reading and error
//! reporting infrastructure.
pub mod buffered_line_source;
pub mod in_memory_line_source;
pub mod line_parser;
pub mod line_source;
pub mod parsing_error;

pub use buffered_line_source::BufferedLineSource;
pub use in_memory_line_source::InMemoryLineSource;
pub use line_parser::{LineParser, ReadStrategy};
pub use line_source::LineSource;
pub use parsing_error::{ParsingError, ParsingErrorType};
