//! CALDER input files.
//!
//! CALDER reads a tab-separated read-count table:
//! * header row: every supervariant id twice, without a cell above the
//!   sample names
//! * one row per sample: the sample name, then per supervariant the
//!   reference read count followed by the variant read count
//!
//! Supervariants appear in order of the number following their first
//! character (`S0`, `S1`, ..., `S10`).

mod writer;

pub use writer::{write_calder_input, write_calder_input_to};
