//! Loaders for the simple somatic mutation (SSM) input format.
//!
//! A dataset consists of two files:
//! * `<name>.ssm`: tab-separated, one variant per row with the columns
//!   `id`, `name`, `var_reads`, `total_reads` and `var_read_prob`. The last
//!   three hold one comma-separated value per sample.
//! * `<name>.params.json`: JSON object with the keys `samples`, `clusters`
//!   and (optionally) `garbage`.
//!
//! Clustered variants are combined into supervariants with
//! [clusters_to_supervars] before they are handed to CALDER.

mod params;
mod supervariants;
mod variant;

pub use params::{Params, load_params, parse_params_str};
pub use supervariants::{Supervariant, clusters_to_supervars};
pub use variant::{Variant, load_ssm, parse_ssm_str};
