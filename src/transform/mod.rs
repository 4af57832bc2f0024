pub mod column_family;
pub mod constants;
pub mod core_claims_builder;
pub mod dates;
pub mod error;
pub mod grouping;
pub mod summary_linker;
pub(crate) mod utils;

pub use core_claims_builder::CoreClaimsBuilder;
pub use summary_linker::{DeathComparison, SummaryFile, SummaryLinker};
