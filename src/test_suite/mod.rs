pub(crate) mod archives;
pub(crate) mod claims_generation;
pub(crate) mod summary_generation;
