pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
pub use pipeline::Pipeline;
#[cfg(test)]
mod test_suite;
pub mod transform;
pub(crate) mod utils;
