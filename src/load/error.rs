use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Can't store table. Output location not available: {reason}")]
    NoStorage { reason: String },
    #[error("Can't store table as {file_name}: {reason}")]
    CantStore { file_name: String, reason: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
