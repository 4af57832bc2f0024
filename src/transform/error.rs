use crate::extract::error::ExtractionError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Expected column '{column}' is missing from the {table} table.")]
    MissingColumn { table: String, column: String },
    #[error("Column '{column}' holds '{value}', which is not a YYYYMMDD date.")]
    InvalidClaimDate { column: String, value: String },
    #[error("No year found in summary file name '{0}'.")]
    MissingSummaryYear(String),
    #[error("Found more than one summary file for sample {sample_number} and year {year}.")]
    DuplicateSummaryYear { sample_number: String, year: u16 },
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
