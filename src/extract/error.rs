use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read directory or file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("No sample number found in file name '{0}'. Expected a digit followed by '.'")]
    MissingSampleNumber(String),
    #[error("Archive {0} does not contain any file.")]
    EmptyArchive(PathBuf),
    #[error(transparent)]
    Zip(#[from] ZipError),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl ExtractionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractionError::Io {
            path: path.into(),
            source,
        }
    }
}
