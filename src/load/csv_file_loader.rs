use crate::load::error::LoadError;
use crate::load::traits::Loadable;
use log::{debug, info};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Deserialize;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "merged_claims.csv";

/// A loader that writes the merged claims table as a single CSV file to the local
/// file system.
#[derive(Debug, Deserialize, PartialEq)]
pub struct CsvFileLoader {
    /// The directory the CSV file is written to.
    out_path: PathBuf,
    /// If true will create the full out path
    create_dir: bool,
    file_name: String,
}

impl CsvFileLoader {
    pub fn new(out_path: PathBuf, create_dir: bool, file_name: Option<String>) -> Self {
        Self {
            out_path,
            create_dir,
            file_name: file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        }
    }

    pub fn target(&self) -> PathBuf {
        self.out_path.join(&self.file_name)
    }
}

impl Loadable for CsvFileLoader {
    /// Writes `table` with a header row to `<out_path>/<file_name>`, replacing any
    /// existing file.
    ///
    /// Dates are written as `YYYY-MM-DD`; nulls become empty fields.
    fn load(&self, table: &mut DataFrame) -> Result<(), LoadError> {
        if self.create_dir {
            fs::create_dir_all(self.out_path.as_path()).map_err(|err| LoadError::NoStorage {
                reason: err.to_string(),
            })?;
        }

        let target = self.target();
        debug!("Storing table to: {:?}", target);
        let mut file = File::create(&target).map_err(|err| LoadError::CantStore {
            file_name: self.file_name.clone(),
            reason: err.to_string(),
        })?;

        CsvWriter::new(&mut file).include_header(true).finish(table)?;
        info!("Stored {} rows to {}", table.height(), target.display());
        Ok(())
    }
}
