use crate::extract::error::ExtractionError;
use log::debug;
use polars::io::SerReader;
use polars::prelude::{CsvReadOptions, DataFrame};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Reads a DE-SynPUF extract into a `DataFrame`.
///
/// `.zip` archives are opened and their CSV member is read. Any other file is read
/// as plain CSV. The first row is the header and every column is read as text, so
/// identifiers and codes are kept verbatim (leading zeros included). Empty fields
/// are null.
pub fn read_table(path: &Path) -> Result<DataFrame, ExtractionError> {
    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    let bytes = if is_zip {
        read_csv_member(path)?
    } else {
        std::fs::read(path).map_err(|err| ExtractionError::io(path, err))?
    };

    let table = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    debug!("Read {} with shape {:?}", path.display(), table.shape());
    Ok(table)
}

/// Returns the bytes of the first `.csv` member of the archive, falling back to the
/// first file member if none carries that suffix.
fn read_csv_member(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    let file = File::open(path).map_err(|err| ExtractionError::io(path, err))?;
    let mut archive = ZipArchive::new(file)?;

    let mut first_file = None;
    let mut csv_member = None;
    for idx in 0..archive.len() {
        let entry = archive.by_index(idx)?;
        if !entry.is_file() {
            continue;
        }
        if first_file.is_none() {
            first_file = Some(idx);
        }
        if entry.name().to_lowercase().ends_with(".csv") {
            csv_member = Some(idx);
            break;
        }
    }

    let member_idx = csv_member
        .or(first_file)
        .ok_or_else(|| ExtractionError::EmptyArchive(path.to_path_buf()))?;

    let mut entry = archive.by_index(member_idx)?;
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|err| ExtractionError::io(path, err))?;
    Ok(bytes)
}
