use crate::extract::archive_reader::read_table;
use crate::extract::error::ExtractionError;
use crate::extract::file_collector::FileCollector;
use crate::transform::constants::SAMPLE_NUMBER;
use crate::utils::concat_aligned;
use log::{debug, info};
use polars::prelude::{Column, DataFrame};
use std::path::Path;

/// Reads every claims extract in `directory` matching `pattern` into one table.
///
/// Each file's rows are tagged with a `sample_number` column taken from the file
/// name before all files are stacked. Files with differing column sets are aligned
/// by column name.
pub fn read_in_all_files(directory: &Path, pattern: &str) -> Result<DataFrame, ExtractionError> {
    let files = FileCollector::collect_tagged(directory, pattern)?;
    info!(
        "Reading {} claims files from {}",
        files.len(),
        directory.display()
    );

    let mut tables = Vec::with_capacity(files.len());
    for file in files {
        let mut table = read_table(&file.path)?;
        let height = table.height();
        table.with_column(Column::new(
            SAMPLE_NUMBER.into(),
            vec![file.sample_number.as_str(); height],
        ))?;
        info!("Read {} ({} rows)", file.name, height);
        tables.push(table);
    }

    let claims = concat_aligned(tables)?;
    debug!("Concatenated claims shape: {:?}", claims.shape());
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_suite::archives::write_zipped_csv;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temporary directory")
    }

    #[rstest]
    fn test_read_in_all_files_tags_sample_number(temp_dir: TempDir) {
        write_zipped_csv(
            temp_dir.path(),
            "DE1_0_2008_to_2010_Inpatient_Claims_Sample_1.zip",
            "DESYNPUF_ID,CLM_ID\nA,1\nB,2\n",
        );
        write_zipped_csv(
            temp_dir.path(),
            "DE1_0_2008_to_2010_Inpatient_Claims_Sample_2.zip",
            "DESYNPUF_ID,CLM_ID\nC,3\n",
        );
        write_zipped_csv(
            temp_dir.path(),
            "DE1_0_2008_Beneficiary_Summary_File_Sample_1.zip",
            "DESYNPUF_ID\nA\n",
        );

        let claims = read_in_all_files(temp_dir.path(), "*Inpatient_Claims_Sample_*").unwrap();

        assert_eq!(claims.shape(), (3, 3));
        let mut pairs: Vec<(String, String)> = claims
            .column("CLM_ID")
            .unwrap()
            .str()
            .unwrap()
            .iter()
            .zip(claims.column(SAMPLE_NUMBER).unwrap().str().unwrap().iter())
            .map(|(id, sample)| (id.unwrap().to_string(), sample.unwrap().to_string()))
            .collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("1".to_string(), "1".to_string()),
                ("2".to_string(), "1".to_string()),
                ("3".to_string(), "2".to_string()),
            ]
        );
    }

    #[rstest]
    fn test_read_in_all_files_without_matches(temp_dir: TempDir) {
        let claims = read_in_all_files(temp_dir.path(), "*Inpatient_Claims_Sample_*").unwrap();
        assert_eq!(claims.height(), 0);
    }
}
