use crate::extract::error::ExtractionError;
use globset::Glob;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SAMPLE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\.").expect("sample number regex is valid"));

static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run regex is valid"));

/// A file found by the [`FileCollector`], tagged with the partition information
/// embedded in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    pub name: String,
    pub path: PathBuf,
    pub sample_number: String,
    pub year: Option<u16>,
}

/// Lists the entries of a single directory whose names match a glob pattern.
pub struct FileCollector;

impl FileCollector {
    /// Returns the names of all files directly inside `directory` that match `pattern`.
    ///
    /// Names are returned in the order of the directory listing. Subdirectories are
    /// never descended into and never returned, even if their name matches.
    pub fn list_files(directory: &Path, pattern: &str) -> Result<Vec<String>, ExtractionError> {
        let matcher = Glob::new(pattern)
            .map_err(|source| ExtractionError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        let mut relevant_files = Vec::new();
        for entry in fs::read_dir(directory).map_err(|err| ExtractionError::io(directory, err))? {
            let entry = entry.map_err(|err| ExtractionError::io(directory, err))?;
            let is_file = entry
                .file_type()
                .map_err(|err| ExtractionError::io(entry.path(), err))?
                .is_file();
            let name = entry.file_name().to_string_lossy().to_string();

            if is_file && matcher.is_match(&name) {
                relevant_files.push(name);
            }
        }

        debug!(
            "Found {} files matching '{}' in {}",
            relevant_files.len(),
            pattern,
            directory.display()
        );
        Ok(relevant_files)
    }

    /// Like [`FileCollector::list_files`], but tags every match with its sample number
    /// and, if present, its year.
    ///
    /// Fails if a matching file name carries no sample number.
    pub fn collect_tagged(
        directory: &Path,
        pattern: &str,
    ) -> Result<Vec<CollectedFile>, ExtractionError> {
        Self::list_files(directory, pattern)?
            .into_iter()
            .map(|name| {
                let sample_number = sample_number_from_name(&name)
                    .ok_or_else(|| ExtractionError::MissingSampleNumber(name.clone()))?;
                Ok(CollectedFile {
                    path: directory.join(&name),
                    year: year_from_name(&name),
                    sample_number,
                    name,
                })
            })
            .collect()
    }
}

/// The first digit that is immediately followed by a literal `.`.
///
/// `"DE1_0_2008_Beneficiary_Summary_File_Sample_3.zip"` yields `"3"`.
pub fn sample_number_from_name(name: &str) -> Option<String> {
    SAMPLE_NUMBER_REGEX
        .captures(name)
        .and_then(|captures| captures.get(1))
        .map(|digit| digit.as_str().to_string())
}

/// The first run of exactly four digits in the name.
pub fn year_from_name(name: &str) -> Option<u16> {
    DIGIT_RUN_REGEX
        .find_iter(name)
        .find(|run| run.as_str().len() == 4)
        .and_then(|run| run.as_str().parse().ok())
}
