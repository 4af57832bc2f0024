use crate::config::loader_config::LoaderConfig;
use crate::transform::DeathComparison;
use crate::transform::constants::{
    DEFAULT_CLAIMS_PATTERN, DEFAULT_DEATH_DATE_YEARS, DEFAULT_FREQUENCY_THRESHOLD,
    DEFAULT_SUMMARY_PATTERN,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use validator::{Validate, ValidationError};

/// Represents the configuration for the claims pipeline.
///
/// Only `data_dir` is required. Everything else falls back to the layout of the
/// public DE-SynPUF extracts.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory holding the zipped claims and beneficiary summary extracts.
    pub data_dir: PathBuf,
    #[serde(default = "default_claims_pattern")]
    #[validate(length(min = 1))]
    pub claims_pattern: String,
    #[serde(default = "default_summary_pattern")]
    #[validate(length(min = 1))]
    pub summary_pattern: String,
    /// Codes seen more often than this are kept by the frequency grouping.
    #[serde(default = "default_frequency_threshold")]
    pub frequency_threshold: usize,
    /// Summary years searched for a death date, in priority order.
    #[serde(default = "default_death_date_years")]
    #[validate(length(min = 1), custom(function = "validate_unique_years"))]
    pub death_date_years: Vec<u16>,
    #[serde(default)]
    pub death_comparison: DeathComparison,
    #[serde(default)]
    pub loader: Option<LoaderConfig>,
}

impl PipelineConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            claims_pattern: default_claims_pattern(),
            summary_pattern: default_summary_pattern(),
            frequency_threshold: default_frequency_threshold(),
            death_date_years: default_death_date_years(),
            death_comparison: DeathComparison::default(),
            loader: None,
        }
    }

    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = Some(loader);
        self
    }
}

fn default_claims_pattern() -> String {
    DEFAULT_CLAIMS_PATTERN.to_string()
}

fn default_summary_pattern() -> String {
    DEFAULT_SUMMARY_PATTERN.to_string()
}

fn default_frequency_threshold() -> usize {
    DEFAULT_FREQUENCY_THRESHOLD
}

fn default_death_date_years() -> Vec<u16> {
    DEFAULT_DEATH_DATE_YEARS.to_vec()
}

fn validate_unique_years(years: &[u16]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if let Some(duplicate) = years.iter().find(|year| !seen.insert(**year)) {
        let mut error = ValidationError::new("duplicate_year");
        error.message = Some(format!("Year {duplicate} is listed more than once.").into());
        return Err(error);
    }
    Ok(())
}
