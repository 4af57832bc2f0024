use crate::extract::archive_reader::read_table;
use crate::extract::file_collector::FileCollector;
use crate::transform::column_family::LOCATION_COLUMN_FAMILIES;
use crate::transform::constants::*;
use crate::transform::dates::parse_yyyymmdd;
use crate::transform::error::TransformError;
use crate::transform::utils::{date_column, int32_values, require_columns, text_column};
use crate::utils::{concat_aligned, drop_duplicates, lowercase_column_names};
use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use polars::prelude::{
    BooleanChunked, Column, DataFrame, DataType, IntoLazy, IntoSeries, JoinArgs, JoinType,
    MaintainOrderJoin, NamedFrom, col,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use strum_macros::Display;

/// How the death date is compared with the claim start date when deriving
/// `death_before_claim_ind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeathComparison {
    /// Year, month and day are compared independently: death year >= claim year,
    /// death month >= claim month and death day > claim day. Dates across a month or
    /// year boundary can be misclassified.
    #[default]
    Componentwise,
    /// The death date lies strictly after the claim start date.
    Calendar,
}

/// One yearly beneficiary summary extract of one sample.
#[derive(Debug, Clone)]
pub struct SummaryFile {
    pub name: String,
    pub sample_number: String,
    pub year: u16,
    pub data: DataFrame,
}

impl SummaryFile {
    /// Lowercases the headers and checks that every expected summary column exists.
    pub fn new(
        name: impl Into<String>,
        sample_number: impl Into<String>,
        year: u16,
        mut data: DataFrame,
    ) -> Result<Self, TransformError> {
        let name = name.into();
        lowercase_column_names(&mut data)?;

        let required: Vec<&str> = [BENEFICIARY_ID, BIRTH_DATE, SEX_CODE, RACE_CODE]
            .into_iter()
            .chain(YEAR_SPECIFIC_COLUMNS)
            .chain(CHRONIC_CONDITION_FLAGS)
            .collect();
        require_columns(&data, &name, &required)?;

        let ids = text_column(&data, BENEFICIARY_ID)?;
        data.with_column(ids.into_series())?;

        Ok(SummaryFile {
            name,
            sample_number: sample_number.into(),
            year,
            data,
        })
    }
}

/// Reshapes the yearly beneficiary summaries into one row per beneficiary and
/// sample and joins them onto the core claims table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLinker {
    summary_pattern: String,
    death_date_years: Vec<u16>,
    death_comparison: DeathComparison,
}

impl Default for SummaryLinker {
    fn default() -> Self {
        SummaryLinker::new(
            DEFAULT_SUMMARY_PATTERN,
            DEFAULT_DEATH_DATE_YEARS.to_vec(),
            DeathComparison::default(),
        )
    }
}

impl SummaryLinker {
    pub fn new(
        summary_pattern: impl Into<String>,
        death_date_years: Vec<u16>,
        death_comparison: DeathComparison,
    ) -> Self {
        SummaryLinker {
            summary_pattern: summary_pattern.into(),
            death_date_years,
            death_comparison,
        }
    }

    pub fn with_death_comparison(mut self, death_comparison: DeathComparison) -> Self {
        self.death_comparison = death_comparison;
        self
    }

    /// Reads the summary files of `directory` and links them to `core_claims`.
    pub fn add_summary_info(
        &self,
        core_claims: DataFrame,
        directory: &Path,
    ) -> Result<DataFrame, TransformError> {
        let summaries = self.discover(directory)?;
        self.link(core_claims, summaries)
    }

    /// Finds and reads every summary file in `directory`.
    pub fn discover(&self, directory: &Path) -> Result<Vec<SummaryFile>, TransformError> {
        let collected = FileCollector::collect_tagged(directory, &self.summary_pattern)?;
        info!(
            "Found {} beneficiary summary files in {}",
            collected.len(),
            directory.display()
        );

        collected
            .into_iter()
            .map(|file| {
                let year = file
                    .year
                    .ok_or_else(|| TransformError::MissingSummaryYear(file.name.clone()))?;
                let data = read_table(&file.path)?;
                info!(
                    "Read {} (sample {}, year {}, {} rows)",
                    file.name,
                    file.sample_number,
                    year,
                    data.height()
                );
                SummaryFile::new(file.name, file.sample_number, year, data)
            })
            .collect()
    }

    /// Builds the enriched beneficiary keys table from `summaries`, joins it onto
    /// `core_claims` by beneficiary and sample, and derives the death indicator.
    pub fn link(
        &self,
        core_claims: DataFrame,
        mut summaries: Vec<SummaryFile>,
    ) -> Result<DataFrame, TransformError> {
        if summaries.is_empty() {
            warn!("No beneficiary summaries to link. Summary columns will be empty.");
        }
        summaries.sort_by(|a, b| {
            (&a.sample_number, a.year, &a.name).cmp(&(&b.sample_number, b.year, &b.name))
        });

        let keys = Self::build_keys(&summaries)?;
        let keys = Self::enrich_keys(&keys, &summaries)?;
        let keys = Self::collapse_locations(keys)?;
        let keys = self.resolve_death_date(keys)?;
        debug!("Beneficiary keys shape: {:?}", keys.shape());

        debug!("Core claims shape: {:?}", core_claims.shape());
        let merged = core_claims
            .lazy()
            .join(
                keys.lazy(),
                [col(BENEFICIARY_ID), col(SAMPLE_NUMBER)],
                [col(BENEFICIARY_ID), col(SAMPLE_NUMBER)],
                JoinArgs {
                    maintain_order: MaintainOrderJoin::Left,
                    ..JoinArgs::new(JoinType::Left)
                },
            )
            .collect()?;
        debug!("Merged shape: {:?}", merged.shape());
        let merged = drop_duplicates(merged)?;
        debug!("Merged shape without duplicates: {:?}", merged.shape());

        let merged = self.death_before_claim_indicator(merged)?;
        info!("Linked claims table has shape {:?}", merged.shape());
        Ok(merged)
    }

    /// The distinct (beneficiary, demographics, sample) rows across all summaries.
    pub fn build_keys(summaries: &[SummaryFile]) -> Result<DataFrame, TransformError> {
        if summaries.is_empty() {
            return Ok(DataFrame::new(
                BENEFICIARY_KEY_COLUMNS
                    .iter()
                    .map(|name| Column::new_empty((*name).into(), &DataType::String))
                    .collect(),
            )?);
        }

        let mut key_frames = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let mut keys = summary
                .data
                .select([BENEFICIARY_ID, BIRTH_DATE, SEX_CODE, RACE_CODE])?;
            keys.with_column(Column::new(
                SAMPLE_NUMBER.into(),
                vec![summary.sample_number.as_str(); keys.height()],
            ))?;
            key_frames.push(keys);
        }

        let keys = concat_aligned(key_frames)?;
        debug!("Stacked beneficiary keys shape: {:?}", keys.shape());
        let keys = drop_duplicates(keys)?;
        debug!("Deduplicated beneficiary keys shape: {:?}", keys.shape());
        Ok(keys)
    }

    /// Attaches every summary year of a sample to that sample's keys as
    /// year-suffixed columns, one row per beneficiary.
    ///
    /// `summaries` are expected in (sample, year) order.
    pub fn enrich_keys(
        keys: &DataFrame,
        summaries: &[SummaryFile],
    ) -> Result<DataFrame, TransformError> {
        let samples: BTreeSet<&str> = summaries
            .iter()
            .map(|summary| summary.sample_number.as_str())
            .collect();
        if samples.is_empty() {
            return Ok(keys.clone());
        }

        let sample_numbers = text_column(keys, SAMPLE_NUMBER)?;
        let mut rebuilt = Vec::with_capacity(samples.len());
        for sample in samples {
            let in_sample: Vec<bool> = sample_numbers
                .iter()
                .map(|value| value == Some(sample))
                .collect();
            let mut sample_keys =
                keys.filter(&BooleanChunked::new("in_sample".into(), in_sample))?;

            let mut seen_years = HashSet::new();
            for summary in summaries.iter().filter(|s| s.sample_number == sample) {
                if !seen_years.insert(summary.year) {
                    return Err(TransformError::DuplicateSummaryYear {
                        sample_number: sample.to_string(),
                        year: summary.year,
                    });
                }

                let year_slice = Self::year_slice(summary)?;
                debug!("{} year slice shape: {:?}", summary.name, year_slice.shape());
                sample_keys = sample_keys
                    .lazy()
                    .join(
                        year_slice.lazy(),
                        [col(BENEFICIARY_ID)],
                        [col(BENEFICIARY_ID)],
                        JoinArgs::new(JoinType::Left),
                    )
                    .collect()?;
                debug!(
                    "Sample {} keys after {}: {:?}",
                    sample,
                    summary.name,
                    sample_keys.shape()
                );
            }
            rebuilt.push(sample_keys);
        }

        let rebuilt = concat_aligned(rebuilt)?;
        debug!("Rebuilt keys shape: {:?}", rebuilt.shape());
        Ok(drop_duplicates(rebuilt)?)
    }

    /// The year-specific columns of one summary, suffixed with its year, plus the
    /// chronic-condition count for that year.
    fn year_slice(summary: &SummaryFile) -> Result<DataFrame, TransformError> {
        let mut columns = vec![summary.data.column(BENEFICIARY_ID)?.clone()];
        for name in YEAR_SPECIFIC_COLUMNS {
            let renamed = summary
                .data
                .column(name)?
                .clone()
                .with_name(year_suffixed(name, summary.year).into());
            columns.push(renamed);
        }
        columns.push(Column::new(
            year_suffixed(CHRONIC_CONDITION_COUNT, summary.year).into(),
            Self::chronic_condition_counts(&summary.data)?,
        ));
        Ok(DataFrame::new(columns)?)
    }

    /// Number of chronic conditions flagged "yes" per row.
    ///
    /// Flags are stored as 1 = no and 2 = yes, so each flag contributes `flag - 1`.
    /// Missing or unreadable flags contribute nothing.
    fn chronic_condition_counts(data: &DataFrame) -> Result<Vec<i64>, TransformError> {
        let mut counts = vec![0i64; data.height()];
        for flag in CHRONIC_CONDITION_FLAGS {
            for (count, value) in counts.iter_mut().zip(text_column(data, flag)?.iter()) {
                if let Some(parsed) = value
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .filter(|parsed| parsed.is_finite())
                {
                    *count = count.saturating_add(parsed as i64 - 1);
                }
            }
        }
        Ok(counts)
    }

    /// Adds `collapsed_states` and `collapsed_counties`, the distinct state and county
    /// codes seen across all summary years.
    pub fn collapse_locations(mut keys: DataFrame) -> Result<DataFrame, TransformError> {
        for family in LOCATION_COLUMN_FAMILIES {
            for collapsed in family.collapse(&keys)? {
                keys.with_column(collapsed)?;
            }
        }
        Ok(keys)
    }

    /// Adds `death_date`, `death_year`, `death_month` and `death_day`.
    ///
    /// The death date is the first non-null `bene_death_dt_<year>` in the configured
    /// year order. Values that are not `YYYYMMDD` dates resolve to null.
    pub fn resolve_death_date(&self, mut keys: DataFrame) -> Result<DataFrame, TransformError> {
        let mut candidates = Vec::with_capacity(self.death_date_years.len());
        for year in &self.death_date_years {
            let name = year_suffixed(DEATH_DT, *year);
            if keys.column(&name).is_ok() {
                candidates.push(text_column(&keys, &name)?);
            } else {
                warn!("Column {name} not found. It is skipped when resolving death dates.");
            }
        }

        let death_dates: Vec<Option<NaiveDate>> = (0..keys.height())
            .map(|row| {
                candidates
                    .iter()
                    .find_map(|candidate| candidate.get(row))
                    .and_then(parse_yyyymmdd)
            })
            .collect();

        keys.with_column(date_column(DEATH_DATE, death_dates.iter().copied())?)?;
        keys.with_column(Column::new(
            DEATH_MONTH.into(),
            death_dates
                .iter()
                .map(|date| date.map(|d| d.month() as i32))
                .collect::<Vec<Option<i32>>>(),
        ))?;
        keys.with_column(Column::new(
            DEATH_YEAR.into(),
            death_dates
                .iter()
                .map(|date| date.map(|d| d.year()))
                .collect::<Vec<Option<i32>>>(),
        ))?;
        keys.with_column(Column::new(
            DEATH_DAY.into(),
            death_dates
                .iter()
                .map(|date| date.map(|d| d.day() as i32))
                .collect::<Vec<Option<i32>>>(),
        ))?;
        Ok(keys)
    }

    /// Adds `death_before_claim_ind`: 1 if the beneficiary has a recorded death date
    /// that lies after the claim start under the configured [`DeathComparison`],
    /// otherwise 0.
    pub fn death_before_claim_indicator(
        &self,
        mut merged: DataFrame,
    ) -> Result<DataFrame, TransformError> {
        let death_dates = int32_values(&merged, DEATH_DATE)?;

        let indicator: Vec<i32> = match self.death_comparison {
            DeathComparison::Componentwise => {
                let death_years = int32_values(&merged, DEATH_YEAR)?;
                let death_months = int32_values(&merged, DEATH_MONTH)?;
                let death_days = int32_values(&merged, DEATH_DAY)?;
                let claim_years = int32_values(&merged, CLAIM_START_YEAR)?;
                let claim_months = int32_values(&merged, CLAIM_START_MONTH)?;
                let claim_days = int32_values(&merged, CLAIM_START_DAY)?;

                (0..merged.height())
                    .map(|row| {
                        let flagged = death_dates[row].is_some()
                            && matches!(
                                (death_years[row], claim_years[row]),
                                (Some(death), Some(claim)) if death >= claim
                            )
                            && matches!(
                                (death_months[row], claim_months[row]),
                                (Some(death), Some(claim)) if death >= claim
                            )
                            && matches!(
                                (death_days[row], claim_days[row]),
                                (Some(death), Some(claim)) if death > claim
                            );
                        flagged as i32
                    })
                    .collect()
            }
            DeathComparison::Calendar => {
                let claim_dates = int32_values(&merged, CLAIM_FROM_DATE)?;
                death_dates
                    .iter()
                    .zip(claim_dates.iter())
                    .map(|(death, claim)| {
                        matches!((death, claim), (Some(death), Some(claim)) if death > claim)
                            as i32
                    })
                    .collect()
            }
        };

        merged.with_column(Column::new(DEATH_BEFORE_CLAIM_IND.into(), indicator))?;
        Ok(merged)
    }
}
