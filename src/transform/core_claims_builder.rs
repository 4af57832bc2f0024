use crate::transform::column_family::{CLAIM_COLUMN_FAMILIES, ColumnFamily};
use crate::transform::constants::*;
use crate::transform::dates::parse_yyyymmdd;
use crate::transform::error::TransformError;
use crate::transform::grouping::{FrequencyGrouper, UtilizationBand};
use crate::transform::utils::{date_column, numeric_column, require_columns, text_column};
use crate::utils::lowercase_column_names;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use polars::prelude::{Column, DataFrame, IntoSeries};

/// Reduces the raw, concatenated inpatient claims to the core claims table.
///
/// The builder lowercases headers, drops claims without a start or end date,
/// derives the claim date parts and the length-of-stay band, groups the DRG and
/// provider codes by frequency and collapses every [`ColumnFamily`] into compact
/// text columns. One output row is produced per surviving input row.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreClaimsBuilder {
    frequency_threshold: usize,
    families: Vec<ColumnFamily>,
}

impl Default for CoreClaimsBuilder {
    fn default() -> Self {
        CoreClaimsBuilder::new(DEFAULT_FREQUENCY_THRESHOLD)
    }
}

impl CoreClaimsBuilder {
    pub fn new(frequency_threshold: usize) -> Self {
        CoreClaimsBuilder {
            frequency_threshold,
            families: CLAIM_COLUMN_FAMILIES.to_vec(),
        }
    }

    pub fn with_families(mut self, families: Vec<ColumnFamily>) -> Self {
        self.families = families;
        self
    }

    pub fn build(&self, mut claims: DataFrame) -> Result<DataFrame, TransformError> {
        info!("Building core claims table from {:?} claims", claims.shape());
        lowercase_column_names(&mut claims)?;
        require_columns(&claims, "claims", &REQUIRED_CLAIM_COLUMNS)?;

        let mut claims = Self::drop_undated(claims)?;

        let from_dates = Self::parse_claim_dates(&claims, CLAIM_FROM_DT)?;
        let thru_dates = Self::parse_claim_dates(&claims, CLAIM_THRU_DT)?;
        claims.with_column(date_column(
            CLAIM_FROM_DATE,
            from_dates.iter().copied().map(Some),
        )?)?;
        claims.with_column(date_column(
            CLAIM_THRU_DATE,
            thru_dates.iter().copied().map(Some),
        )?)?;
        claims.with_column(Column::new(
            CLAIM_START_YEAR.into(),
            from_dates.iter().map(|d| d.year()).collect::<Vec<i32>>(),
        ))?;
        claims.with_column(Column::new(
            CLAIM_START_MONTH.into(),
            from_dates.iter().map(|d| d.month() as i32).collect::<Vec<i32>>(),
        ))?;
        claims.with_column(Column::new(
            CLAIM_START_DAY.into(),
            from_dates.iter().map(|d| d.day() as i32).collect::<Vec<i32>>(),
        ))?;

        let day_counts = numeric_column(&claims, UTILIZATION_DAY_COUNT)?;
        let bands: Vec<String> = day_counts
            .f64()?
            .iter()
            .map(|days| UtilizationBand::from_day_count(days).to_string())
            .collect();
        claims.with_column(day_counts)?;
        claims.with_column(Column::new(UTILIZATION_DAY_COUNT_GROUPED.into(), bands))?;

        for (source, target) in [
            (DRG_CODE, DRG_CODE_GROUPED),
            (PROVIDER_NUMBER, PROVIDER_NUMBER_GROUPED),
        ] {
            let values = text_column(&claims, source)?;
            let grouper = FrequencyGrouper::fit(&values, self.frequency_threshold);
            debug!(
                "Keeping {} frequent values of {}",
                grouper.kept_values().len(),
                source
            );
            claims.with_column(Column::new(target.into(), grouper.group_all(&values)))?;
        }

        for key in [BENEFICIARY_ID, SAMPLE_NUMBER, CLAIM_ID] {
            let as_text = text_column(&claims, key)?;
            claims.with_column(as_text.with_name(key.into()).into_series())?;
        }
        let payments = numeric_column(&claims, PAYMENT_AMOUNT)?;
        claims.with_column(payments)?;

        let mut core = claims.select(CORE_CLAIM_KEY_COLUMNS)?;
        for family in &self.families {
            debug!(
                "Collapsing {} columns: {:?}",
                family.name,
                family.resolve(&claims)
            );
            for collapsed in family.collapse(&claims)? {
                core.with_column(collapsed)?;
            }
        }

        info!("Built core claims table with shape {:?}", core.shape());
        Ok(core)
    }

    /// Drops every claim that lacks a start or an end date.
    fn drop_undated(claims: DataFrame) -> Result<DataFrame, TransformError> {
        let dated = &claims.column(CLAIM_FROM_DT)?.is_not_null()
            & &claims.column(CLAIM_THRU_DT)?.is_not_null();
        let filtered = claims.filter(&dated)?;
        debug!(
            "Dropped {} claims without start or end date",
            claims.height() - filtered.height()
        );
        Ok(filtered)
    }

    fn parse_claim_dates(
        claims: &DataFrame,
        column: &str,
    ) -> Result<Vec<NaiveDate>, TransformError> {
        text_column(claims, column)?
            .iter()
            .map(|raw| {
                let raw = raw.unwrap_or_default();
                parse_yyyymmdd(raw).ok_or_else(|| TransformError::InvalidClaimDate {
                    column: column.to_string(),
                    value: raw.to_string(),
                })
            })
            .collect()
    }
}
