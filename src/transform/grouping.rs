use crate::transform::constants::OTHER_CATEGORY;
use polars::prelude::StringChunked;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strum_macros::{AsRefStr, Display, EnumIter};

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("non-alphanumeric regex is valid"));

/// Length-of-stay band of a claim's utilization day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
pub enum UtilizationBand {
    #[strum(serialize = "0-3 days")]
    UpToThreeDays,
    #[strum(serialize = "4-7 days")]
    FourToSevenDays,
    #[strum(serialize = "over 7 days")]
    OverSevenDays,
    #[strum(serialize = "Other")]
    Other,
}

impl UtilizationBand {
    pub fn from_day_count(days: Option<f64>) -> Self {
        match days {
            Some(d) if d <= 3.0 => UtilizationBand::UpToThreeDays,
            Some(d) if d > 3.0 && d <= 7.0 => UtilizationBand::FourToSevenDays,
            Some(d) if d > 7.0 => UtilizationBand::OverSevenDays,
            _ => UtilizationBand::Other,
        }
    }
}

/// Keeps the frequent values of a high-cardinality code column and folds the rest
/// into [`OTHER_CATEGORY`].
///
/// A value is kept if it occurs strictly more often than `threshold` in the column
/// it was fitted on. Kept values are normalised by dropping every character outside
/// `[A-Za-z0-9]` and lowercasing. Nulls always map to [`OTHER_CATEGORY`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrouper {
    keep: HashSet<String>,
}

impl FrequencyGrouper {
    pub fn fit(values: &StringChunked, threshold: usize) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in values.iter().flatten() {
            *counts.entry(value).or_default() += 1;
        }

        let keep = counts
            .into_iter()
            .filter(|(_, count)| *count > threshold)
            .map(|(value, _)| value.to_string())
            .collect();
        FrequencyGrouper { keep }
    }

    pub fn kept_values(&self) -> &HashSet<String> {
        &self.keep
    }

    pub fn group(&self, value: Option<&str>) -> String {
        match value {
            Some(v) if self.keep.contains(v) => NON_ALPHANUMERIC.replace_all(v, "").to_lowercase(),
            _ => OTHER_CATEGORY.to_string(),
        }
    }

    pub fn group_all(&self, values: &StringChunked) -> Vec<String> {
        values.iter().map(|value| self.group(value)).collect()
    }
}
