use crate::transform::constants::{COLLAPSED_COUNTIES, COLLAPSED_STATES, COUNTY_CODE, STATE_CODE};
use crate::transform::error::TransformError;
use crate::transform::utils::text_column;
use crate::utils::distinct_sorted_join;
use polars::prelude::{Column, DataFrame, StringChunked};

/// How the member columns of a [`ColumnFamily`] are recognised by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMatch {
    Prefix(&'static str),
    Contains(&'static str),
}

impl ColumnMatch {
    pub fn matches(&self, column_name: &str) -> bool {
        match self {
            ColumnMatch::Prefix(prefix) => column_name.starts_with(prefix),
            ColumnMatch::Contains(part) => column_name.contains(part),
        }
    }
}

/// A group of sparse columns that is collapsed into a single text column per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFamily {
    pub name: &'static str,
    pub rule: ColumnMatch,
    pub output: &'static str,
    /// Output for the three-character-prefix variant, if the family has one.
    pub group_output: Option<&'static str>,
}

/// Number of leading characters kept for grouped codes.
pub const GROUP_PREFIX_LEN: usize = 3;

pub const CLAIM_COLUMN_FAMILIES: [ColumnFamily; 4] = [
    ColumnFamily {
        name: "icd9_dgns",
        rule: ColumnMatch::Prefix("icd9_dgns"),
        output: "collapsed_icd9_dgns",
        group_output: Some("collapsed_icd9_dgns_group"),
    },
    ColumnFamily {
        name: "icd9_prcdr",
        rule: ColumnMatch::Prefix("icd9_prcdr"),
        output: "collapsed_icd9_prcdr",
        group_output: Some("collapsed_icd9_prcdr_group"),
    },
    ColumnFamily {
        name: "hcpcs_cd",
        rule: ColumnMatch::Prefix("hcpcs_cd"),
        output: "collapsed_hcpcs_cd",
        group_output: None,
    },
    ColumnFamily {
        name: "physn_npi",
        rule: ColumnMatch::Contains("physn_npi"),
        output: "collapsed_physn_npi",
        group_output: None,
    },
];

/// Year-suffixed beneficiary location columns, collapsed across all years.
pub const LOCATION_COLUMN_FAMILIES: [ColumnFamily; 2] = [
    ColumnFamily {
        name: "states",
        rule: ColumnMatch::Prefix(STATE_CODE),
        output: COLLAPSED_STATES,
        group_output: None,
    },
    ColumnFamily {
        name: "counties",
        rule: ColumnMatch::Prefix(COUNTY_CODE),
        output: COLLAPSED_COUNTIES,
        group_output: None,
    },
];

impl ColumnFamily {
    /// The family's member columns present in `df`, in schema order.
    pub fn resolve(&self, df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .filter(|name| self.rule.matches(name.as_str()))
            .map(|name| name.to_string())
            .collect()
    }

    /// Collapses the family into its output columns: the verbatim values and, if
    /// configured, the three-character prefixes.
    pub fn collapse(&self, df: &DataFrame) -> Result<Vec<Column>, TransformError> {
        let members = self
            .resolve(df)
            .iter()
            .map(|name| text_column(df, name))
            .collect::<Result<Vec<StringChunked>, TransformError>>()?;

        let mut collapsed = vec![Column::new(
            self.output.into(),
            collapse_rows(&members, df.height(), None),
        )];
        if let Some(group_output) = self.group_output {
            collapsed.push(Column::new(
                group_output.into(),
                collapse_rows(&members, df.height(), Some(GROUP_PREFIX_LEN)),
            ));
        }
        Ok(collapsed)
    }
}

/// Per row, joins the distinct non-null values found across `members`.
///
/// With `prefix_len` set, each value is truncated to that many characters before
/// deduplication.
pub fn collapse_rows(
    members: &[StringChunked],
    height: usize,
    prefix_len: Option<usize>,
) -> Vec<String> {
    (0..height)
        .map(|row| {
            distinct_sorted_join(members.iter().filter_map(|member| member.get(row)).map(
                |value| match prefix_len {
                    Some(len) => value.chars().take(len).collect::<String>(),
                    None => value.to_string(),
                },
            ))
        })
        .collect()
}
