use crate::transform::error::TransformError;
use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame, DataType, StringChunked};

/// Fails with [`TransformError::MissingColumn`] for the first of `columns` not in `df`.
pub(crate) fn require_columns(
    df: &DataFrame,
    table: &str,
    columns: &[&str],
) -> Result<(), TransformError> {
    match columns.iter().find(|&&col| df.column(col).is_err()) {
        Some(missing) => Err(TransformError::MissingColumn {
            table: table.to_string(),
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}

/// The column rendered as text, whatever its stored type.
pub(crate) fn text_column(df: &DataFrame, name: &str) -> Result<StringChunked, TransformError> {
    let column = df.column(name)?;
    let text = match column.dtype() {
        DataType::String => column.clone(),
        _ => column.cast(&DataType::String)?,
    };
    Ok(text.str()?.clone())
}

/// The column as `f64`; values that are not numbers become null.
pub(crate) fn numeric_column(df: &DataFrame, name: &str) -> Result<Column, TransformError> {
    let column = df.column(name)?;
    let numeric = match column.dtype() {
        DataType::String => {
            let parsed: Vec<Option<f64>> = column
                .str()?
                .iter()
                .map(|value| value.and_then(|v| v.trim().parse::<f64>().ok()))
                .collect();
            Column::new(name.into(), parsed)
        }
        _ => column.cast(&DataType::Float64)?,
    };
    Ok(numeric)
}

/// The column as `i32` values, e.g. a derived year/month/day column.
pub(crate) fn int32_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>, TransformError> {
    let column = df.column(name)?.cast(&DataType::Int32)?;
    Ok(column.i32()?.iter().collect())
}

/// Builds a `Date` column from calendar dates.
pub(crate) fn date_column<I>(name: &str, dates: I) -> Result<Column, TransformError>
where
    I: IntoIterator<Item = Option<NaiveDate>>,
{
    let epoch_days: Vec<Option<i32>> = dates
        .into_iter()
        .map(|date| date.map(|d| d.to_epoch_days()))
        .collect();
    Ok(Column::new(name.into(), epoch_days).cast(&DataType::Date)?)
}
