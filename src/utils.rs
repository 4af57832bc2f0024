use polars::prelude::{Column, DataFrame, DataType, IntoLazy, PolarsResult, UniqueKeepStrategy};
use std::collections::BTreeSet;

/// Renames every column of `df` to its lowercase form.
pub(crate) fn lowercase_column_names(df: &mut DataFrame) -> PolarsResult<()> {
    let lowercase_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    df.set_column_names(lowercase_names)
}

/// Stacks `frames` vertically, matching columns by name.
///
/// The result holds the union of all columns in order of first appearance. Columns a
/// frame lacks are filled with nulls of the type the column first appeared with.
pub(crate) fn concat_aligned(frames: Vec<DataFrame>) -> PolarsResult<DataFrame> {
    let mut union: Vec<(String, DataType)> = Vec::new();
    for frame in &frames {
        for column in frame.get_columns() {
            if !union.iter().any(|(name, _)| name == column.name().as_str()) {
                union.push((column.name().to_string(), column.dtype().clone()));
            }
        }
    }

    let mut stacked: Option<DataFrame> = None;
    for mut frame in frames {
        let height = frame.height();
        for (name, dtype) in &union {
            if frame.column(name).is_err() {
                frame.with_column(Column::full_null(name.as_str().into(), height, dtype))?;
            }
        }
        let mut frame = frame.select(union.iter().map(|(name, _)| name.as_str()))?;
        for (name, dtype) in &union {
            if frame.column(name)?.dtype() != dtype {
                let casted = frame.column(name)?.cast(dtype)?;
                frame.with_column(casted)?;
            }
        }
        stacked = Some(match stacked {
            None => frame,
            Some(acc) => acc.vstack(&frame)?,
        });
    }

    Ok(stacked.unwrap_or_default())
}

/// Drops duplicate rows, keeping the first occurrence and the original row order.
pub(crate) fn drop_duplicates(df: DataFrame) -> PolarsResult<DataFrame> {
    df.lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()
}

/// Joins the distinct values with a single space, in ascending order.
pub(crate) fn distinct_sorted_join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect::<Vec<String>>()
        .join(" ")
}
