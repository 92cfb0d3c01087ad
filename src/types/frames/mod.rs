//! Typed wrappers around the polars frames produced by normalization.

pub mod flood_frame;
pub mod weather_frame;

use chrono::NaiveDate;
use polars::prelude::*;

/// Name of the date column every normalized frame starts with.
pub const DATE_COLUMN: &str = "date";

/// Builds a frame with a `date` column followed by nullable `f64` columns.
///
/// Callers are responsible for passing series of the same length as `dates`;
/// polars rejects mismatched heights.
pub(crate) fn build_daily_frame(
    dates: &[NaiveDate],
    columns: Vec<(&str, Vec<Option<f64>>)>,
) -> PolarsResult<DataFrame> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(columns.len() + 1);
    let date_series = DateChunked::from_naive_date(
        PlSmallStr::from_static(DATE_COLUMN),
        dates.iter().copied(),
    )
    .into_series();
    frame_columns.push(Column::from(date_series));
    for (name, values) in columns {
        frame_columns.push(Column::from(Series::new(name.into(), values)));
    }
    DataFrame::new(frame_columns)
}

pub(crate) fn f64_column<'a>(frame: &'a DataFrame, name: &str) -> Option<&'a Float64Chunked> {
    frame.column(name).ok()?.f64().ok()
}

pub(crate) fn date_values(frame: &DataFrame) -> Vec<Option<NaiveDate>> {
    frame
        .column(DATE_COLUMN)
        .ok()
        .and_then(|c| c.date().ok())
        .map(|dates| dates.as_date_iter().collect())
        .unwrap_or_default()
}

pub(crate) fn nullable_values(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
    f64_column(frame, name)
        .map(|ca| ca.into_iter().collect())
        .unwrap_or_else(|| vec![None; frame.height()])
}
