//! Contains the `WeatherFrame` structure holding normalized daily weather
//! (historical or forecast).

use crate::error::FarmcastError;
use crate::types::frames::{build_daily_frame, date_values, f64_column, nullable_values};
use chrono::NaiveDate;
use log::warn;
use polars::prelude::{ChunkAgg, DataFrame, Expr, IntoLazy};

pub const TMAX_COLUMN: &str = "tmax";
pub const TMIN_COLUMN: &str = "tmin";
pub const RAIN_COLUMN: &str = "rain";

/// One day of weather. Missing readings are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRow {
    pub date: NaiveDate,
    /// Maximum temperature in °C.
    pub tmax: Option<f64>,
    /// Minimum temperature in °C.
    pub tmin: Option<f64>,
    /// Precipitation sum in mm.
    pub rain: Option<f64>,
}

impl WeatherRow {
    pub fn new(date: NaiveDate, tmax: f64, tmin: f64, rain: f64) -> Self {
        Self {
            date,
            tmax: Some(tmax),
            tmin: Some(tmin),
            rain: Some(rain),
        }
    }
}

/// A wrapper around a polars `DataFrame` with columns `date`, `tmax`, `tmin`, `rain`.
///
/// Both the historical and the forecast fetch normalize into this shape; only the
/// window they cover differs. Aggregates skip null readings, the same way the
/// frame's own `mean`/`sum` do.
#[derive(Debug, Clone)]
pub struct WeatherFrame {
    /// The underlying frame, exposed for charting and ad hoc queries.
    pub frame: DataFrame,
}

impl WeatherFrame {
    /// Wraps a frame assumed to follow the weather schema.
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Builds a frame from already typed rows.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::DataFrame`] if polars fails to assemble the columns.
    pub fn from_rows(rows: &[WeatherRow]) -> Result<Self, FarmcastError> {
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let frame = build_daily_frame(
            &dates,
            vec![
                (TMAX_COLUMN, rows.iter().map(|r| r.tmax).collect()),
                (TMIN_COLUMN, rows.iter().map(|r| r.tmin).collect()),
                (RAIN_COLUMN, rows.iter().map(|r| r.rain).collect()),
            ],
        )?;
        Ok(Self::new(frame))
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Whether the frame carries the columns the classifier and report rely on.
    pub fn has_required_columns(&self) -> bool {
        f64_column(&self.frame, TMAX_COLUMN).is_some()
            && f64_column(&self.frame, RAIN_COLUMN).is_some()
    }

    /// Mean of the daily maximum temperature, in °C.
    pub fn mean_max_temperature(&self) -> Option<f64> {
        f64_column(&self.frame, TMAX_COLUMN)?.mean()
    }

    /// Mean of the daily precipitation sum, in mm.
    pub fn mean_rain(&self) -> Option<f64> {
        f64_column(&self.frame, RAIN_COLUMN)?.mean()
    }

    /// Precipitation summed over every day in the frame, in mm.
    pub fn total_rain(&self) -> Option<f64> {
        f64_column(&self.frame, RAIN_COLUMN)?.sum()
    }

    /// Counts the rows matching `predicate`.
    ///
    /// Evaluation errors (for example a predicate on a missing column) are logged
    /// and counted as zero matches.
    pub fn count_where(&self, predicate: Expr) -> usize {
        match self.frame.clone().lazy().filter(predicate).collect() {
            Ok(matching) => matching.height(),
            Err(e) => {
                warn!("Failed to evaluate weather predicate: {}", e);
                0
            }
        }
    }

    /// Copies the frame out into typed rows, in date order as stored.
    pub fn rows(&self) -> Vec<WeatherRow> {
        let tmax = nullable_values(&self.frame, TMAX_COLUMN);
        let tmin = nullable_values(&self.frame, TMIN_COLUMN);
        let rain = nullable_values(&self.frame, RAIN_COLUMN);
        date_values(&self.frame)
            .into_iter()
            .enumerate()
            .filter_map(|(i, date)| {
                Some(WeatherRow {
                    date: date?,
                    tmax: tmax.get(i).copied().flatten(),
                    tmin: tmin.get(i).copied().flatten(),
                    rain: rain.get(i).copied().flatten(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polars::prelude::{col, lit, DataType};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, d).unwrap()
    }

    fn sample() -> WeatherFrame {
        WeatherFrame::from_rows(&[
            WeatherRow::new(day(1), 30.0, 18.0, 2.0),
            WeatherRow {
                date: day(2),
                tmax: None,
                tmin: Some(17.0),
                rain: None,
            },
            WeatherRow::new(day(3), 36.0, 21.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_schema() {
        let weather = sample();
        let names: Vec<String> = weather
            .frame
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["date", "tmax", "tmin", "rain"]);
        assert_eq!(weather.frame.column("date").unwrap().dtype(), &DataType::Date);
        assert!(weather.has_required_columns());
    }

    #[test]
    fn test_aggregates_skip_nulls() {
        let weather = sample();
        assert_relative_eq!(weather.mean_max_temperature().unwrap(), 33.0);
        assert_relative_eq!(weather.mean_rain().unwrap(), 6.0);
        assert_relative_eq!(weather.total_rain().unwrap(), 12.0);
    }

    #[test]
    fn test_count_where() {
        let weather = sample();
        assert_eq!(weather.count_where(col("tmax").gt(lit(31.0))), 1);
        assert_eq!(weather.count_where(col("no_such_column").gt(lit(0.0))), 0);
    }

    #[test]
    fn test_rows_round_trip_nulls() {
        let weather = sample();
        let rows = weather.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].date, day(2));
        assert_eq!(rows[1].tmax, None);
        assert_eq!(rows[1].tmin, Some(17.0));
    }

    #[test]
    fn test_empty_frame() {
        let weather = WeatherFrame::from_rows(&[]).unwrap();
        assert!(weather.is_empty());
        assert_eq!(weather.mean_max_temperature(), None);
        assert!(weather.rows().is_empty());
    }
}
