//! Threshold-based extreme-event counting over a weather frame.

use crate::types::frames::weather_frame::{WeatherFrame, RAIN_COLUMN, TMAX_COLUMN};
use polars::prelude::{col, lit};
use serde::Serialize;

/// A day hotter than this maximum temperature (°C) is a heatwave day.
pub const HEATWAVE_TMAX_C: f64 = 40.0;
/// A day with less precipitation than this (mm) is drought-like.
pub const DROUGHT_RAIN_MM: f64 = 1.0;
/// A day with more precipitation than this (mm) is a heavy-rain day.
pub const HEAVY_RAIN_MM: f64 = 100.0;

/// Number of days in a frame that crossed each extreme-event threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtremeCounts {
    pub heatwave_days: usize,
    pub drought_days: usize,
    pub heavy_rain_days: usize,
}

/// Counts heatwave (`tmax > 40`), drought-like (`rain < 1`) and heavy-rain
/// (`rain > 100`) days. All thresholds are strict.
///
/// An absent or empty frame, or one without `tmax` and `rain` columns, gives
/// all-zero counts. Null readings never match.
pub fn classify(weather: Option<&WeatherFrame>) -> ExtremeCounts {
    let Some(weather) = weather else {
        return ExtremeCounts::default();
    };
    if weather.is_empty() || !weather.has_required_columns() {
        return ExtremeCounts::default();
    }

    ExtremeCounts {
        heatwave_days: weather.count_where(col(TMAX_COLUMN).gt(lit(HEATWAVE_TMAX_C))),
        drought_days: weather.count_where(col(RAIN_COLUMN).lt(lit(DROUGHT_RAIN_MM))),
        heavy_rain_days: weather.count_where(col(RAIN_COLUMN).gt(lit(HEAVY_RAIN_MM))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::frames::weather_frame::WeatherRow;
    use chrono::NaiveDate;

    fn frame(days: &[(f64, f64)]) -> WeatherFrame {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let rows: Vec<WeatherRow> = days
            .iter()
            .zip(start.iter_days())
            .map(|(&(tmax, rain), date)| WeatherRow::new(date, tmax, tmax - 12.0, rain))
            .collect();
        WeatherFrame::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_counts_match_predicates() {
        let weather = frame(&[(41.0, 0.5), (38.0, 120.0), (20.0, 2.0), (45.5, 0.0)]);
        assert_eq!(
            classify(Some(&weather)),
            ExtremeCounts {
                heatwave_days: 2,
                drought_days: 2,
                heavy_rain_days: 1,
            }
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let weather = frame(&[(40.0, 1.0), (40.0, 100.0)]);
        assert_eq!(classify(Some(&weather)), ExtremeCounts::default());
    }

    #[test]
    fn test_empty_and_absent_frames_give_zero() {
        assert_eq!(classify(None), ExtremeCounts::default());
        let empty = frame(&[]);
        assert_eq!(classify(Some(&empty)), ExtremeCounts::default());
    }

    #[test]
    fn test_nulls_never_match() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let weather = WeatherFrame::from_rows(&[WeatherRow {
            date,
            tmax: None,
            tmin: None,
            rain: None,
        }])
        .unwrap();
        assert_eq!(classify(Some(&weather)), ExtremeCounts::default());
    }
}
