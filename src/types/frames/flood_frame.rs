use crate::error::FarmcastError;
use crate::types::frames::{build_daily_frame, date_values, f64_column, nullable_values};
use chrono::NaiveDate;
use polars::prelude::{ChunkAgg, DataFrame};

pub const DISCHARGE_COLUMN: &str = "discharge";

/// One day of modelled river discharge, in m³/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloodRow {
    pub date: NaiveDate,
    pub discharge: Option<f64>,
}

/// A wrapper around a polars `DataFrame` with columns `date` and `discharge`.
///
/// Used for charting the discharge series; the flood-risk figures in the report
/// are computed from the raw payload so they survive a missing `time` array.
#[derive(Debug, Clone)]
pub struct FloodFrame {
    pub frame: DataFrame,
}

impl FloodFrame {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn from_rows(rows: &[FloodRow]) -> Result<Self, FarmcastError> {
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let frame = build_daily_frame(
            &dates,
            vec![(DISCHARGE_COLUMN, rows.iter().map(|r| r.discharge).collect())],
        )?;
        Ok(Self::new(frame))
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn max_discharge(&self) -> Option<f64> {
        f64_column(&self.frame, DISCHARGE_COLUMN)?.max()
    }

    pub fn rows(&self) -> Vec<FloodRow> {
        let discharge = nullable_values(&self.frame, DISCHARGE_COLUMN);
        date_values(&self.frame)
            .into_iter()
            .enumerate()
            .filter_map(|(i, date)| {
                Some(FloodRow {
                    date: date?,
                    discharge: discharge.get(i).copied().flatten(),
                })
            })
            .collect()
    }
}
