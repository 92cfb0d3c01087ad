//! Assembles the farmer advisory report from the analysis products.
//!
//! The report is a fixed sequence of sections. Each section comes from a pure
//! function in [`sections`] and is either present, absent, or degraded to a
//! "data unavailable" line; no single section can fail the whole report.

pub mod sections;

use crate::analysis::extremes::ExtremeCounts;
use crate::config::DEFAULT_FORECAST_DAYS;
use crate::types::date_range::DateRange;
use crate::types::frames::weather_frame::WeatherFrame;
use crate::types::payload::DailyPayload;
use bon::bon;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    HistoricalSummary,
    ForecastSummary,
    ExtremeEvents,
    FloodRisk,
    CropRecommendation,
    Advisory,
}

/// A titled block of report lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub lines: Vec<String>,
    /// Render a blank line after this section.
    pub spaced: bool,
}

impl ReportSection {
    pub(crate) fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            lines,
            spaced: false,
        }
    }

    pub(crate) fn spaced(mut self) -> Self {
        self.spaced = true;
        self
    }
}

/// An ordered sequence of report sections.
///
/// `Display` renders every line separated by newlines, in Markdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

#[bon]
impl Report {
    /// Builds the report. Sections are emitted in a fixed order:
    ///
    /// 1. header (always)
    /// 2. historical summary (when `historical` has rows)
    /// 3. forecast summary (when `forecast` has rows)
    /// 4. extreme events (always)
    /// 5. flood risk (when `flood` has a `daily` container)
    /// 6. crop recommendation (when `historical` has rows)
    /// 7. advice notes (when any threshold is crossed)
    ///
    /// # Examples
    ///
    /// ```
    /// use farmcast::{DateRange, ExtremeCounts, Report, SectionKind};
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
    /// ).unwrap();
    ///
    /// let report = Report::generate()
    ///     .region("My Farm")
    ///     .date_range(range)
    ///     .extremes(ExtremeCounts::default())
    ///     .call();
    ///
    /// assert!(report.section(SectionKind::Header).is_some());
    /// assert!(report.section(SectionKind::CropRecommendation).is_none());
    /// ```
    #[builder]
    pub fn generate(
        region: &str,
        date_range: DateRange,
        historical: Option<&WeatherFrame>,
        forecast: Option<&WeatherFrame>,
        extremes: ExtremeCounts,
        flood: Option<&DailyPayload>,
        forecast_days: Option<u32>,
    ) -> Report {
        let forecast_days = forecast_days.unwrap_or(DEFAULT_FORECAST_DAYS);
        let sections = [
            Some(sections::header(region, date_range)),
            sections::historical_summary(historical),
            sections::forecast_summary(forecast, forecast_days),
            Some(sections::extreme_events(extremes)),
            sections::flood_risk(flood),
            sections::crop_recommendation(historical),
            sections::advisory(extremes),
        ];
        Report {
            sections: sections.into_iter().flatten().collect(),
        }
    }
}

impl Report {
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Every line of every section, in order, without spacing.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter().map(String::as_str))
    }

    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<&str> = Vec::new();
        for section in &self.sections {
            rendered.extend(section.lines.iter().map(String::as_str));
            if section.spaced {
                rendered.push("");
            }
        }
        write!(f, "{}", rendered.join("\n"))
    }
}
