//! One function per report section. Each returns `None` when its gate is closed.

use crate::analysis::crops::recommend_for;
use crate::analysis::extremes::ExtremeCounts;
use crate::analysis::flood_risk::DischargeStats;
use crate::report::{ReportSection, SectionKind};
use crate::types::date_range::DateRange;
use crate::types::frames::weather_frame::WeatherFrame;
use crate::types::payload::DailyPayload;

/// More drought-like days than this triggers irrigation advice.
pub const IRRIGATION_ADVICE_DROUGHT_DAYS: usize = 10;
/// More heatwave days than this triggers heat-tolerant seed advice.
pub const HEAT_ADVICE_HEATWAVE_DAYS: usize = 3;
/// More heavy-rain days than this triggers drainage advice.
pub const DRAINAGE_ADVICE_HEAVY_RAIN_DAYS: usize = 2;

fn one_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}", v))
}

fn non_empty(weather: Option<&WeatherFrame>) -> Option<&WeatherFrame> {
    weather.filter(|w| !w.is_empty())
}

pub fn header(region: &str, date_range: DateRange) -> ReportSection {
    ReportSection::new(
        SectionKind::Header,
        vec![
            "🌾 **Farmer Support Report**".to_string(),
            format!("**Region:** {}", region),
            format!("**Period:** {}", date_range),
        ],
    )
    .spaced()
}

pub fn historical_summary(historical: Option<&WeatherFrame>) -> Option<ReportSection> {
    let historical = non_empty(historical)?;
    Some(
        ReportSection::new(
            SectionKind::HistoricalSummary,
            vec![
                "📊 **Weather Summary (History):**".to_string(),
                format!(
                    "- Avg Temp: {} °C",
                    one_decimal(historical.mean_max_temperature())
                ),
                format!(
                    "- Total Rainfall: {} mm",
                    one_decimal(historical.total_rain())
                ),
            ],
        )
        .spaced(),
    )
}

pub fn forecast_summary(forecast: Option<&WeatherFrame>, days: u32) -> Option<ReportSection> {
    let forecast = non_empty(forecast)?;
    Some(
        ReportSection::new(
            SectionKind::ForecastSummary,
            vec![
                format!("🔮 **Forecast (Next {} days):**", days),
                format!(
                    "- Expected Avg Temp: {} °C",
                    one_decimal(forecast.mean_max_temperature())
                ),
                format!(
                    "- Expected Rainfall: {} mm",
                    one_decimal(forecast.total_rain())
                ),
            ],
        )
        .spaced(),
    )
}

pub fn extreme_events(extremes: ExtremeCounts) -> ReportSection {
    ReportSection::new(
        SectionKind::ExtremeEvents,
        vec![
            "⚠️ **Extreme Events Detected:**".to_string(),
            format!("- Heatwave days: {}", extremes.heatwave_days),
            format!("- Drought-like days: {}", extremes.drought_days),
            format!("- Heavy rain days: {}", extremes.heavy_rain_days),
        ],
    )
    .spaced()
}

/// Omitted without a `daily` container; a container whose discharge series
/// cannot be read collapses to a single "Data unavailable" line.
pub fn flood_risk(flood: Option<&DailyPayload>) -> Option<ReportSection> {
    let flood = flood.filter(|payload| payload.has_daily())?;
    let lines = match DischargeStats::from_payload(flood) {
        Some(stats) => vec![
            "🌊 **Flood Risk Report:**".to_string(),
            format!("- Avg River Discharge: {:.1} m³/s", stats.average),
            format!("- Max River Discharge: {:.1} m³/s", stats.maximum),
            stats.risk().message().to_string(),
        ],
        None => vec!["🌊 Flood Risk Report: Data unavailable.".to_string()],
    };
    Some(ReportSection::new(SectionKind::FloodRisk, lines).spaced())
}

pub fn crop_recommendation(historical: Option<&WeatherFrame>) -> Option<ReportSection> {
    let crop = recommend_for(historical)?;
    Some(ReportSection::new(
        SectionKind::CropRecommendation,
        vec![format!(
            "✅ **Crop Recommendation:** Grow **{}** this season.",
            crop
        )],
    ))
}

pub fn advisory(extremes: ExtremeCounts) -> Option<ReportSection> {
    let mut notes = Vec::new();
    if extremes.drought_days > IRRIGATION_ADVICE_DROUGHT_DAYS {
        notes.push("💡 Advice: Long dry spell detected → Plan irrigation.".to_string());
    }
    if extremes.heatwave_days > HEAT_ADVICE_HEATWAVE_DAYS {
        notes.push("💡 Advice: Heat stress risk → Use heat-tolerant seeds.".to_string());
    }
    if extremes.heavy_rain_days > DRAINAGE_ADVICE_HEAVY_RAIN_DAYS {
        notes.push("💡 Advice: Risk of waterlogging → Ensure drainage.".to_string());
    }
    if notes.is_empty() {
        return None;
    }
    Some(ReportSection::new(SectionKind::Advisory, notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::frames::weather_frame::WeatherRow;
    use chrono::NaiveDate;
    use serde_json::json;

    fn weather(days: &[(f64, f64)]) -> WeatherFrame {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let rows: Vec<WeatherRow> = days
            .iter()
            .zip(start.iter_days())
            .map(|(&(tmax, rain), date)| WeatherRow::new(date, tmax, tmax - 10.0, rain))
            .collect();
        WeatherFrame::from_rows(&rows).unwrap()
    }

    fn flood_lines(discharge: serde_json::Value) -> Vec<String> {
        let payload = DailyPayload::from_daily(json!({ "river_discharge": discharge }));
        flood_risk(Some(&payload)).unwrap().lines
    }

    #[test]
    fn test_historical_summary_rounds_to_one_decimal() {
        let section = historical_summary(Some(&weather(&[(30.04, 1.2), (31.0, 2.5)]))).unwrap();
        assert_eq!(section.lines[1], "- Avg Temp: 30.5 °C");
        assert_eq!(section.lines[2], "- Total Rainfall: 3.7 mm");
    }

    #[test]
    fn test_empty_tables_omit_summaries() {
        let empty = weather(&[]);
        assert!(historical_summary(Some(&empty)).is_none());
        assert!(forecast_summary(None, 14).is_none());
        assert!(crop_recommendation(Some(&empty)).is_none());
    }

    #[test]
    fn test_forecast_header_uses_horizon() {
        let section = forecast_summary(Some(&weather(&[(25.0, 0.0)])), 14).unwrap();
        assert_eq!(section.lines[0], "🔮 **Forecast (Next 14 days):**");
    }

    #[test]
    fn test_flood_tiers() {
        assert!(flood_lines(json!([100, 200, 5200]))[3].contains("High flood risk"));
        assert!(flood_lines(json!([5000]))[3].contains("Moderate flood risk"));
        assert!(flood_lines(json!([2001]))[3].contains("Moderate flood risk"));
        assert!(flood_lines(json!([2000]))[3].contains("No significant flood risk"));
        assert!(flood_lines(json!([0]))[3].contains("No significant flood risk"));
    }

    #[test]
    fn test_flood_stats_lines() {
        let lines = flood_lines(json!([100, 200, 5200]));
        assert_eq!(lines[1], "- Avg River Discharge: 1833.3 m³/s");
        assert_eq!(lines[2], "- Max River Discharge: 5200.0 m³/s");
    }

    #[test]
    fn test_flood_degrades_or_omits() {
        assert_eq!(
            flood_lines(json!("not a series")),
            vec!["🌊 Flood Risk Report: Data unavailable."]
        );
        assert!(flood_risk(None).is_none());
        assert!(flood_risk(Some(&DailyPayload::default())).is_none());
    }

    #[test]
    fn test_null_daily_reports_unavailable() {
        let payload: DailyPayload = serde_json::from_value(json!({"daily": null})).unwrap();
        assert_eq!(
            flood_risk(Some(&payload)).unwrap().lines,
            vec!["🌊 Flood Risk Report: Data unavailable."]
        );
    }

    #[test]
    fn test_crop_line() {
        let section = crop_recommendation(Some(&weather(&[(30.0, 8.0)]))).unwrap();
        assert_eq!(
            section.lines,
            vec!["✅ **Crop Recommendation:** Grow **Rice** this season."]
        );
    }

    #[test]
    fn test_advice_gates_are_strict() {
        let at_limits = ExtremeCounts {
            heatwave_days: 3,
            drought_days: 10,
            heavy_rain_days: 2,
        };
        assert!(advisory(at_limits).is_none());

        let only_heat = ExtremeCounts {
            heatwave_days: 4,
            ..ExtremeCounts::default()
        };
        let section = advisory(only_heat).unwrap();
        assert_eq!(section.lines.len(), 1);
        assert!(section.lines[0].contains("heat-tolerant"));
    }
}
