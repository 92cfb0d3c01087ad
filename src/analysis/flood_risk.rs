//! River discharge statistics and the flood-risk tier derived from them.

use crate::types::payload::DailyPayload;
use std::fmt;

/// Peak discharge (m³/s) above which flood risk is high.
pub const HIGH_RISK_DISCHARGE: f64 = 5000.0;
/// Peak discharge (m³/s) above which flood risk is moderate.
pub const MODERATE_RISK_DISCHARGE: f64 = 2000.0;

const DISCHARGE_FIELD: &str = "river_discharge";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloodRisk {
    High,
    Moderate,
    NoSignificant,
}

impl FloodRisk {
    /// Tiers are checked high to low and are mutually exclusive.
    pub fn from_max_discharge(max_discharge: f64) -> Self {
        if max_discharge > HIGH_RISK_DISCHARGE {
            FloodRisk::High
        } else if max_discharge > MODERATE_RISK_DISCHARGE {
            FloodRisk::Moderate
        } else {
            FloodRisk::NoSignificant
        }
    }

    /// The advisory line printed in the flood section of the report.
    pub fn message(&self) -> &'static str {
        match self {
            FloodRisk::High => {
                "⚠️ High flood risk detected → Take protective measures for crops & livestock."
            }
            FloodRisk::Moderate => "⚠️ Moderate flood risk → Ensure drainage systems are clear.",
            FloodRisk::NoSignificant => "✅ No significant flood risk detected.",
        }
    }
}

impl fmt::Display for FloodRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FloodRisk::High => "high risk",
            FloodRisk::Moderate => "moderate risk",
            FloodRisk::NoSignificant => "no significant risk",
        };
        write!(f, "{}", label)
    }
}

/// Average and peak of a discharge series, in m³/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DischargeStats {
    pub average: f64,
    pub maximum: f64,
}

impl DischargeStats {
    /// `None` for an empty series.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let average = values.iter().sum::<f64>() / values.len() as f64;
        let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self { average, maximum })
    }

    /// Reads `daily.river_discharge` straight from a payload; a `time` array is
    /// not required. `None` if the series is missing, empty, or has gaps.
    pub fn from_payload(payload: &DailyPayload) -> Option<Self> {
        Self::from_values(&payload.strict_series(DISCHARGE_FIELD)?)
    }

    pub fn risk(&self) -> FloodRisk {
        FloodRisk::from_max_discharge(self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_risk_labels() {
        assert_eq!(FloodRisk::High.to_string(), "high risk");
        assert_eq!(FloodRisk::NoSignificant.to_string(), "no significant risk");
    }

    #[test]
    fn test_tiers_at_boundaries() {
        assert_eq!(FloodRisk::from_max_discharge(5001.0), FloodRisk::High);
        assert_eq!(FloodRisk::from_max_discharge(5000.0), FloodRisk::Moderate);
        assert_eq!(FloodRisk::from_max_discharge(2001.0), FloodRisk::Moderate);
        assert_eq!(FloodRisk::from_max_discharge(2000.0), FloodRisk::NoSignificant);
        assert_eq!(FloodRisk::from_max_discharge(0.0), FloodRisk::NoSignificant);
    }

    #[test]
    fn test_stats_from_payload_without_time() {
        let payload = DailyPayload::from_daily(json!({"river_discharge": [100, 200, 5200]}));
        let stats = DischargeStats::from_payload(&payload).unwrap();
        assert_relative_eq!(stats.average, 1833.333, epsilon = 1e-3);
        assert_relative_eq!(stats.maximum, 5200.0);
        assert_eq!(stats.risk(), FloodRisk::High);
    }

    #[test]
    fn test_unusable_series() {
        let gaps = DailyPayload::from_daily(json!({"river_discharge": [100, null]}));
        assert_eq!(DischargeStats::from_payload(&gaps), None);

        let empty = DailyPayload::from_daily(json!({"river_discharge": []}));
        assert_eq!(DischargeStats::from_payload(&empty), None);

        let missing = DailyPayload::from_daily(json!({"time": ["2023-01-01"]}));
        assert_eq!(DischargeStats::from_payload(&missing), None);
    }
}
