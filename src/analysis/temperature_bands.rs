use crate::types::frames::weather_frame::WeatherFrame;
use serde::Serialize;

/// Maximum-temperature band, right-inclusive: (-5, 20], (20, 30], (30, 40], (40, 50].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperatureBand {
    Cool,
    Moderate,
    Hot,
    Extreme,
}

const BANDS: [(TemperatureBand, f64, f64); 4] = [
    (TemperatureBand::Cool, -5.0, 20.0),
    (TemperatureBand::Moderate, 20.0, 30.0),
    (TemperatureBand::Hot, 30.0, 40.0),
    (TemperatureBand::Extreme, 40.0, 50.0),
];

impl TemperatureBand {
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureBand::Cool => "Cool (<20°C)",
            TemperatureBand::Moderate => "Moderate (20-30°C)",
            TemperatureBand::Hot => "Hot (30-40°C)",
            TemperatureBand::Extreme => "Extreme (>40°C)",
        }
    }

    /// `None` for temperatures outside (-5, 50].
    pub fn of(tmax: f64) -> Option<Self> {
        BANDS
            .iter()
            .find(|(_, low, high)| tmax > *low && tmax <= *high)
            .map(|(band, _, _)| *band)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub band: TemperatureBand,
    pub days: usize,
}

/// Days per band, in band order, zero-count bands included.
pub fn temperature_bands(weather: &WeatherFrame) -> Vec<BandCount> {
    let mut counts: Vec<BandCount> = BANDS
        .iter()
        .map(|(band, _, _)| BandCount {
            band: *band,
            days: 0,
        })
        .collect();
    for tmax in weather.rows().into_iter().filter_map(|row| row.tmax) {
        if let Some(band) = TemperatureBand::of(tmax) {
            if let Some(count) = counts.iter_mut().find(|c| c.band == band) {
                count.days += 1;
            }
        }
    }
    counts
}
