//! Climate-based crop recommendation.

use crate::types::frames::weather_frame::WeatherFrame;
use serde::Serialize;
use std::fmt;

/// Mean daily rain (mm) a season must exceed to suit rice.
pub const RICE_MEAN_RAIN_MM: f64 = 5.0;
/// Mean daily maximum temperature (°C) a season must exceed to suit rice.
pub const RICE_MEAN_TMAX_C: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Crop {
    Rice,
    Maize,
    Sugarcane,
    Wheat,
    Barley,
    Pulses,
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Sugarcane => "Sugarcane",
            Crop::Wheat => "Wheat",
            Crop::Barley => "Barley",
            Crop::Pulses => "Pulses",
        };
        write!(f, "{}", name)
    }
}

/// Rice when the season is both wet (`mean rain > 5`) and warm (`mean tmax > 25`),
/// wheat otherwise. An unknown mean counts as not exceeding its threshold.
pub fn recommend_crop(mean_rain: Option<f64>, mean_tmax: Option<f64>) -> Crop {
    let wet = mean_rain.is_some_and(|rain| rain > RICE_MEAN_RAIN_MM);
    let warm = mean_tmax.is_some_and(|tmax| tmax > RICE_MEAN_TMAX_C);
    if wet && warm {
        Crop::Rice
    } else {
        Crop::Wheat
    }
}

/// Recommendation for a historical frame; `None` when there is no data.
pub fn recommend_for(weather: Option<&WeatherFrame>) -> Option<Crop> {
    let weather = weather.filter(|w| !w.is_empty())?;
    Some(recommend_crop(
        weather.mean_rain(),
        weather.mean_max_temperature(),
    ))
}

/// Relative suitability of a crop, in percent of the climate's crop mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropShare {
    pub crop: Crop,
    pub suitability: u8,
}

/// The crop mix shown alongside the recommendation, led by the recommended crop.
pub fn crop_suitability(weather: Option<&WeatherFrame>) -> Option<Vec<CropShare>> {
    let shares: &[(Crop, u8)] = match recommend_for(weather)? {
        Crop::Rice => &[(Crop::Rice, 50), (Crop::Maize, 30), (Crop::Sugarcane, 20)],
        _ => &[(Crop::Wheat, 60), (Crop::Barley, 25), (Crop::Pulses, 15)],
    };
    Some(
        shares
            .iter()
            .map(|&(crop, suitability)| CropShare { crop, suitability })
            .collect(),
    )
}
