pub mod crops;
pub mod extremes;
pub mod flood_risk;
pub mod temperature_bands;
