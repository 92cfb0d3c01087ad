//! Geographical coordinates for a farm or region.

use crate::error::FarmcastError;
use std::fmt;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`. The pair is
/// immutable once constructed, so every request built from it uses the same point.
///
/// # Examples
///
/// ```
/// use farmcast::Coordinates;
///
/// let delhi = Coordinates::new(28.6139, 77.2090).unwrap();
/// assert_eq!(delhi.latitude(), 28.6139);
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a new `Coordinates` value.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::InvalidCoordinates`] if either value is out of range or NaN.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, FarmcastError> {
        let lat_ok = (-90.0..=90.0).contains(&latitude);
        let lon_ok = (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(FarmcastError::InvalidCoordinates {
                lat: latitude,
                lon: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
