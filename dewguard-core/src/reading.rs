//! Weather readings and camera location
//!
//! Both are plain values: produced once per cycle (the reading) or once at
//! startup (the location) and never mutated afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current ambient conditions at the camera site
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherReading {
    /// Air temperature in °C
    pub temperature_c: f64,
    /// Relative humidity in %, valid range (0, 100]
    pub relative_humidity_pct: f64,
}

impl WeatherReading {
    /// Create a reading from Celsius and percent
    pub fn new(temperature_c: f64, relative_humidity_pct: f64) -> Self {
        Self {
            temperature_c,
            relative_humidity_pct,
        }
    }
}

/// Geographic position of the camera in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Latitude, -90 (south) to 90 (north)
    pub latitude: f64,
    /// Longitude, -180 (west) to 180 (east)
    pub longitude: f64,
}

impl Location {
    /// Create a location, returning `None` if either coordinate is out of range
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let location = Self { latitude, longitude };
        location.is_valid().then_some(location)
    }

    /// Both coordinates finite and within their ranges
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
