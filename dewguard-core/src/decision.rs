//! Heater Decision Engine
//!
//! ## Rule
//!
//! The heater turns on when the air temperature, lowered by a safety margin,
//! falls below either the dew point or the frost point:
//!
//! ```text
//! threshold = T_air - margin
//! heat      = threshold < dew_point  ||  threshold < frost_point
//! ```
//!
//! Either condition alone is enough. Above freezing the dew point is the
//! higher of the two; below freezing the frost point is.
//!
//! ## Margin
//!
//! The dome cools below ambient by radiating to a clear sky, and the weather
//! station is not at the camera. The margin starts heating before
//! condensation is actually expected. A larger margin can only turn a
//! "heater off" decision into "heater on", never the reverse.
//!
//! ## No Hysteresis
//!
//! Every cycle decides from scratch. Near the threshold the output may toggle
//! between consecutive runs; this is accepted behaviour.
//!
//! ```rust
//! use dewguard_core::should_heat;
//!
//! // 20°C / 50% RH: dew point ≈ 9.3°C, far below 18°C
//! assert_eq!(should_heat(20.0, 50.0, 2.0), Ok(false));
//!
//! // 5°C / 95% RH: dew point ≈ 4.3°C, above 3°C
//! assert_eq!(should_heat(5.0, 95.0, 2.0), Ok(true));
//! ```

use crate::{
    constants::heater::DEFAULT_TEMP_MARGIN_C,
    errors::PsychroResult,
    psychro::{dew_point_celsius, frost_point_celsius},
    reading::WeatherReading,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Safety margin applied to the air temperature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarginConfig {
    /// Margin in °C, subtracted from the air temperature
    pub temperature_margin_c: f64,
}

impl MarginConfig {
    /// Create a margin of `temperature_margin_c` degrees
    pub fn new(temperature_margin_c: f64) -> Self {
        Self { temperature_margin_c }
    }
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEMP_MARGIN_C)
    }
}

/// Outcome of one decision, with the values that led to it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeaterAssessment {
    /// Reading the decision was made from
    pub reading: WeatherReading,
    /// Margin in °C
    pub margin_c: f64,
    /// Dew point in °C
    pub dew_point_c: f64,
    /// Frost point in °C
    pub frost_point_c: f64,
    /// `true` = heater on
    pub heat: bool,
}

impl HeaterAssessment {
    /// Air temperature minus margin, the value compared to dew and frost point
    pub fn threshold_c(&self) -> f64 {
        self.reading.temperature_c - self.margin_c
    }

    /// Which point triggered heating, if any
    pub fn trigger(&self) -> Option<Trigger> {
        let threshold = self.threshold_c();
        if threshold < self.dew_point_c {
            Some(Trigger::DewPoint)
        } else if threshold < self.frost_point_c {
            Some(Trigger::FrostPoint)
        } else {
            None
        }
    }
}

/// Condition that switched the heater on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Threshold below the dew point
    DewPoint,
    /// Threshold below the frost point (and not the dew point)
    FrostPoint,
}

/// Evaluate a reading against the margin
///
/// Calculator errors are returned unchanged.
pub fn assess(reading: WeatherReading, margin: MarginConfig) -> PsychroResult<HeaterAssessment> {
    let dew_point_c = dew_point_celsius(reading.temperature_c, reading.relative_humidity_pct)?;
    let frost_point_c = frost_point_celsius(reading.temperature_c, dew_point_c)?;

    let threshold = reading.temperature_c - margin.temperature_margin_c;
    let heat = threshold < dew_point_c || threshold < frost_point_c;

    Ok(HeaterAssessment {
        reading,
        margin_c: margin.temperature_margin_c,
        dew_point_c,
        frost_point_c,
        heat,
    })
}

/// Should the heater be on at this temperature (°C), humidity (%) and margin (°C)?
pub fn should_heat(temp_c: f64, rel_humidity_pct: f64, margin_c: f64) -> PsychroResult<bool> {
    assess(
        WeatherReading::new(temp_c, rel_humidity_pct),
        MarginConfig::new(margin_c),
    )
    .map(|assessment| assessment.heat)
}
