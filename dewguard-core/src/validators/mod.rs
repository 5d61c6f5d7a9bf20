//! Input Validators for Weather Readings
//!
//! ## Overview
//!
//! The psychrometric formulas are only defined on part of the real line:
//!
//! - `ln(RH / 100)` needs RH > 0
//! - the frost point fit divides by the Kelvin temperature and takes its
//!   logarithm, so the air must be above absolute zero
//!
//! A weather provider can still hand us 0 % humidity (rounding of very dry
//! air) or garbage after a unit mix-up. These validators reject such readings
//! with a typed error before any formula runs, so NaN never reaches the
//! heater decision.
//!
//! ## Validation Layers
//!
//! ### 1. Finite Check
//! NaN and infinity are rejected first with [`PsychroError::InvalidValue`].
//!
//! ### 2. Range Check
//! - Humidity must lie in (0, 100] %
//! - Temperature must lie strictly above absolute zero
//!
//! ```rust
//! use dewguard_core::validators::{validate_humidity, validate_air_temperature};
//!
//! assert!(validate_humidity(100.0).is_ok());
//! assert!(validate_humidity(0.0).is_err());
//! assert!(validate_air_temperature(-273.15).is_err());
//! ```
//!
//! [`PsychroError::InvalidValue`]: crate::errors::PsychroError::InvalidValue

pub mod utils;

use crate::{
    constants::physics::{ABSOLUTE_ZERO_CELSIUS, HUMIDITY_MAX_PCT, HUMIDITY_MIN_EXCLUSIVE_PCT},
    errors::{PsychroError, PsychroResult},
};

/// Reject humidity outside (0, 100] %
pub fn validate_humidity(rh_percent: f64) -> PsychroResult<f64> {
    utils::ensure_finite(rh_percent)?;

    if utils::in_half_open_range(rh_percent, HUMIDITY_MIN_EXCLUSIVE_PCT, HUMIDITY_MAX_PCT) {
        Ok(rh_percent)
    } else {
        Err(PsychroError::InvalidHumidity { value: rh_percent })
    }
}

/// Reject temperatures at or below absolute zero
pub fn validate_air_temperature(temp_c: f64) -> PsychroResult<f64> {
    utils::ensure_finite(temp_c)?;

    if temp_c > ABSOLUTE_ZERO_CELSIUS {
        Ok(temp_c)
    } else {
        Err(PsychroError::BelowAbsoluteZero { value: temp_c })
    }
}
