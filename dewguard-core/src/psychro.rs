//! Psychrometric Calculator
//!
//! ## Physics Background
//!
//! ### Dew Point
//!
//! The dew point is the temperature to which air must be cooled, at constant
//! pressure and moisture content, to become saturated over liquid water. An
//! optical surface colder than the dew point collects condensation.
//!
//! We use the Magnus approximation:
//!
//! ```text
//! alpha     = A·T / (B + T) + ln(RH / 100)
//! dew point = B·alpha / (A - alpha)
//!
//! A = 17.27, B = 237.7 °C
//! ```
//!
//! At RH = 100 % the logarithm vanishes and the dew point equals the air
//! temperature. For any lower humidity it is strictly below.
//!
//! ### Frost Point
//!
//! Below 0 °C vapour deposits directly as ice, and the saturation pressure over
//! ice is lower than over water. The frost point is therefore slightly above
//! the dew point in freezing conditions. Working in Kelvin:
//!
//! ```text
//! T_frost = T_dew - T_air + 2671.02 / (2954.61 / T_air + 2.193665·ln(T_air) - 13.3448)
//! ```
//!
//! The denominator has its minimum (≈ 4.66) near 1347 K and stays positive for
//! every positive Kelvin temperature, so the only domain restriction is
//! `T_air > 0 K`.
//!
//! ## Numeric Guarantees
//!
//! All functions use `libm` so the results are identical with and without
//! `std`. Inputs outside the physical domain return a [`PsychroError`] and
//! non-finite intermediate results are reported as `*Undefined` errors, never
//! returned as NaN.
//!
//! ```rust
//! use dewguard_core::psychro::{dew_point_celsius, frost_point_celsius};
//!
//! let dew = dew_point_celsius(5.0, 95.0).unwrap();
//! let frost = frost_point_celsius(5.0, dew).unwrap();
//! assert!(frost < dew && dew < 5.0);
//! ```

use crate::{
    constants::physics::{
        FROST_LOG_COEFF, FROST_NUMERATOR_K, FROST_OFFSET, FROST_RECIPROCAL_COEFF_K, MAGNUS_A,
        MAGNUS_B, ZERO_CELSIUS_IN_KELVIN,
    },
    errors::{PsychroError, PsychroResult},
    validators::{self, utils},
};

/// Convert Kelvin to Celsius
#[inline]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - ZERO_CELSIUS_IN_KELVIN
}

/// Convert Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + ZERO_CELSIUS_IN_KELVIN
}

/// Dew point in °C from air temperature (°C) and relative humidity (%)
///
/// # Errors
///
/// - [`PsychroError::InvalidHumidity`] if `rel_humidity_pct` is not in (0, 100]
/// - [`PsychroError::InvalidValue`] if the temperature is NaN or infinite
/// - [`PsychroError::DewPointUndefined`] if `A - alpha` is zero or the result
///   is otherwise not finite
pub fn dew_point_celsius(t_air_c: f64, rel_humidity_pct: f64) -> PsychroResult<f64> {
    utils::ensure_finite(t_air_c)?;
    validators::validate_humidity(rel_humidity_pct)?;

    let undefined = PsychroError::DewPointUndefined {
        temperature_c: t_air_c,
        humidity_pct: rel_humidity_pct,
    };

    let alpha = (MAGNUS_A * t_air_c) / (MAGNUS_B + t_air_c) + libm::log(rel_humidity_pct / 100.0);
    let denominator = MAGNUS_A - alpha;
    if denominator == 0.0 || !alpha.is_finite() {
        return Err(undefined);
    }

    let dew_point = (MAGNUS_B * alpha) / denominator;
    if dew_point.is_finite() {
        Ok(dew_point)
    } else {
        Err(undefined)
    }
}

/// Frost point in °C from air temperature and dew point (both °C)
///
/// # Errors
///
/// - [`PsychroError::BelowAbsoluteZero`] if the air is at or below 0 K
/// - [`PsychroError::InvalidValue`] if either input is NaN or infinite
/// - [`PsychroError::FrostPointUndefined`] if the result is not finite
pub fn frost_point_celsius(t_air_c: f64, dew_point_c: f64) -> PsychroResult<f64> {
    validators::validate_air_temperature(t_air_c)?;
    utils::ensure_finite(dew_point_c)?;

    let dew_point_k = celsius_to_kelvin(dew_point_c);
    let t_air_k = celsius_to_kelvin(t_air_c);

    let denominator =
        FROST_RECIPROCAL_COEFF_K / t_air_k + FROST_LOG_COEFF * libm::log(t_air_k) - FROST_OFFSET;
    let frost_point_k = dew_point_k - t_air_k + FROST_NUMERATOR_K / denominator;

    let frost_point_c = kelvin_to_celsius(frost_point_k);
    if frost_point_c.is_finite() {
        Ok(frost_point_c)
    } else {
        Err(PsychroError::FrostPointUndefined {
            temperature_c: t_air_c,
            dew_point_c,
        })
    }
}
