//! Error Types for Dew Heater Decisions
//!
//! ## Design Philosophy
//!
//! The core error type follows the same rules as the rest of the embedded
//! friendly code in this crate:
//!
//! 1. **Small Size**: variants only carry the offending `f64`, so the enum
//!    stays at 24 bytes and can be returned by value from the hot path.
//!
//! 2. **No Heap Allocation**: messages are `&'static str` or formatted lazily
//!    through `Display`.
//!
//! 3. **Copy Semantics**: `PsychroError` is `Copy`, so the decision engine can
//!    hand it back to the caller without cloning.
//!
//! ## Error Categories
//!
//! ### Invalid Input
//! - `InvalidHumidity`: relative humidity outside (0, 100] %. The Magnus
//!   formula takes `ln(RH / 100)`, which is undefined at or below zero.
//! - `BelowAbsoluteZero`: air temperature at or below 0 K. The frost point
//!   formula divides by and takes the logarithm of the Kelvin temperature.
//! - `InvalidValue`: NaN or infinity anywhere in the inputs.
//!
//! ### Degenerate Results
//! - `DewPointUndefined` / `FrostPointUndefined`: the formula blew up for an
//!   input that passed range checks (e.g. `A - alpha == 0` for air colder than
//!   -237.7 °C). These are reported instead of letting NaN or infinity reach
//!   the comparison.
//!
//! ### Cycle Errors
//! [`CycleError`] wraps the three terminal outcomes of a heater cycle: the
//! weather fetch failed, the reading was physically invalid, or the output pin
//! could not be driven. The fetch and actuation variants carry whatever error
//! type the connector uses.
//!
//! ```rust
//! use dewguard_core::{dew_point_celsius, PsychroError};
//!
//! match dew_point_celsius(20.0, 0.0) {
//!     Err(PsychroError::InvalidHumidity { value }) => assert_eq!(value, 0.0),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for psychrometric calculations
pub type PsychroResult<T> = Result<T, PsychroError>;

/// Invalid-input errors raised by the calculator
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PsychroError {
    /// Relative humidity outside (0, 100] %
    #[error("Invalid humidity {value}%: must be in (0, 100]")]
    InvalidHumidity {
        /// Humidity that was passed in
        value: f64,
    },

    /// Air temperature at or below absolute zero
    #[error("Invalid temperature {value}°C: at or below absolute zero")]
    BelowAbsoluteZero {
        /// Temperature that was passed in, in Celsius
        value: f64,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Magnus formula has no finite solution for this input
    #[error("Dew point undefined at {temperature_c}°C / {humidity_pct}%")]
    DewPointUndefined {
        /// Air temperature in Celsius
        temperature_c: f64,
        /// Relative humidity in percent
        humidity_pct: f64,
    },

    /// Frost point formula has no finite solution for this input
    #[error("Frost point undefined at {temperature_c}°C (dew point {dew_point_c}°C)")]
    FrostPointUndefined {
        /// Air temperature in Celsius
        temperature_c: f64,
        /// Dew point in Celsius
        dew_point_c: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for PsychroError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidHumidity { value } =>
                defmt::write!(fmt, "Humidity {}% outside (0, 100]", value),
            Self::BelowAbsoluteZero { value } =>
                defmt::write!(fmt, "Temperature {}C below absolute zero", value),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::DewPointUndefined { temperature_c, humidity_pct } =>
                defmt::write!(fmt, "Dew point undefined at {}C/{}%", temperature_c, humidity_pct),
            Self::FrostPointUndefined { temperature_c, dew_point_c } =>
                defmt::write!(fmt, "Frost point undefined at {}C/{}C", temperature_c, dew_point_c),
        }
    }
}

/// Terminal outcome of a failed heater cycle
///
/// `F` is the weather source error, `A` the decision sink error.
#[derive(Debug)]
pub enum CycleError<F, A> {
    /// Weather could not be fetched; nothing was decided or actuated
    Fetch(F),
    /// Reading was rejected by the calculator; nothing was actuated
    InvalidInput(PsychroError),
    /// Decision could not be applied
    Actuation(A),
}

impl<F, A> CycleError<F, A> {
    /// Short category name, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::InvalidInput(_) => "invalid input",
            Self::Actuation(_) => "actuation",
        }
    }
}

impl<F, A> From<PsychroError> for CycleError<F, A> {
    fn from(err: PsychroError) -> Self {
        Self::InvalidInput(err)
    }
}

impl<F: fmt::Display, A: fmt::Display> fmt::Display for CycleError<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Weather fetch failed: {e}"),
            Self::InvalidInput(e) => write!(f, "Invalid weather reading: {e}"),
            Self::Actuation(e) => write!(f, "Heater actuation failed: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl<F, A> std::error::Error for CycleError<F, A>
where
    F: std::error::Error + 'static,
    A: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::InvalidInput(e) => Some(e),
            Self::Actuation(e) => Some(e),
        }
    }
}
