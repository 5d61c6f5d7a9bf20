//! Constants for DewGuard Core
//!
//! Centralised, documented constants used by the calculator and the decision
//! engine. Always use these instead of magic numbers and include the unit in
//! the name.

/// Physical constants and empirical coefficients for dew and frost point.
pub mod physics;

/// Defaults for the heater cycle.
pub mod heater;

pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, ZERO_CELSIUS_IN_KELVIN,
    MAGNUS_A, MAGNUS_B,
    HUMIDITY_MIN_EXCLUSIVE_PCT, HUMIDITY_MAX_PCT,
};

pub use heater::{DEFAULT_TEMP_MARGIN_C, DEFAULT_FETCH_TIMEOUT_SECS};
