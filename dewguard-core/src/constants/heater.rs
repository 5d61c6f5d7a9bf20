//! Heater Cycle Defaults
//!
//! Values used when the configuration leaves a setting out.

/// Default safety margin subtracted from air temperature (°C).
///
/// Two degrees covers the lag between the weather station and the dome and
/// the time the heater needs to warm the optics.
pub const DEFAULT_TEMP_MARGIN_C: f64 = 2.0;

/// Default upper bound on a single weather fetch (seconds).
///
/// The cycle runs from a scheduler; a hung request must not block the next
/// invocation.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
