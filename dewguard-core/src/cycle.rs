//! Single heater cycle: fetch, decide, apply
//!
//! ```text
//! WeatherSource ──reading──▶ assess(reading, margin) ──assessment──▶ DecisionSink
//!      │                            │                                    │
//!      └── CycleError::Fetch        └── CycleError::InvalidInput         └── CycleError::Actuation
//! ```
//!
//! Every error is terminal for the cycle. A failed fetch never reaches the
//! decision engine, and nothing reaches the sink unless the decision
//! succeeded. There is no retry: the scheduler runs the next cycle.

use crate::{
    decision::{assess, HeaterAssessment, MarginConfig},
    errors::CycleError,
    traits::{DecisionSink, WeatherSource},
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

/// Run one cycle and return the assessment that was applied
pub fn run_cycle<S, K>(
    source: &mut S,
    sink: &mut K,
    margin: MarginConfig,
) -> Result<HeaterAssessment, CycleError<S::Error, K::Error>>
where
    S: WeatherSource,
    K: DecisionSink,
{
    let reading = source.fetch_reading().map_err(CycleError::Fetch)?;
    log_debug!(
        "Reading: {:.2}°C, {:.1}% RH",
        reading.temperature_c,
        reading.relative_humidity_pct
    );

    let assessment = assess(reading, margin)?;
    log_info!(
        "Dew point {:.2}°C, frost point {:.2}°C, threshold {:.2}°C -> heater {}",
        assessment.dew_point_c,
        assessment.frost_point_c,
        assessment.threshold_c(),
        if assessment.heat { "on" } else { "off" }
    );

    sink.apply(&assessment).map_err(CycleError::Actuation)?;
    Ok(assessment)
}
