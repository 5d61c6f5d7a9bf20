//! Core decision engine for DewGuard
//!
//! Decides whether an all-sky camera dew heater should be on, from the
//! current air temperature and relative humidity. Pure functions only: the
//! weather provider and the relay pin sit behind the traits in [`traits`].
//!
//! Key constraints:
//! - No heap allocation, `no_std` capable (math via `libm`)
//! - Stateless: every cycle decides from scratch
//! - Invalid inputs are typed errors, never NaN
//!
//! ```no_run
//! use dewguard_core::{assess, MarginConfig, WeatherReading};
//!
//! let reading = WeatherReading::new(5.0, 95.0);
//! match assess(reading, MarginConfig::new(2.0)) {
//!     Ok(a) if a.heat => {}, // Power the heater
//!     Ok(_) => {},           // Dome is safe
//!     Err(e) => {},          // Reject the reading
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod cycle;
pub mod decision;
pub mod errors;
pub mod psychro;
pub mod reading;
pub mod sink;
pub mod traits;
pub mod validators;

// Public API
pub use cycle::run_cycle;
pub use decision::{assess, should_heat, HeaterAssessment, MarginConfig, Trigger};
pub use errors::{CycleError, PsychroError, PsychroResult};
pub use psychro::{celsius_to_kelvin, dew_point_celsius, frost_point_celsius, kelvin_to_celsius};
pub use reading::{Location, WeatherReading};
pub use sink::ActuateSink;
#[cfg(feature = "std")]
pub use sink::ReportSink;
pub use traits::{DecisionSink, HeaterOutput, WeatherSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
