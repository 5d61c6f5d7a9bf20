//! Connectors Between DewGuard and the Outside World
//!
//! ## Overview
//!
//! The core crate decides; this crate talks to things. Each connector
//! implements one of the core ports so the heater cycle never sees HTTP or
//! sysfs directly:
//!
//! | Connector                     | Port            | Feature |
//! |-------------------------------|-----------------|---------|
//! | [`weather::OpenWeatherClient`]| `WeatherSource` | `http`  |
//! | [`gpio::SysfsGpio`]           | `HeaterOutput`  | `gpio`  |
//!
//! ## Weather Provider
//!
//! **When to use:** always, unless a local sensor feeds the core directly.
//!
//! **Characteristics:**
//! - One blocking HTTPS GET per cycle
//! - Bounded timeout, no retry
//! - Kelvin to Celsius conversion at the edge
//!
//! ## GPIO Output
//!
//! **When to use:** Linux boards exposing `/sys/class/gpio` (Raspberry Pi OS,
//! Armbian).
//!
//! **Characteristics:**
//! - Active-high relay drive
//! - Export on demand, pin left configured after exit
//! - Root directory injectable for tests
//!
//! ## Security Considerations
//!
//! - The provider API key only travels in the request URL over HTTPS and is
//!   redacted from `Debug` output and logs
//! - Writing sysfs GPIO usually requires membership in the `gpio` group;
//!   permission failures surface as [`gpio::GpioError::Write`]
//!
//! ## Example Usage
//!
//! ```no_run
//! use dewguard_connectors::{gpio::SysfsGpio, weather::{OpenWeatherClient, WeatherConfig}};
//! use dewguard_core::{run_cycle, ActuateSink, Location, MarginConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let location = Location::new(47.37, 8.54).ok_or("bad location")?;
//! let mut weather = OpenWeatherClient::new(WeatherConfig::new("api-key", location))?;
//! let mut heater = ActuateSink::new(SysfsGpio::new(17));
//!
//! run_cycle(&mut weather, &mut heater, MarginConfig::new(2.0))?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
pub mod weather;

#[cfg(feature = "gpio")]
pub mod gpio;

// Re-export common types
#[cfg(feature = "http")]
pub use weather::{OpenWeatherClient, WeatherConfig, WeatherError};

#[cfg(feature = "gpio")]
pub use gpio::{GpioError, SysfsGpio};
