//! Heater configuration file
//!
//! Read once at startup and validated before anything touches the network or
//! the pin:
//!
//! ```toml
//! latitude = 47.37
//! longitude = 8.54
//! api_key = "..."
//! pin = 17                   # BCM number, as on Raspberry Pi pinouts
//! temperature_margin_c = 2.0
//!
//! [weather]
//! base_url = "https://api.openweathermap.org"
//! timeout_secs = 10
//!
//! [gpio]
//! sysfs_root = "/sys/class/gpio"
//! chip_base = 512            # optional, found from the SoC gpiochip if unset
//! ```

use std::path::{Path, PathBuf};

use dewguard_connectors::{gpio::DEFAULT_SYSFS_ROOT, weather::DEFAULT_BASE_URL, WeatherConfig};
use dewguard_core::{
    constants::heater::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_TEMP_MARGIN_C},
    Location, MarginConfig,
};
use serde::Deserialize;

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaterConfig {
    /// Site latitude in degrees
    pub latitude: f64,
    /// Site longitude in degrees
    pub longitude: f64,
    /// OpenWeatherMap API key
    pub api_key: String,
    /// BCM GPIO number driving the heater relay
    ///
    /// Offset by the SoC gpiochip base before it reaches sysfs.
    pub pin: u32,
    /// Safety margin in °C
    #[serde(default = "default_margin")]
    pub temperature_margin_c: f64,
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherSection,
    /// GPIO settings
    #[serde(default)]
    pub gpio: GpioSection,
}

/// `[weather]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[gpio]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GpioSection {
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,
    /// Overrides the gpiochip base found under `sysfs_root`
    #[serde(default)]
    pub chip_base: Option<u32>,
}

impl Default for GpioSection {
    fn default() -> Self {
        Self {
            sysfs_root: default_sysfs_root(),
            chip_base: None,
        }
    }
}

fn default_margin() -> f64 {
    DEFAULT_TEMP_MARGIN_C
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from(DEFAULT_SYSFS_ROOT)
}

impl HeaterConfig {
    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents).map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse and validate TOML text
    pub fn parse(toml_str: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(toml_str).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.location().is_none() {
            return Err(format!(
                "location ({}, {}) out of range",
                self.latitude, self.longitude
            ));
        }
        if !self.temperature_margin_c.is_finite() {
            return Err("temperature_margin_c must be finite".into());
        }
        if self.api_key.trim().is_empty() {
            return Err("api_key is empty".into());
        }
        if self.weather.timeout_secs == 0 {
            return Err("weather.timeout_secs must be non-zero".into());
        }
        Ok(())
    }

    /// Camera site
    pub fn location(&self) -> Option<Location> {
        Location::new(self.latitude, self.longitude)
    }

    /// Decision margin
    pub fn margin(&self) -> MarginConfig {
        MarginConfig::new(self.temperature_margin_c)
    }

    /// Weather client settings, or `None` if the location is invalid
    pub fn weather_config(&self) -> Option<WeatherConfig> {
        let config = WeatherConfig::new(self.api_key.clone(), self.location()?)
            .base_url(self.weather.base_url.clone())
            .timeout_secs(self.weather.timeout_secs);
        Some(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {}", .path.display(), .reason)]
    Invalid { path: PathBuf, reason: String },
}
