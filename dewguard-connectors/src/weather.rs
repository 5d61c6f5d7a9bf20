//! OpenWeatherMap Connector - Current Conditions over HTTPS
//!
//! ## Overview
//!
//! Fetches the current air temperature and relative humidity for the camera
//! site from the OpenWeatherMap "current weather" endpoint:
//!
//! ```text
//! GET {base_url}/data/2.5/weather?lat={lat}&lon={lon}&appid={api_key}
//!
//! 200 OK
//! { "main": { "temp": 278.15, "humidity": 95, ... }, ... }
//! ```
//!
//! `main.temp` is in Kelvin (the provider default when no `units` parameter is
//! sent) and is converted to Celsius here. `main.humidity` is an integer
//! percentage in practice but parsed as a float.
//!
//! ## Failure Handling
//!
//! Anything short of a complete reading is a [`WeatherError`]:
//!
//! | Condition                          | Error                         |
//! |------------------------------------|-------------------------------|
//! | DNS, TCP, TLS failure or timeout   | `WeatherError::Request`       |
//! | Status other than 200              | `WeatherError::Status`        |
//! | Body is not JSON                   | `WeatherError::Malformed`     |
//! | `main.temp` / `main.humidity` gone | `WeatherError::MissingField`  |
//!
//! There is no retry. The heater cycle aborts and the scheduler runs the next
//! one.
//!
//! ## Implementation Choices
//!
//! - Blocking `ureq` agent: one request per process, no async runtime needed
//! - Bounded timeout (10 s default) so a hung provider cannot stall cron
//! - The API key is sent as a query parameter and never logged
//!
//! ## Example Usage
//!
//! ```no_run
//! use dewguard_connectors::weather::{OpenWeatherClient, WeatherConfig};
//! use dewguard_core::Location;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let location = Location::new(47.37, 8.54).ok_or("bad location")?;
//! let config = WeatherConfig::new("your-api-key", location).timeout_secs(10);
//!
//! let client = OpenWeatherClient::new(config)?;
//! let reading = client.fetch_current()?;
//! println!("{:.1}°C, {:.0}% RH", reading.temperature_c, reading.relative_humidity_pct);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use dewguard_core::{
    constants::heater::DEFAULT_FETCH_TIMEOUT_SECS, kelvin_to_celsius, Location, WeatherReading,
    WeatherSource,
};
use serde::Deserialize;
use thiserror::Error;

/// Default provider endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Path of the current weather resource
pub const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Weather fetch errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network, TLS or timeout error
    #[error("Request failed: {0}")]
    Request(String),

    /// Provider returned a status other than 200
    #[error("Provider returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Provider's `message` field, or the start of the body
        message: String,
    },

    /// Body is not valid JSON or has the wrong shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Required field absent or null
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Weather client configuration
#[derive(Clone)]
pub struct WeatherConfig {
    /// Base URL of the provider, without trailing slash
    pub base_url: String,
    /// Provider API key
    pub api_key: String,
    /// Camera site
    pub location: Location,
    /// Upper bound on the whole request
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("location", &self.location)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl WeatherConfig {
    /// Create configuration for a key and location with default endpoint and timeout
    pub fn new(api_key: impl Into<String>, location: Location) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            location,
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: format!("DewGuard/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the provider base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking OpenWeatherMap client for one fixed location
pub struct OpenWeatherClient {
    config: WeatherConfig,
    agent: ureq::Agent,
}

impl OpenWeatherClient {
    /// Create new client
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(WeatherError::Config(
                "Base URL must start with http:// or https://".into(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::Config("API key is empty".into()));
        }
        if !config.location.is_valid() {
            return Err(WeatherError::Config(format!(
                "Location ({}, {}) out of range",
                config.location.latitude, config.location.longitude
            )));
        }
        if config.timeout.is_zero() {
            return Err(WeatherError::Config("Timeout must be non-zero".into()));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self { config, agent })
    }

    /// Client configuration
    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Fetch current conditions at the configured location
    pub fn fetch_current(&self) -> Result<WeatherReading, WeatherError> {
        let Location { latitude, longitude } = self.config.location;
        self.fetch_reading_at(latitude, longitude, &self.config.api_key)
    }

    /// Fetch current conditions for an explicit position and key
    pub fn fetch_reading_at(
        &self,
        latitude: f64,
        longitude: f64,
        api_key: &str,
    ) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}{}", self.config.base_url, CURRENT_WEATHER_PATH);
        log::debug!("Fetching current weather for ({:.4}, {:.4})", latitude, longitude);

        let response = self
            .agent
            .get(&url)
            .query("lat", &latitude.to_string())
            .query("lon", &longitude.to_string())
            .query("appid", api_key)
            .set("Accept", "application/json")
            .call();

        match response {
            Ok(resp) => {
                let status = resp.status();
                let body = resp
                    .into_string()
                    .map_err(|e| WeatherError::Request(e.to_string()))?;

                if status != 200 {
                    return Err(WeatherError::Status {
                        status,
                        message: provider_message(&body),
                    });
                }

                let reading = parse_current_weather(&body)?;
                log::debug!(
                    "Provider reports {:.2}°C, {:.0}% RH",
                    reading.temperature_c,
                    reading.relative_humidity_pct
                );
                Ok(reading)
            }
            Err(ureq::Error::Status(status, resp)) => Err(WeatherError::Status {
                status,
                message: provider_message(&resp.into_string().unwrap_or_default()),
            }),
            Err(ureq::Error::Transport(e)) => Err(WeatherError::Request(e.to_string())),
        }
    }
}

impl WeatherSource for OpenWeatherClient {
    type Error = WeatherError;

    fn fetch_reading(&mut self) -> Result<WeatherReading, Self::Error> {
        self.fetch_current()
    }
}

#[derive(Deserialize)]
struct CurrentWeather {
    main: Option<MainBlock>,
}

#[derive(Deserialize)]
struct MainBlock {
    /// Kelvin
    temp: Option<f64>,
    /// Percent
    humidity: Option<f64>,
}

#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
}

/// Parse a 200 response body into a reading in Celsius
pub fn parse_current_weather(body: &str) -> Result<WeatherReading, WeatherError> {
    let weather: CurrentWeather =
        serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

    let main = weather.main.ok_or(WeatherError::MissingField("main"))?;
    let temp_k = main.temp.ok_or(WeatherError::MissingField("main.temp"))?;
    let humidity = main.humidity.ok_or(WeatherError::MissingField("main.humidity"))?;

    Ok(WeatherReading::new(kelvin_to_celsius(temp_k), humidity))
}

/// Error text from a provider error body, falling back to the raw body
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ProviderError>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.trim().chars().take(200).collect())
}
