//! Common test utilities for heater cycle integration tests
//!
//! This module provides:
//! - Scripted weather sources that return fixed readings or errors
//! - A recording output that captures every pin write
//! - Named weather scenarios seen at real all-sky camera sites

#![allow(dead_code)]

pub mod scenarios;

use std::fmt;

use dewguard_core::{HeaterOutput, WeatherReading, WeatherSource};

/// Fetch failure raised by [`ScriptedSource`]
#[derive(Debug, Clone, PartialEq)]
pub enum MockFetchError {
    /// Provider answered with a non-200 status
    Status(u16),
    /// Provider unreachable
    Unreachable,
}

impl fmt::Display for MockFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Unreachable => write!(f, "provider unreachable"),
        }
    }
}

impl std::error::Error for MockFetchError {}

/// Weather source that returns one scripted result and counts calls
pub struct ScriptedSource {
    result: Result<WeatherReading, MockFetchError>,
    pub calls: usize,
}

impl ScriptedSource {
    pub fn reading(temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            result: Ok(WeatherReading::new(temperature_c, humidity_pct)),
            calls: 0,
        }
    }

    pub fn failing(error: MockFetchError) -> Self {
        Self {
            result: Err(error),
            calls: 0,
        }
    }
}

impl WeatherSource for ScriptedSource {
    type Error = MockFetchError;

    fn fetch_reading(&mut self) -> Result<WeatherReading, Self::Error> {
        self.calls += 1;
        self.result.clone()
    }
}

/// Pin write failure raised by [`RecordingPin`]
#[derive(Debug, Clone, PartialEq)]
pub struct MockPinError(pub u32);

impl fmt::Display for MockPinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permission denied on GPIO {}", self.0)
    }
}

impl std::error::Error for MockPinError {}

/// Output that records every write, optionally failing
pub struct RecordingPin {
    pub pin: u32,
    pub writes: Vec<bool>,
    pub fail: bool,
}

impl RecordingPin {
    pub fn new(pin: u32) -> Self {
        Self {
            pin,
            writes: Vec::new(),
            fail: false,
        }
    }

    pub fn broken(pin: u32) -> Self {
        Self {
            fail: true,
            ..Self::new(pin)
        }
    }
}

impl HeaterOutput for RecordingPin {
    type Error = MockPinError;

    fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockPinError(self.pin));
        }
        self.writes.push(on);
        Ok(())
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
