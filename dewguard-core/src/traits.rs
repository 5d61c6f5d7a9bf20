//! Core traits for the heater cycle
//!
//! These are the seams between the pure decision logic and the outside world.
//! Keep them simple - one method each, no async, no allocation.

use crate::{decision::HeaterAssessment, reading::WeatherReading};

/// Source of the current weather at the camera site
pub trait WeatherSource {
    /// Error raised when no complete reading can be produced
    type Error;

    /// Fetch the current reading
    ///
    /// Must return an error rather than a partial reading.
    fn fetch_reading(&mut self) -> Result<WeatherReading, Self::Error>;
}

/// A digital output driving the heater relay, active-high
pub trait HeaterOutput {
    /// Error raised when the pin cannot be driven
    type Error;

    /// Drive the output: `true` powers the heater
    fn set_output(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// What to do with a decision: actuate a pin or report it
///
/// Chosen once at startup; the decision logic never branches on it.
pub trait DecisionSink {
    /// Error raised when the decision cannot be applied
    type Error;

    /// Apply one decision
    fn apply(&mut self, assessment: &HeaterAssessment) -> Result<(), Self::Error>;
}

impl<T: WeatherSource + ?Sized> WeatherSource for &mut T {
    type Error = T::Error;

    fn fetch_reading(&mut self) -> Result<WeatherReading, Self::Error> {
        (**self).fetch_reading()
    }
}

impl<T: HeaterOutput + ?Sized> HeaterOutput for &mut T {
    type Error = T::Error;

    fn set_output(&mut self, on: bool) -> Result<(), Self::Error> {
        (**self).set_output(on)
    }
}

impl<T: DecisionSink + ?Sized> DecisionSink for &mut T {
    type Error = T::Error;

    fn apply(&mut self, assessment: &HeaterAssessment) -> Result<(), Self::Error> {
        (**self).apply(assessment)
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is physically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
