//! Decision sinks: actuate the heater, or report what would happen
//!
//! The binary picks exactly one sink at startup. [`ActuateSink`] drives the
//! relay pin; [`ReportSink`] (std only) prints the computed values and leaves
//! the pin alone, for dry runs and diagnostics.

use crate::{
    decision::HeaterAssessment,
    traits::{DecisionSink, HeaterOutput},
};

/// Sink that writes the decision to a heater output, once per cycle
#[derive(Debug)]
pub struct ActuateSink<O> {
    output: O,
}

impl<O: HeaterOutput> ActuateSink<O> {
    /// Wrap an output
    pub fn new(output: O) -> Self {
        Self { output }
    }

    /// Borrow the wrapped output
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Unwrap the output
    pub fn into_inner(self) -> O {
        self.output
    }
}

impl<O: HeaterOutput> DecisionSink for ActuateSink<O> {
    type Error = O::Error;

    fn apply(&mut self, assessment: &HeaterAssessment) -> Result<(), Self::Error> {
        self.output.set_output(assessment.heat)
    }
}

#[cfg(feature = "std")]
pub use report::ReportSink;

#[cfg(feature = "std")]
mod report {
    use std::io::{self, Write};

    use super::{DecisionSink, HeaterAssessment};

    /// Sink that writes a human-readable summary instead of actuating
    #[derive(Debug)]
    pub struct ReportSink<W> {
        writer: W,
    }

    impl ReportSink<io::Stdout> {
        /// Report to standard output
        pub fn stdout() -> Self {
            Self::new(io::stdout())
        }
    }

    impl<W: Write> ReportSink<W> {
        /// Report to any writer
        pub fn new(writer: W) -> Self {
            Self { writer }
        }

        /// Unwrap the writer
        pub fn into_inner(self) -> W {
            self.writer
        }
    }

    impl<W: Write> DecisionSink for ReportSink<W> {
        type Error = io::Error;

        fn apply(&mut self, assessment: &HeaterAssessment) -> io::Result<()> {
            let reading = &assessment.reading;
            writeln!(self.writer, "temperature: {:>7.2} °C", reading.temperature_c)?;
            writeln!(self.writer, "humidity:    {:>7.1} %", reading.relative_humidity_pct)?;
            writeln!(self.writer, "dew point:   {:>7.2} °C", assessment.dew_point_c)?;
            writeln!(self.writer, "frost point: {:>7.2} °C", assessment.frost_point_c)?;
            writeln!(self.writer, "margin:      {:>7.2} °C", assessment.margin_c)?;
            writeln!(
                self.writer,
                "heater:      {}",
                if assessment.heat { "ON" } else { "OFF" }
            )?;
            self.writer.flush()
        }
    }
}
