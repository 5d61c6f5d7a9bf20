//! Integration tests for the heater cycle
//!
//! Tests the complete flow from a weather source through the decision engine
//! to the actuate and report sinks.

mod common;

use dewguard_core::{
    assess, run_cycle, ActuateSink, CycleError, MarginConfig, PsychroError, ReportSink,
};

use common::{
    assert_close,
    scenarios,
    MockFetchError, RecordingPin, ScriptedSource,
};

#[test]
fn test_scenarios_match_reference_values() {
    for scenario in scenarios::all() {
        let assessment = assess(scenario.reading, MarginConfig::new(2.0))
            .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));

        assert_close(assessment.dew_point_c, scenario.dew_point_c, 1e-3);
        assert_close(assessment.frost_point_c, scenario.frost_point_c, 1e-3);
        assert_eq!(
            assessment.heat, scenario.heat_at_2c_margin,
            "unexpected decision for {}",
            scenario.name
        );
    }
}

#[test]
fn test_cycle_drives_pin_once() {
    for scenario in scenarios::all() {
        let mut source = ScriptedSource::reading(
            scenario.reading.temperature_c,
            scenario.reading.relative_humidity_pct,
        );
        let mut sink = ActuateSink::new(RecordingPin::new(17));

        run_cycle(&mut source, &mut sink, MarginConfig::new(2.0)).unwrap();

        assert_eq!(source.calls, 1);
        assert_eq!(sink.output().writes, vec![scenario.heat_at_2c_margin]);
    }
}

#[test]
fn test_non_200_aborts_without_actuation() {
    let mut source = ScriptedSource::failing(MockFetchError::Status(401));
    let mut sink = ActuateSink::new(RecordingPin::new(17));

    let err = run_cycle(&mut source, &mut sink, MarginConfig::new(2.0)).unwrap_err();

    assert!(matches!(err, CycleError::Fetch(MockFetchError::Status(401))));
    assert_eq!(err.kind(), "fetch");
    assert!(sink.output().writes.is_empty());
}

#[test]
fn test_unreachable_provider_reports_fetch_error() {
    let mut source = ScriptedSource::failing(MockFetchError::Unreachable);
    let mut sink = ActuateSink::new(RecordingPin::new(4));

    let err = run_cycle(&mut source, &mut sink, MarginConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Weather fetch failed: provider unreachable");
    assert!(sink.output().writes.is_empty());
}

#[test]
fn test_zero_humidity_aborts_without_actuation() {
    let mut source = ScriptedSource::reading(15.0, 0.0);
    let mut sink = ActuateSink::new(RecordingPin::new(17));

    let err = run_cycle(&mut source, &mut sink, MarginConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        CycleError::InvalidInput(PsychroError::InvalidHumidity { .. })
    ));
    assert!(sink.output().writes.is_empty());
}

#[test]
fn test_broken_pin_is_actuation_error() {
    let mut source = ScriptedSource::reading(5.0, 95.0);
    let mut sink = ActuateSink::new(RecordingPin::broken(17));

    let err = run_cycle(&mut source, &mut sink, MarginConfig::default()).unwrap_err();

    assert_eq!(err.kind(), "actuation");
    assert_eq!(
        err.to_string(),
        "Heater actuation failed: permission denied on GPIO 17"
    );
}

#[test]
fn test_dry_run_reports_decision() {
    let mut source = ScriptedSource::reading(5.0, 95.0);
    let mut sink = ReportSink::new(Vec::new());

    let assessment = run_cycle(&mut source, &mut sink, MarginConfig::new(2.0)).unwrap();
    assert!(assessment.heat);

    let report = String::from_utf8(sink.into_inner()).unwrap();
    assert!(report.contains("dew point:"));
    assert!(report.contains("frost point:"));
    assert!(report.ends_with("heater:      ON\n"));
}

#[test]
fn test_cycle_error_exposes_source() {
    use std::error::Error;

    let mut source = ScriptedSource::failing(MockFetchError::Status(503));
    let mut sink = ActuateSink::new(RecordingPin::new(17));

    let err = run_cycle(&mut source, &mut sink, MarginConfig::default()).unwrap_err();
    let source_err = err.source().expect("fetch error should expose its cause");
    assert_eq!(source_err.to_string(), "HTTP status 503");
}
