//! Named weather scenarios for integration tests
//!
//! Each scenario pairs a reading with the decision expected at the default
//! 2 °C margin. Dew and frost points were computed independently with double
//! precision.

use dewguard_core::WeatherReading;

/// One test scenario
pub struct WeatherScenario {
    pub name: &'static str,
    pub reading: WeatherReading,
    pub dew_point_c: f64,
    pub frost_point_c: f64,
    pub heat_at_2c_margin: bool,
}

/// Scenarios covering warm, humid, freezing and saturated conditions
pub fn all() -> Vec<WeatherScenario> {
    vec![
        WeatherScenario {
            name: "dry summer evening",
            reading: WeatherReading::new(20.0, 50.0),
            dew_point_c: 9.2543,
            frost_point_c: 6.5730,
            heat_at_2c_margin: false,
        },
        WeatherScenario {
            name: "humid spring night",
            reading: WeatherReading::new(5.0, 95.0),
            dew_point_c: 4.2662,
            frost_point_c: 3.6576,
            heat_at_2c_margin: true,
        },
        WeatherScenario {
            name: "clear autumn night",
            reading: WeatherReading::new(10.0, 70.0),
            dew_point_c: 4.7814,
            frost_point_c: 3.5223,
            heat_at_2c_margin: false,
        },
        WeatherScenario {
            name: "freezing fog",
            reading: WeatherReading::new(-5.0, 90.0),
            dew_point_c: -6.3815,
            frost_point_c: -5.8085,
            heat_at_2c_margin: true,
        },
        WeatherScenario {
            name: "cold dry winter night",
            reading: WeatherReading::new(-20.0, 60.0),
            dew_point_c: -25.7420,
            frost_point_c: -23.6896,
            heat_at_2c_margin: false,
        },
        WeatherScenario {
            name: "hoar frost threshold",
            reading: WeatherReading::new(-20.0, 70.0),
            dew_point_c: -24.0414,
            frost_point_c: -21.9891,
            heat_at_2c_margin: true,
        },
        WeatherScenario {
            name: "saturated at freezing",
            reading: WeatherReading::new(0.0, 100.0),
            dew_point_c: 0.0,
            frost_point_c: 0.0020,
            heat_at_2c_margin: true,
        },
    ]
}
