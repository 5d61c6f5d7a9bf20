//! Physical Constants for DewGuard
//!
//! Fundamental constants and empirical fit coefficients used by the dew point
//! and frost point calculations. Values are kept in `f64` so results match a
//! double precision reference implementation digit for digit.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Offset between the Kelvin and Celsius scales (K).
///
/// 0 °C = 273.15 K by definition of the Celsius scale.
///
/// Source: NIST Special Publication 330 (2019)
pub const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// Absolute zero in Celsius (°C).
///
/// No air temperature at or below this value is physically meaningful.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -ZERO_CELSIUS_IN_KELVIN;

// ===== MAGNUS DEW POINT APPROXIMATION =====

/// Magnus coefficient A (dimensionless).
///
/// Used in `alpha = A·T / (B + T) + ln(RH / 100)`.
///
/// Source: Barenbrug (1974), valid roughly from 0 °C to 60 °C, widely used
/// well outside that range for weather applications.
pub const MAGNUS_A: f64 = 17.27;

/// Magnus coefficient B (°C).
///
/// Air temperatures equal to `-MAGNUS_B` make the formula singular.
pub const MAGNUS_B: f64 = 237.7;

// ===== FROST POINT OVER ICE =====

/// Numerator of the frost point correction term (K).
///
/// `T_frost = T_dew - T_air + 2671.02 / (2954.61 / T_air + 2.193665·ln(T_air) - 13.3448)`
/// with all temperatures in Kelvin.
///
/// Source: Buck (1981) style fit for saturation over ice
pub const FROST_NUMERATOR_K: f64 = 2671.02;

/// Reciprocal temperature coefficient of the frost point denominator (K).
pub const FROST_RECIPROCAL_COEFF_K: f64 = 2954.61;

/// Logarithmic coefficient of the frost point denominator.
pub const FROST_LOG_COEFF: f64 = 2.193665;

/// Constant term of the frost point denominator.
pub const FROST_OFFSET: f64 = 13.3448;

// ===== HUMIDITY LIMITS =====

/// Lower bound of relative humidity (%), exclusive.
///
/// `ln(0)` is undefined, so completely dry air cannot be fed to the Magnus
/// formula.
pub const HUMIDITY_MIN_EXCLUSIVE_PCT: f64 = 0.0;

/// Upper bound of relative humidity (%), inclusive.
///
/// Saturated air. `ln(1) = 0`, so this is a valid input.
pub const HUMIDITY_MAX_PCT: f64 = 100.0;
