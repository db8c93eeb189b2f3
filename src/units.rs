//! Unit conversions and numeric helpers shared by the sub-calculations.
//!
//! Inputs arrive in SI (m/s, degrees, rpm). Distances leave in yards, and the
//! golf heuristics are keyed on ball speed in mph.

/// Gravity used by the carry range formula (m/s²).
pub const GRAVITY_RANGE: f64 = 9.81;

/// Standard gravity used by the flight-shape kinematics (m/s²).
pub const GRAVITY_STANDARD: f64 = 9.80665;

/// m/s → mph factor.
pub const MPS_TO_MPH: f64 = 2.236936;

/// metres → yards factor.
pub const METERS_TO_YARDS: f64 = 1.09361;

/// metres → feet factor.
pub const METERS_TO_FEET: f64 = 3.28084;

/// m/s → mph
pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}

/// mph → m/s
pub fn mph_to_mps(mph: f64) -> f64 {
    mph / MPS_TO_MPH
}

/// metres → yards
pub fn m_to_yd(m: f64) -> f64 {
    m * METERS_TO_YARDS
}

/// metres → yards, going through feet (3 ft per yard).
pub fn m_to_yd_via_feet(m: f64) -> f64 {
    m * METERS_TO_FEET / 3.0
}

/// Hard clamp into `[lo, hi]`.
pub fn clamp(val: f64, lo: f64, hi: f64) -> f64 {
    val.max(lo).min(hi)
}

/// Inclusive range check.
pub fn within(val: f64, (lo, hi): (f64, f64)) -> bool {
    lo <= val && val <= hi
}
