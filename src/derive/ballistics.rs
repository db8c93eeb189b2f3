//! Closed-form carry / total / offline estimate.
//!
//! Projectile range with a flat drag factor and small spin and launch
//! corrections, not a flight simulation. Good enough to be stable and
//! plausible across the realistic launch envelope.

use super::spin::SpinComponents;
use crate::units::{self, GRAVITY_RANGE};

/// Launch angle bounds applied before any math (deg).
const VLA_RANGE: (f64, f64) = (-5.0, 35.0);
const HLA_RANGE: (f64, f64) = (-25.0, 25.0);

/// Ceiling on the drag-free range (m).
const MAX_BASE_RANGE_M: f64 = 350.0;

const DRAG_FACTOR: f64 = 0.92;
const MIN_CARRY_MULTIPLIER: f64 = 0.75;

/// Share of the sidespin tilt that turns into lateral curvature.
const CURVATURE_GAIN: f64 = 0.3;

/// Offline is held within this many carries either side.
const OFFLINE_LIMIT_CARRIES: f64 = 3.0;

/// Carry, total and offline distance (yards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distances {
    pub carry_yards: f64,
    pub total_yards: f64,
    /// `None` when neither start line nor spin split was known.
    pub offline_yards: Option<f64>,
}

/// Estimate distances from ball speed (m/s) and launch angle (deg).
///
/// Returns `None` for non-positive speed or a launch at or below horizontal.
pub fn estimate(
    ball_speed: f64,
    vla: f64,
    hla: Option<f64>,
    total_spin: Option<f64>,
    spin: Option<SpinComponents>,
) -> Option<Distances> {
    let vla = units::clamp(vla, VLA_RANGE.0, VLA_RANGE.1);
    let hla = hla.map(|h| units::clamp(h, HLA_RANGE.0, HLA_RANGE.1));

    let theta = vla.to_radians();
    if theta <= 0.0 || ball_speed <= 0.0 {
        return None;
    }

    let base_range = (ball_speed * ball_speed / GRAVITY_RANGE * (2.0 * theta).sin()).min(MAX_BASE_RANGE_M);

    let spin_total = total_spin.or_else(|| spin.map(|s| s.total()));
    let spin_penalty = spin_total.map_or(0.0, |s| (s / 40_000.0).min(0.2));
    let launch_tuning = units::clamp((vla - 12.0) / 100.0, -0.1, 0.1);
    let multiplier = (1.0 - spin_penalty + launch_tuning).max(MIN_CARRY_MULTIPLIER);

    let carry_m = (base_range * DRAG_FACTOR * multiplier).max(0.0);

    // Low launch and low spin roll out further.
    let mut roll = 0.07 + (12.0 - vla).max(0.0) * 0.005;
    if let Some(s) = spin_total {
        roll -= (s / 25_000.0).min(0.05);
    }
    let roll = units::clamp(roll, 0.0, 0.25);
    let total_m = carry_m * (1.0 + roll);

    let carry_yards = units::m_to_yd(carry_m);
    let total_yards = units::m_to_yd(total_m);

    let mut offline = 0.0;
    let mut offline_known = false;
    if let Some(h) = hla {
        offline += carry_yards * h.to_radians().tan();
        offline_known = true;
    }
    if let Some(s) = spin {
        if carry_m > 0.0 {
            let curvature = s.sidespin.atan2(s.backspin.abs().max(1.0));
            offline += carry_yards * curvature.sin() * CURVATURE_GAIN;
            offline_known = true;
        }
    }
    let offline_yards = offline_known.then(|| {
        let limit = carry_yards * OFFLINE_LIMIT_CARRIES;
        units::clamp(offline, -limit, limit)
    });

    Some(Distances { carry_yards, total_yards, offline_yards })
}
