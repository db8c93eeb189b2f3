//! Club speed and smash factor inferred from ball data.
//!
//! Two models:
//!
//! - [`smash_curve`]: pick a smash factor from a ball-speed curve, knock a
//!   little off for spin, divide. Computed in mph, reported in m/s.
//! - [`impact_band`]: estimate the effective coefficient of restitution for
//!   the strike from how far launch and spin sit from the optimum of the
//!   ball-speed band, then invert the ball/club collision. Entirely in m/s.
//!
//! The two are independent approximations and do not agree numerically.

use crate::units::{self, mph_to_mps, mps_to_mph};

/// Club speed (m/s) with the smash factor that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubEstimate {
    pub club_speed: f64,
    pub smash_factor: f64,
}

// ---------------------------------------------------------------------------
// Smash-factor curve
// ---------------------------------------------------------------------------

/// Below this ball speed (mph) there is no meaningful club speed.
const MIN_BALL_SPEED_MPH: f64 = 10.0;

/// Upper bound on estimated club speed (mph); 65 m/s.
const MAX_CLUB_SPEED_MPH: f64 = 145.40084;

/// Smash seed by ball speed: first row whose threshold (mph) is exceeded.
const SMASH_CURVE: &[(f64, f64)] = &[
    (145.40084, 1.48),
    (122.03148, 1.45),
    (100.66212, 1.40),
];
const SMASH_FLOOR_SEED: f64 = 1.30;
const MIN_SMASH: f64 = 1.1;

/// Smash-curve estimate from ball speed (m/s) and optional total spin (RPM).
///
/// `None` when the ball speed is not positive or too slow to say anything
/// about the club.
pub fn smash_curve(ball_speed: f64, total_spin: Option<f64>) -> Option<ClubEstimate> {
    if ball_speed <= 0.0 {
        return None;
    }
    let ball_mph = mps_to_mph(ball_speed);
    if ball_mph < MIN_BALL_SPEED_MPH {
        log::debug!("club speed: {ball_mph:.1} mph ball speed is below {MIN_BALL_SPEED_MPH} mph");
        return None;
    }

    let mut smash = SMASH_CURVE
        .iter()
        .find(|(threshold, _)| ball_mph > *threshold)
        .map_or(SMASH_FLOOR_SEED, |(_, seed)| *seed);
    if let Some(spin) = total_spin {
        smash -= (spin / 60_000.0).min(0.05);
    }
    let smash = smash.max(MIN_SMASH);

    let club_mph = (ball_mph / smash).min(MAX_CLUB_SPEED_MPH);
    (club_mph > 0.0).then(|| ClubEstimate {
        club_speed: mph_to_mps(club_mph),
        smash_factor: smash,
    })
}

// ---------------------------------------------------------------------------
// Impact bands (coefficient of restitution)
// ---------------------------------------------------------------------------

/// Strike characteristics for one ball-speed band.
#[derive(Debug, Clone, Copy)]
struct ImpactBand {
    /// Upper ball speed of the band (m/s, inclusive)
    max_ball_speed: f64,
    base_cor: f64,
    optimal_launch_deg: f64,
    launch_tolerance_deg: f64,
    optimal_spin_rpm: f64,
    spin_tolerance_rpm: f64,
}

const IMPACT_BANDS: &[ImpactBand] = &[
    ImpactBand {
        max_ball_speed: 40.0,
        base_cor: 0.55,
        optimal_launch_deg: 28.0,
        launch_tolerance_deg: 15.0,
        optimal_spin_rpm: 9000.0,
        spin_tolerance_rpm: 4000.0,
    },
    ImpactBand {
        max_ball_speed: 50.0,
        base_cor: 0.66,
        optimal_launch_deg: 20.0,
        launch_tolerance_deg: 12.0,
        optimal_spin_rpm: 7000.0,
        spin_tolerance_rpm: 2500.0,
    },
    ImpactBand {
        max_ball_speed: 60.0,
        base_cor: 0.72,
        optimal_launch_deg: 16.0,
        launch_tolerance_deg: 10.0,
        optimal_spin_rpm: 5000.0,
        spin_tolerance_rpm: 2000.0,
    },
    ImpactBand {
        max_ball_speed: f64::INFINITY,
        base_cor: 0.83,
        optimal_launch_deg: 12.0,
        launch_tolerance_deg: 8.0,
        optimal_spin_rpm: 2500.0,
        spin_tolerance_rpm: 1500.0,
    },
];

const BALL_MASS_KG: f64 = 0.04593;
const CLUBHEAD_MASS_KG: f64 = 0.200;
const DRIVER_COR_LIMIT: f64 = 0.83;
const MIN_EFFECTIVE_COR: f64 = 0.52;

/// Spin below this (RPM) is knuckle-ball territory and costs extra COR.
const KNUCKLE_SPIN_RPM: f64 = 1200.0;

fn select_band(ball_speed: f64) -> &'static ImpactBand {
    let speed = ball_speed.max(5.0);
    IMPACT_BANDS
        .iter()
        .find(|b| speed <= b.max_ball_speed)
        .unwrap_or(&IMPACT_BANDS[IMPACT_BANDS.len() - 1])
}

/// Impact-band estimate from ball speed (m/s), launch (deg) and spin (RPM).
///
/// Missing launch or spin is taken as the band optimum, i.e. no penalty.
pub fn impact_band(ball_speed: f64, vla: Option<f64>, total_spin: Option<f64>) -> Option<ClubEstimate> {
    if ball_speed <= 0.0 {
        return None;
    }
    let band = select_band(ball_speed);
    let launch = units::clamp(vla.unwrap_or(band.optimal_launch_deg), -5.0, 70.0);
    let spin = total_spin.unwrap_or(band.optimal_spin_rpm).max(0.0);

    let launch_dev = ((launch - band.optimal_launch_deg).abs() / band.launch_tolerance_deg).min(3.0);
    let launch_penalty = launch_dev.powf(1.25) * 0.06;

    let spin_tol = band.spin_tolerance_rpm.max(1.0);
    let spin_dev = if spin >= band.optimal_spin_rpm {
        ((spin - band.optimal_spin_rpm) / spin_tol).min(3.0)
    } else {
        ((band.optimal_spin_rpm - spin) / (spin_tol * 1.5)).min(3.0)
    };
    let spin_penalty = spin_dev.powf(1.15) * 0.08;

    let knuckle_penalty = if spin < KNUCKLE_SPIN_RPM {
        ((KNUCKLE_SPIN_RPM - spin) / KNUCKLE_SPIN_RPM).powf(1.3) * 0.05
    } else {
        0.0
    };

    let cor = units::clamp(
        band.base_cor - launch_penalty - spin_penalty - knuckle_penalty,
        MIN_EFFECTIVE_COR,
        DRIVER_COR_LIMIT,
    );
    let smash = (1.0 + cor) / (1.0 + BALL_MASS_KG / CLUBHEAD_MASS_KG);

    Some(ClubEstimate {
        club_speed: ball_speed / smash,
        smash_factor: smash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn driver_speed_with_spin() {
        let est = smash_curve(70.0, Some(2800.0)).unwrap();
        assert!(close(est.smash_factor, 1.433333, 1e-5), "smash {}", est.smash_factor);
        assert!(close(est.club_speed, 48.837209, 1e-5), "club {}", est.club_speed);
    }

    #[test]
    fn curve_seeds() {
        // 35 m/s = 78 mph → lowest seed, 8500 rpm caps the spin deduction.
        let est = smash_curve(35.0, Some(8500.0)).unwrap();
        assert!(close(est.smash_factor, 1.25, 1e-12));
        assert!(close(est.club_speed, 28.0, 1e-9));

        // 50 m/s = 112 mph → 1.40 seed.
        let est = smash_curve(50.0, None).unwrap();
        assert!(close(est.smash_factor, 1.40, 1e-12));

        // 60 m/s = 134 mph → 1.45 seed.
        let est = smash_curve(60.0, None).unwrap();
        assert!(close(est.smash_factor, 1.45, 1e-12));
    }

    #[test]
    fn club_speed_capped_at_65_mps() {
        let est = smash_curve(100.0, None).unwrap();
        assert!(close(est.club_speed, 65.0, 1e-4), "club {}", est.club_speed);
        assert_eq!(est.smash_factor, 1.48);
    }

    #[test]
    fn no_estimate_for_slow_or_stationary_ball() {
        assert!(smash_curve(0.0, None).is_none());
        assert!(smash_curve(-1.0, None).is_none());
        // 4 m/s ≈ 9 mph
        assert!(smash_curve(4.0, Some(100.0)).is_none());
    }

    #[test]
    fn impact_band_driver() {
        let est = impact_band(70.0, Some(12.5), Some(2800.0)).unwrap();
        assert!(close(est.club_speed, 47.409975, 1e-5), "club {}", est.club_speed);
        assert!(close(est.smash_factor, 1.476483, 1e-5), "smash {}", est.smash_factor);
    }

    #[test]
    fn impact_band_wedge() {
        let est = impact_band(30.0, Some(30.0), Some(8500.0)).unwrap();
        assert!(close(est.club_speed, 23.945304, 1e-5), "club {}", est.club_speed);
    }

    #[test]
    fn impact_band_knuckle_and_low_launch() {
        let est = impact_band(60.0, Some(3.0), Some(500.0)).unwrap();
        assert!(close(est.club_speed, 48.538816, 1e-5), "club {}", est.club_speed);
    }

    #[test]
    fn impact_band_optimum_uses_base_cor() {
        let est = impact_band(70.0, None, None).unwrap();
        let expected = (1.0 + 0.83) / (1.0 + BALL_MASS_KG / CLUBHEAD_MASS_KG);
        assert!(close(est.smash_factor, expected, 1e-12));
    }

    #[test]
    fn band_selection_floor() {
        assert_eq!(select_band(0.5).max_ball_speed, 40.0);
        assert_eq!(select_band(50.0).max_ball_speed, 50.0);
        assert!(select_band(90.0).max_ball_speed.is_infinite());
    }
}
