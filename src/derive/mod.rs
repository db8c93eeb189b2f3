//! Derivation pipeline: raw shot in, flat metric map out.
//!
//! Each sub-module is an independent, side-effect-free calculation that can be
//! called on its own. [`derive_with`] runs them in a fixed order, threading
//! intermediate results (spin split, carry, Tour carry) into later stages, and
//! records only what each stage could compute:
//!
//! 1. [`spin`]: backspin / sidespin
//! 2. [`ballistics`]: carry, total, offline
//! 3. [`club_speed`]: club speed, smash factor
//! 4. [`benchmark`]: Tour, then amateur / LPGA, with carry deltas
//! 5. [`window`]: optimal windows, label, quality score
//! 6. [`recommend`]: club guidance
//! 7. [`spin_loft`]: spin loft, attack angle
//! 8. [`face_path`]: face, face-to-path, path
//! 9. [`flight`]: apex, hang time, descent
//! 10. [`classify`]: shot name and rank

pub mod ballistics;
pub mod benchmark;
pub mod classify;
pub mod club_speed;
pub mod face_path;
pub mod flight;
pub mod recommend;
pub mod spin;
pub mod spin_loft;
pub mod window;

use crate::config::{ClubSpeedModel, Config};
use crate::input::ShotInput;
use crate::metrics::{DerivedMetrics, MetricKey};

use self::spin::SpinComponents;

/// Derive every computable metric with the default [`Config`].
pub fn derive(input: &ShotInput) -> DerivedMetrics {
    derive_with(input, &Config::default())
}

/// Derive every computable metric from `input`.
///
/// Never fails: a stage whose inputs are missing or degenerate contributes no
/// keys. An empty input yields an empty map.
pub fn derive_with(input: &ShotInput, config: &Config) -> DerivedMetrics {
    let mut out = DerivedMetrics::new();
    let ball_speed = input.ball_speed;
    let ball_mph = input.ball_speed_mph();
    let vla = input.vertical_launch_angle;
    let hla = input.horizontal_launch_angle;
    let total_spin = input.total_spin;
    let spin_axis = input.spin_axis;

    // Spin split
    let spin = match (total_spin, spin_axis) {
        (Some(total), Some(axis)) => Some(SpinComponents::from_axis(total, axis)),
        _ => None,
    };
    if let Some(s) = spin {
        out.insert(MetricKey::BackspinRpm, s.backspin);
        out.insert(MetricKey::SidespinRpm, s.sidespin);
    }

    // Distances
    let distances = match (ball_speed, vla) {
        (Some(v), Some(vla)) => ballistics::estimate(v, vla, hla, total_spin, spin),
        _ => None,
    };
    if let Some(d) = distances {
        out.insert(MetricKey::CarryDistanceYards, d.carry_yards);
        out.insert(MetricKey::TotalDistanceYards, d.total_yards);
        if let Some(offline) = d.offline_yards {
            out.insert(MetricKey::OfflineDistanceYards, offline);
        }
    } else {
        log::debug!("derive: no carry (ball speed {ball_speed:?}, VLA {vla:?})");
    }
    let carry = distances.map(|d| d.carry_yards);

    // Club speed
    let club = ball_speed.and_then(|v| match config.club_speed_model {
        ClubSpeedModel::Smash => club_speed::smash_curve(v, total_spin),
        ClubSpeedModel::ImpactBand => club_speed::impact_band(v, vla, total_spin),
    });
    if let Some(c) = club {
        out.insert(MetricKey::ClubSpeed, c.club_speed);
        out.insert(MetricKey::SmashFactor, c.smash_factor);
    }

    // Benchmarks
    let benchmarks = ball_mph.and_then(|mph| benchmark::all(mph, vla, total_spin));
    if let Some(b) = benchmarks {
        out.insert(MetricKey::TourCarryYards, b.tour.carry_yards);
        out.insert(MetricKey::TourTotalYards, b.tour.total_yards);
        if let Some(c) = carry {
            out.insert(MetricKey::CarryDeltaToTourYards, c - b.tour.carry_yards);
        }
        out.insert(MetricKey::AmateurCarryYards, b.amateur.carry_yards);
        out.insert(MetricKey::AmateurTotalYards, b.amateur.total_yards);
        out.insert(MetricKey::LpgaCarryYards, b.lpga.carry_yards);
        out.insert(MetricKey::LpgaTotalYards, b.lpga.total_yards);
        if let Some(c) = carry {
            out.insert(MetricKey::CarryDeltaToAmateurYards, c - b.amateur.carry_yards);
            out.insert(MetricKey::CarryDeltaToLpgaYards, c - b.lpga.carry_yards);
        }
    }
    let tour_carry = benchmarks.map(|b| b.tour.carry_yards);

    // Optimal windows and quality. Nothing to assess for an empty shot.
    if !input.is_empty() {
        let assessment = window::assess(&config.windows, vla, total_spin, hla);
        if let Some(ok) = assessment.launch_ok {
            out.insert(MetricKey::LaunchInWindow, ok);
        }
        if let Some(ok) = assessment.spin_ok {
            out.insert(MetricKey::SpinInWindow, ok);
        }
        if let Some(ok) = assessment.start_ok {
            out.insert(MetricKey::StartInWindow, ok);
        }

        let offline = distances.and_then(|d| d.offline_yards);
        if let (Some(c), Some(off), Some(t)) = (carry, offline, tour_carry) {
            out.insert(MetricKey::ShotQualityScore, window::quality_score(c, off, t, &assessment));
        }
        out.insert(MetricKey::OptimalWindowLabel, assessment.label);
    }

    // Club recommendation
    if let (Some(mph), Some(c)) = (ball_mph, carry) {
        out.insert(MetricKey::ClubRecommendation, recommend::recommend(mph, c, tour_carry));
    }

    // Spin loft and attack angle
    if let (Some(mph), Some(total), Some(_)) = (ball_mph, total_spin, vla) {
        let sl = spin_loft::estimate(mph, total);
        out.insert(MetricKey::SpinLoftDeg, sl.spin_loft_deg);
        out.insert(MetricKey::AttackAngleDeg, sl.attack_angle_deg);
    }

    // Face and path
    if let (Some(h), Some(axis)) = (hla, spin_axis) {
        let fp = face_path::estimate(h, axis);
        out.insert(MetricKey::FaceAngleDeg, fp.face_angle_deg);
        out.insert(MetricKey::FaceToPathDeg, fp.face_to_path_deg);
        out.insert(MetricKey::ClubPathDeg, fp.club_path_deg);
    }

    // Flight shape
    if let (Some(v), Some(vla)) = (ball_speed, vla) {
        let f = flight::estimate(v, vla);
        out.insert(MetricKey::ApexHeightYards, f.apex_height_yards);
        out.insert(MetricKey::HangTimeSeconds, f.hang_time_seconds);
        out.insert(MetricKey::DescentAngleDeg, f.descent_angle_deg);
    }

    // Classification
    if let (Some(v), Some(vla), Some(h), Some(axis)) = (ball_speed, vla, hla, spin_axis) {
        let class = classify::classify(v, vla, h, axis);
        out.insert(MetricKey::ShotName, class.name);
        out.insert(MetricKey::ShotRank, class.rank.as_str());
    }

    log::trace!("derive: {} metrics from {input:?}", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> ShotInput {
        ShotInput::new().ball_speed(70.0).vla(12.5).hla(0.0).total_spin(2800.0).spin_axis(5.0)
    }

    #[test]
    fn full_shot_fills_every_key() {
        let m = derive(&driver());
        for &key in MetricKey::ALL {
            assert!(m.contains(key), "missing {key}");
        }
    }

    #[test]
    fn empty_shot_is_empty() {
        assert!(derive(&ShotInput::new()).is_empty());
    }

    #[test]
    fn spin_only() {
        let m = derive(&ShotInput::new().total_spin(3000.0).spin_axis(-10.0));
        assert!(m.contains(MetricKey::BackspinRpm));
        assert!(!m.contains(MetricKey::FaceAngleDeg));
        assert_eq!(m.flag(MetricKey::SpinInWindow), Some(true));
        assert_eq!(m.text(MetricKey::OptimalWindowLabel), Some("Spin good."));
        assert!(!m.contains(MetricKey::CarryDistanceYards));
    }

    #[test]
    fn speed_only_gets_fallback_label() {
        let m = derive(&ShotInput::new().ball_speed(50.0));
        assert_eq!(
            m.text(MetricKey::OptimalWindowLabel),
            Some("All windows off: adjust launch, spin, and start line.")
        );
        assert!(m.contains(MetricKey::TourCarryYards));
        assert!(m.contains(MetricKey::ClubSpeed));
        assert!(!m.contains(MetricKey::CarryDeltaToTourYards));
        assert!(!m.contains(MetricKey::ShotQualityScore));
    }

    #[test]
    fn quality_needs_offline() {
        let m = derive(&ShotInput::new().ball_speed(60.0).vla(14.0).total_spin(3000.0));
        assert!(m.contains(MetricKey::CarryDistanceYards));
        assert!(!m.contains(MetricKey::OfflineDistanceYards));
        assert!(!m.contains(MetricKey::ShotQualityScore));
    }

    #[test]
    fn impact_band_model_changes_only_club_keys() {
        let input = driver();
        let smash = derive(&input);
        let band = derive_with(&input, &Config::default().with_club_speed_model(ClubSpeedModel::ImpactBand));
        assert_ne!(smash.number(MetricKey::ClubSpeed), band.number(MetricKey::ClubSpeed));
        for &key in MetricKey::ALL {
            if key != MetricKey::ClubSpeed && key != MetricKey::SmashFactor {
                assert_eq!(smash.get(key), band.get(key), "{key}");
            }
        }
    }

    #[test]
    fn tiny_ball_speed_keeps_carry_but_not_tour() {
        // 4 m/s ≈ 9 mph: below the benchmark and club-speed floors.
        let m = derive(&ShotInput::new().ball_speed(4.0).vla(20.0));
        assert!(m.contains(MetricKey::CarryDistanceYards));
        assert!(!m.contains(MetricKey::TourCarryYards));
        assert!(!m.contains(MetricKey::ClubSpeed));
        assert_eq!(
            m.text(MetricKey::ClubRecommendation),
            Some("Wedge / short iron: Solid strike.")
        );
    }
}
