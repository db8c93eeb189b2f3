//! Tour / amateur / LPGA carry and total benchmarks for a given ball speed.

use crate::units;

/// Benchmarks need at least this ball speed (mph).
const MIN_BALL_SPEED_MPH: f64 = 10.0;

const TOUR_CARRY_RANGE: (f64, f64) = (30.0, 320.0);
const TOUR_TOTAL_MAX: f64 = 340.0;
const TOUR_ROLL: f64 = 1.05;

/// Cohort scale relative to Tour.
pub const AMATEUR_SCALE: f64 = 0.80;
pub const LPGA_SCALE: f64 = 0.90;

/// Launch and spin that earn the Tour bonus (inclusive).
const BONUS_LAUNCH_DEG: (f64, f64) = (11.0, 15.0);
const BONUS_SPIN_RPM: (f64, f64) = (2200.0, 3000.0);

/// Outside these (exclusive) the Tour figure is penalised.
const PENALTY_LAUNCH_DEG: (f64, f64) = (8.0, 18.0);
const PENALTY_SPIN_RPM: (f64, f64) = (1500.0, 4000.0);

/// Carry and total for one cohort (yards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub carry_yards: f64,
    pub total_yards: f64,
}

impl Benchmark {
    fn scaled(&self, factor: f64) -> Self {
        Self {
            carry_yards: self.carry_yards * factor,
            total_yards: self.total_yards * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmarks {
    pub tour: Benchmark,
    pub amateur: Benchmark,
    pub lpga: Benchmark,
}

fn tour_from_carry(carry: f64) -> Benchmark {
    let carry = units::clamp(carry, TOUR_CARRY_RANGE.0, TOUR_CARRY_RANGE.1);
    Benchmark {
        carry_yards: carry,
        total_yards: (carry * TOUR_ROLL).min(TOUR_TOTAL_MAX),
    }
}

/// Tour benchmark from ball speed (mph), adjusted for launch and spin when
/// both are known. `None` below 10 mph.
pub fn tour(ball_speed_mph: f64, vla: Option<f64>, total_spin: Option<f64>) -> Option<Benchmark> {
    if ball_speed_mph < MIN_BALL_SPEED_MPH {
        return None;
    }

    let carry = if ball_speed_mph < 90.0 {
        (ball_speed_mph * 1.1 - 30.0).max(40.0)
    } else {
        ball_speed_mph * 1.60 - 25.0
    };
    let mut bench = tour_from_carry(carry);

    if let (Some(vla), Some(spin)) = (vla, total_spin) {
        let mut carry = bench.carry_yards;
        if units::within(vla, BONUS_LAUNCH_DEG) && units::within(spin, BONUS_SPIN_RPM) {
            carry *= 1.02;
        } else if vla < PENALTY_LAUNCH_DEG.0
            || vla > PENALTY_LAUNCH_DEG.1
            || spin < PENALTY_SPIN_RPM.0
            || spin > PENALTY_SPIN_RPM.1
        {
            carry *= 0.97;
        }
        bench = tour_from_carry(carry);
    }

    Some(bench)
}

/// Tour benchmark plus the amateur and LPGA cohorts scaled from it.
pub fn all(ball_speed_mph: f64, vla: Option<f64>, total_spin: Option<f64>) -> Option<Benchmarks> {
    let tour = tour(ball_speed_mph, vla, total_spin)?;
    Some(Benchmarks {
        tour,
        amateur: tour.scaled(AMATEUR_SCALE),
        lpga: tour.scaled(LPGA_SCALE),
    })
}
