//! Shot-shape classification and letter rank.
//!
//! Rules are evaluated in order and the first match wins. Mishits (putts,
//! chunks, shanks, big hooks and slices) are caught first; everything else is
//! named by start direction plus curve and ranked from a fixed table.

use std::fmt;

use crate::units::mps_to_mph;

use self::Direction::{Pull, Push, Straight};
use self::Shape::{Draw, Fade, Hook, Slice};

/// Start direction from horizontal launch angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pull,
    Straight,
    Push,
}

impl Direction {
    /// Beyond ±3° the ball is off line.
    pub fn from_hla(hla: f64) -> Self {
        if hla < -3.0 {
            Self::Pull
        } else if hla > 3.0 {
            Self::Push
        } else {
            Self::Straight
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pull => "Pull",
            Self::Straight => "Straight",
            Self::Push => "Push",
        }
    }
}

/// Curve from spin axis. `None` from [`Shape::from_spin_axis`] means no curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Hook,
    Draw,
    Fade,
    Slice,
}

impl Shape {
    pub fn from_spin_axis(axis: f64) -> Option<Self> {
        if axis < -12.0 {
            Some(Self::Hook)
        } else if axis < -3.0 {
            Some(Self::Draw)
        } else if axis > 12.0 {
            Some(Self::Slice)
        } else if axis > 3.0 {
            Some(Self::Fade)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hook => "Hook",
            Self::Draw => "Draw",
            Self::Fade => "Fade",
            Self::Slice => "Slice",
        }
    }
}

/// Letter grade of a shot. `SPlus` and `S` are reserved for the "baby" shapes,
/// `P` for putts, `E` for mishits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotRank {
    SPlus,
    S,
    A,
    B,
    C,
    D,
    E,
    P,
}

impl ShotRank {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SPlus => "S+",
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::P => "P",
        }
    }
}

impl fmt::Display for ShotRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shot name and rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotClass {
    pub name: String,
    pub rank: ShotRank,
}

impl ShotClass {
    fn new(name: impl Into<String>, rank: ShotRank) -> Self {
        Self { name: name.into(), rank }
    }
}

// ---------------------------------------------------------------------------
// Rank table
// ---------------------------------------------------------------------------

type Combo = (Direction, Option<Shape>);

const RANK_TABLE: &[(ShotRank, &[Combo])] = &[
    (ShotRank::A, &[(Straight, Some(Draw)), (Straight, Some(Fade)), (Push, Some(Draw))]),
    (
        ShotRank::B,
        &[(Straight, None), (Pull, None), (Push, None), (Pull, Some(Fade))],
    ),
    (
        ShotRank::C,
        &[(Pull, Some(Draw)), (Push, Some(Fade)), (Push, Some(Hook)), (Pull, Some(Slice))],
    ),
];

/// Rank for a direction/shape pair. Anything not listed is a D.
pub fn rank_for(direction: Direction, shape: Option<Shape>) -> ShotRank {
    RANK_TABLE
        .iter()
        .find(|(_, combos)| combos.contains(&(direction, shape)))
        .map_or(ShotRank::D, |(rank, _)| *rank)
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Ball speed thresholds (mph).
const PUTT_MAX_MPH: f64 = 6.0;
const CHUNK_MAX_MPH: f64 = 25.0;
const WORM_BURNER_MIN_MPH: f64 = 44.73872;
const FULL_SWING_MIN_MPH: f64 = 100.0;
const BABY_SHAPE_MIN_MPH: f64 = 55.9234;

/// Classify a shot from ball speed (m/s), VLA, HLA and spin axis (deg).
pub fn classify(ball_speed: f64, vla: f64, hla: f64, spin_axis: f64) -> ShotClass {
    let mph = mps_to_mph(ball_speed);

    if vla.abs() < 0.1 && mph < PUTT_MAX_MPH {
        return ShotClass::new("Putt", ShotRank::P);
    }
    if mph < CHUNK_MAX_MPH && vla < 10.0 {
        return ShotClass::new("Chunk", ShotRank::E);
    }
    if vla < 5.0 && mph > WORM_BURNER_MIN_MPH {
        return ShotClass::new("Worm Burner", ShotRank::E);
    }
    if hla > 12.0 && vla > 12.0 {
        return ShotClass::new("Right Shank", ShotRank::E);
    }
    if hla < -12.0 && vla > 12.0 {
        return ShotClass::new("Left Shank", ShotRank::E);
    }
    if mph > FULL_SWING_MIN_MPH && vla < 20.0 {
        if spin_axis < -25.0 {
            return ShotClass::new("Duck Hook", ShotRank::E);
        }
        if spin_axis > 25.0 {
            return ShotClass::new("Banana Slice", ShotRank::E);
        }
    }
    if hla.abs() < 2.0 && spin_axis.abs() < 2.0 && mph > BABY_SHAPE_MIN_MPH {
        if hla > 0.0 && spin_axis < 0.0 {
            return ShotClass::new("Baby Push Draw", ShotRank::SPlus);
        }
        if hla < 0.0 && spin_axis > 0.0 {
            return ShotClass::new("Baby Pull Fade", ShotRank::S);
        }
    }

    let direction = Direction::from_hla(hla);
    let shape = Shape::from_spin_axis(spin_axis);
    let name = match shape {
        Some(s) => format!("{} {}", direction.as_str(), s.as_str()),
        None => direction.as_str().to_string(),
    };
    ShotClass::new(name, rank_for(direction, shape))
}
