//! Raw launch-monitor measurements for a single shot.

use crate::error::{Error, Result};
use crate::units;

/// Ball launch data as reported by the sensor.
///
/// Every field is independently optional. An absent field is `None`, never
/// `0.0`: zero is a valid physical reading (a putt has zero launch angle).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotInput {
    /// Ball speed (m/s)
    #[cfg_attr(feature = "serde", serde(default))]
    pub ball_speed: Option<f64>,
    /// Vertical launch angle / VLA (deg)
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertical_launch_angle: Option<f64>,
    /// Horizontal launch angle / HLA (deg, neg = left)
    #[cfg_attr(feature = "serde", serde(default))]
    pub horizontal_launch_angle: Option<f64>,
    /// Total spin (RPM)
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_spin: Option<f64>,
    /// Spin axis (deg, neg = draw/hook, pos = fade/slice)
    #[cfg_attr(feature = "serde", serde(default))]
    pub spin_axis: Option<f64>,
}

impl ShotInput {
    /// An input with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an input with all five fields present, rejecting values that
    /// cannot come from a real sensor (NaN, infinities, negative ball speed).
    pub fn validated(
        ball_speed: f64,
        vertical_launch_angle: f64,
        horizontal_launch_angle: f64,
        total_spin: f64,
        spin_axis: f64,
    ) -> Result<Self> {
        Self::new()
            .ball_speed(ball_speed)
            .vla(vertical_launch_angle)
            .hla(horizontal_launch_angle)
            .total_spin(total_spin)
            .spin_axis(spin_axis)
            .validate()
    }

    pub fn ball_speed(mut self, mps: f64) -> Self {
        self.ball_speed = Some(mps);
        self
    }

    pub fn vla(mut self, deg: f64) -> Self {
        self.vertical_launch_angle = Some(deg);
        self
    }

    pub fn hla(mut self, deg: f64) -> Self {
        self.horizontal_launch_angle = Some(deg);
        self
    }

    pub fn total_spin(mut self, rpm: f64) -> Self {
        self.total_spin = Some(rpm);
        self
    }

    pub fn spin_axis(mut self, deg: f64) -> Self {
        self.spin_axis = Some(deg);
        self
    }

    /// Check every present field. Absent fields always pass.
    pub fn validate(self) -> Result<Self> {
        let fields = [
            ("ball_speed", self.ball_speed),
            ("vertical_launch_angle", self.vertical_launch_angle),
            ("horizontal_launch_angle", self.horizontal_launch_angle),
            ("total_spin", self.total_spin),
            ("spin_axis", self.spin_axis),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                Error::check_finite(field, v)?;
            }
        }
        if let Some(v) = self.ball_speed {
            if v < 0.0 {
                return Err(Error::NegativeQuantity { field: "ball_speed", value: v });
            }
        }
        Ok(self)
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.ball_speed.is_none()
            && self.vertical_launch_angle.is_none()
            && self.horizontal_launch_angle.is_none()
            && self.total_spin.is_none()
            && self.spin_axis.is_none()
    }

    /// Ball speed converted to mph, if present.
    pub fn ball_speed_mph(&self) -> Option<f64> {
        self.ball_speed.map(units::mps_to_mph)
    }
}
