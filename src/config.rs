//! Tunable derivation settings.
//!
//! [`Config::default()`] reproduces the reference behaviour exactly; callers
//! only need a custom `Config` to move the optimal windows or to pick the
//! alternate club-speed model.

/// Inclusive bounds of the "optimal window" checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimalWindows {
    /// Vertical launch angle (deg)
    pub launch_deg: (f64, f64),
    /// Total spin (RPM)
    pub spin_rpm: (f64, f64),
    /// Horizontal launch angle / start line (deg)
    pub start_deg: (f64, f64),
}

impl Default for OptimalWindows {
    fn default() -> Self {
        Self {
            launch_deg: (11.0, 15.0),
            spin_rpm: (2200.0, 3200.0),
            start_deg: (-2.0, 2.0),
        }
    }
}

/// Which model estimates club speed and smash factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClubSpeedModel {
    /// Piecewise smash-factor curve keyed on ball speed (mph).
    #[default]
    Smash,
    /// Coefficient-of-restitution model with per-band launch/spin penalties.
    ImpactBand,
}

/// Settings for [`derive_with`](crate::derive_with).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub windows: OptimalWindows,
    pub club_speed_model: ClubSpeedModel,
}

impl Config {
    pub fn with_club_speed_model(mut self, model: ClubSpeedModel) -> Self {
        self.club_speed_model = model;
        self
    }

    pub fn with_windows(mut self, windows: OptimalWindows) -> Self {
        self.windows = windows;
        self
    }
}
