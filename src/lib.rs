pub mod config;
pub mod derive;
pub mod error;
pub mod input;
pub mod metrics;
pub mod units;

pub use config::{ClubSpeedModel, Config, OptimalWindows};
pub use crate::derive::{derive, derive_with};
pub use error::Error;
pub use input::ShotInput;
pub use metrics::{DerivedMetrics, MetricKey, MetricValue};
