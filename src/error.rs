use thiserror::Error;

/// Errors arising at the edges of the derivation engine.
///
/// Deriving metrics never fails; these only come from validating raw shot
/// values and parsing metric key names.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{field} is not a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    NegativeQuantity { field: &'static str, value: f64 },

    #[error("unknown metric key {name:?}")]
    UnknownMetric { name: String },
}

impl Error {
    /// Check that `value` is finite, tagging the error with `field`.
    pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { field, value })
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
