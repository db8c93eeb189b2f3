//! Output side of a derivation: metric keys, values, and the flat map.
//!
//! Key names are a compatibility surface. Downstream sensors and dashboards
//! address each metric by its exact string name, so [`MetricKey::as_str`] must
//! never change for an existing variant.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ---------------------------------------------------------------------------
// MetricKey
// ---------------------------------------------------------------------------

/// Declare `MetricKey` together with its wire names and the full key list.
macro_rules! metric_keys {
    ($($variant:ident => $name:literal,)+) => {
        /// Name of one derived metric.
        ///
        /// Ordering follows declaration order, which groups related metrics
        /// the same way the derivation produces them.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MetricKey {
            $($variant,)+
        }

        impl MetricKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [MetricKey] = &[$(MetricKey::$variant,)+];

            /// Exact external name of the key.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(MetricKey::$variant => $name,)+
                }
            }
        }

        impl FromStr for MetricKey {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                match s {
                    $($name => Ok(MetricKey::$variant),)+
                    _ => Err(Error::UnknownMetric { name: s.to_string() }),
                }
            }
        }
    };
}

metric_keys! {
    BackspinRpm => "backspin_rpm",
    SidespinRpm => "sidespin_rpm",
    CarryDistanceYards => "carry_distance_yards",
    TotalDistanceYards => "total_distance_yards",
    OfflineDistanceYards => "offline_distance_yards",
    ClubSpeed => "club_speed_meters_per_second",
    SmashFactor => "smash_factor",
    TourCarryYards => "tour_carry_yards",
    TourTotalYards => "tour_total_yards",
    CarryDeltaToTourYards => "carry_delta_to_tour_yards",
    AmateurCarryYards => "amateur_carry_yards",
    AmateurTotalYards => "amateur_total_yards",
    LpgaCarryYards => "lpga_carry_yards",
    LpgaTotalYards => "lpga_total_yards",
    CarryDeltaToAmateurYards => "carry_delta_to_amateur_yards",
    CarryDeltaToLpgaYards => "carry_delta_to_lpga_yards",
    LaunchInWindow => "launch_in_window",
    SpinInWindow => "spin_in_window",
    StartInWindow => "start_in_window",
    OptimalWindowLabel => "optimal_window_label",
    ShotQualityScore => "shot_quality_score",
    ClubRecommendation => "club_recommendation",
    SpinLoftDeg => "spin_loft_deg",
    AttackAngleDeg => "attack_angle_deg",
    FaceAngleDeg => "face_angle_deg",
    FaceToPathDeg => "face_to_path_deg",
    ClubPathDeg => "club_path_deg",
    ApexHeightYards => "apex_height_yards",
    HangTimeSeconds => "hang_time_seconds",
    DescentAngleDeg => "descent_angle_deg",
    ShotName => "shot_name",
    ShotRank => "shot_rank",
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MetricKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MetricValue
// ---------------------------------------------------------------------------

/// A single derived value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetricValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for MetricValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Flag(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

// ---------------------------------------------------------------------------
// DerivedMetrics
// ---------------------------------------------------------------------------

/// Flat map of every metric a derivation could compute.
///
/// A key is present only if it was computable. Missing keys mean "not
/// computable from the given inputs"; there are no placeholder values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DerivedMetrics {
    values: BTreeMap<MetricKey, MetricValue>,
}

impl DerivedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MetricKey, value: impl Into<MetricValue>) {
        self.values.insert(key, value.into());
    }

    /// Merge another partial result in. Later values win on key collision.
    pub fn merge(&mut self, other: DerivedMetrics) {
        self.values.extend(other.values);
    }

    pub fn get(&self, key: MetricKey) -> Option<&MetricValue> {
        self.values.get(&key)
    }

    pub fn contains(&self, key: MetricKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Numeric value of `key`, if present and numeric.
    pub fn number(&self, key: MetricKey) -> Option<f64> {
        self.get(key).and_then(MetricValue::as_f64)
    }

    /// Boolean value of `key`, if present and boolean.
    pub fn flag(&self, key: MetricKey) -> Option<bool> {
        self.get(key).and_then(MetricValue::as_bool)
    }

    /// Text value of `key`, if present and textual.
    pub fn text(&self, key: MetricKey) -> Option<&str> {
        self.get(key).and_then(MetricValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = MetricKey> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &MetricValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

impl<'a> IntoIterator for &'a DerivedMetrics {
    type Item = (&'a MetricKey, &'a MetricValue);
    type IntoIter = std::collections::btree_map::Iter<'a, MetricKey, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_round_trip() {
        for &key in MetricKey::ALL {
            assert_eq!(key.as_str().parse::<MetricKey>().unwrap(), key);
        }
    }

    #[test]
    fn has_all_32_keys() {
        assert_eq!(MetricKey::ALL.len(), 32);
    }

    #[test]
    fn club_speed_keeps_its_external_name() {
        assert_eq!(MetricKey::ClubSpeed.to_string(), "club_speed_meters_per_second");
    }

    #[test]
    fn unknown_key() {
        let err = "carry_meters".parse::<MetricKey>().unwrap_err();
        assert_eq!(err, Error::UnknownMetric { name: "carry_meters".into() });
    }

    #[test]
    fn typed_getters() {
        let mut m = DerivedMetrics::new();
        m.insert(MetricKey::CarryDistanceYards, 250.0);
        m.insert(MetricKey::LaunchInWindow, true);
        m.insert(MetricKey::ShotName, "Push Draw");

        assert_eq!(m.number(MetricKey::CarryDistanceYards), Some(250.0));
        assert_eq!(m.flag(MetricKey::LaunchInWindow), Some(true));
        assert_eq!(m.text(MetricKey::ShotName), Some("Push Draw"));
        // Wrong type is None, not a coerced value.
        assert_eq!(m.number(MetricKey::ShotName), None);
        assert_eq!(m.number(MetricKey::TotalDistanceYards), None);
    }

    #[test]
    fn merge_keeps_both_sides() {
        let mut a = DerivedMetrics::new();
        a.insert(MetricKey::BackspinRpm, 2000.0);
        let mut b = DerivedMetrics::new();
        b.insert(MetricKey::SidespinRpm, -300.0);
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(MetricKey::SidespinRpm));
    }

    #[test]
    fn iteration_follows_key_order() {
        let mut m = DerivedMetrics::new();
        m.insert(MetricKey::ShotRank, "A");
        m.insert(MetricKey::BackspinRpm, 1.0);
        let keys: Vec<_> = m.keys().collect();
        assert_eq!(keys, vec![MetricKey::BackspinRpm, MetricKey::ShotRank]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_flat_map() {
        let mut m = DerivedMetrics::new();
        m.insert(MetricKey::SmashFactor, 1.45);
        m.insert(MetricKey::SpinInWindow, false);
        m.insert(MetricKey::ShotRank, "S+");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"smash_factor":1.45,"spin_in_window":false,"shot_rank":"S+"}"#);
    }
}
