//! Face angle, face-to-path and club path from start line and curve.

use crate::units;

/// Share of the start line attributed to face angle.
const FACE_FRACTION: f64 = 0.80;
/// Spin axis degrees → face-to-path degrees.
const SPIN_AXIS_TO_FACE_TO_PATH: f64 = 0.60;
/// All three angles are held within ±this (deg).
const LIMIT_DEG: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePath {
    pub face_angle_deg: f64,
    pub face_to_path_deg: f64,
    pub club_path_deg: f64,
}

/// Estimate club delivery from HLA and spin axis (deg).
pub fn estimate(hla: f64, spin_axis: f64) -> FacePath {
    let face = hla * FACE_FRACTION;
    let face_to_path = spin_axis * SPIN_AXIS_TO_FACE_TO_PATH;
    // Path is computed from the unclamped face and face-to-path.
    let path = face - face_to_path;
    let limit = |v: f64| units::clamp(v, -LIMIT_DEG, LIMIT_DEG);
    FacePath {
        face_angle_deg: limit(face),
        face_to_path_deg: limit(face_to_path),
        club_path_deg: limit(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_from_square_start() {
        let fp = estimate(0.0, 5.0);
        assert_eq!(fp.face_angle_deg, 0.0);
        assert!((fp.face_to_path_deg - 3.0).abs() < 1e-12);
        assert!((fp.club_path_deg + 3.0).abs() < 1e-12);
    }

    #[test]
    fn draw_pushed_right() {
        let fp = estimate(1.0, -4.0);
        assert!((fp.face_angle_deg - 0.8).abs() < 1e-12);
        assert!((fp.face_to_path_deg + 2.4).abs() < 1e-12);
        assert!((fp.club_path_deg - 3.2).abs() < 1e-12);
    }

    #[test]
    fn angles_clamped() {
        let fp = estimate(40.0, -60.0);
        assert_eq!(fp.face_angle_deg, 20.0);
        assert_eq!(fp.face_to_path_deg, -20.0);
        assert_eq!(fp.club_path_deg, 20.0);

        let fp = estimate(-40.0, 60.0);
        assert_eq!(fp.face_angle_deg, -20.0);
        assert_eq!(fp.face_to_path_deg, 20.0);
        assert_eq!(fp.club_path_deg, -20.0);
    }
}
