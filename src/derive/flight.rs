//! Apex, hang time and descent angle from drag-free projectile motion.

use crate::units::{self, GRAVITY_STANDARD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightShape {
    pub apex_height_yards: f64,
    pub hang_time_seconds: f64,
    pub descent_angle_deg: f64,
}

/// Flight shape from ball speed (m/s) and VLA (deg).
///
/// A stationary ball has zero apex and hang time. Without drag the descent
/// angle mirrors the launch angle.
pub fn estimate(ball_speed: f64, vla: f64) -> FlightShape {
    let theta = vla.to_radians();
    let v_y = ball_speed * theta.sin();
    let v_x = ball_speed * theta.cos();

    let hang_time_seconds = 2.0 * v_y / GRAVITY_STANDARD;
    let apex_m = v_y * v_y / (2.0 * GRAVITY_STANDARD);

    FlightShape {
        apex_height_yards: units::m_to_yd_via_feet(apex_m),
        hang_time_seconds,
        descent_angle_deg: v_y.atan2(v_x).to_degrees(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_flight() {
        let f = estimate(70.0, 12.5);
        assert!((f.apex_height_yards - 12.799196).abs() < 1e-5, "apex {}", f.apex_height_yards);
        assert!((f.hang_time_seconds - 3.089898).abs() < 1e-5, "hang {}", f.hang_time_seconds);
        assert!((f.descent_angle_deg - 12.5).abs() < 1e-9);
    }

    #[test]
    fn stationary_ball() {
        let f = estimate(0.0, 12.0);
        assert_eq!(f.apex_height_yards, 0.0);
        assert_eq!(f.hang_time_seconds, 0.0);
    }

    #[test]
    fn negative_launch_has_negative_hang() {
        // No clamping here: a downward launch reports as-is.
        let f = estimate(20.0, -2.0);
        assert!(f.hang_time_seconds < 0.0);
        assert!((f.descent_angle_deg + 2.0).abs() < 1e-9);
    }
}
