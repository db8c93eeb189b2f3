//! One-line club guidance from ball speed and carry vs. Tour.

/// Club family for advice, keyed by ball speed (mph). Coarser than
/// [`ClubClass`](super::spin_loft::ClubClass) and worded for display.
fn club_label(ball_speed_mph: f64) -> &'static str {
    if ball_speed_mph < 70.0 {
        "Wedge / short iron"
    } else if ball_speed_mph < 90.0 {
        "Mid iron (7–9i)"
    } else if ball_speed_mph < 105.0 {
        "Long iron / hybrid"
    } else {
        "Driver / 3-wood"
    }
}

fn guidance(carry_yards: f64, tour_carry_yards: Option<f64>) -> &'static str {
    let Some(tour) = tour_carry_yards else {
        return "Solid strike.";
    };
    let short_by = tour - carry_yards;
    if short_by > 20.0 {
        "You’re well short of Tour for this speed; focus on solid contact and launch."
    } else if short_by > 5.0 {
        "Within striking distance of Tour. Small gains in launch and spin will help."
    } else if short_by >= -10.0 {
        "You’re in the Tour ballpark for this speed. Great strike."
    } else {
        "You’re surpassing a typical Tour carry for this speed. Strong efficiency."
    }
}

/// `"{club}: {guidance}"` for a shot with known ball speed (mph) and carry (yards).
pub fn recommend(ball_speed_mph: f64, carry_yards: f64, tour_carry_yards: Option<f64>) -> String {
    format!("{}: {}", club_label(ball_speed_mph), guidance(carry_yards, tour_carry_yards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_well_short() {
        let r = recommend(156.6, 198.6, Some(230.0));
        assert_eq!(
            r,
            "Driver / 3-wood: You’re well short of Tour for this speed; focus on solid contact and launch."
        );
    }

    #[test]
    fn club_bands() {
        assert!(recommend(55.9, 80.0, None).starts_with("Wedge / short iron:"));
        assert!(recommend(78.3, 80.0, None).starts_with("Mid iron (7–9i):"));
        assert!(recommend(95.0, 80.0, None).starts_with("Long iron / hybrid:"));
        assert!(recommend(105.0, 80.0, None).starts_with("Driver / 3-wood:"));
    }

    #[test]
    fn guidance_bands() {
        assert!(guidance(100.0, Some(121.0)).contains("well short"));
        assert!(guidance(100.0, Some(120.0)).contains("striking distance"));
        assert!(guidance(100.0, Some(105.0)).contains("ballpark"));
        assert!(guidance(100.0, Some(90.0)).contains("ballpark"));
        assert!(guidance(100.0, Some(89.0)).contains("surpassing"));
    }

    #[test]
    fn no_tour_reference() {
        assert_eq!(recommend(8.0, 2.0, None), "Wedge / short iron: Solid strike.");
    }
}
