//! Optimal-window checks and the composite shot quality score.

use crate::config::OptimalWindows;
use crate::units;

/// Result of the three window checks. `None` means the input was absent.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAssessment {
    pub launch_ok: Option<bool>,
    pub spin_ok: Option<bool>,
    pub start_ok: Option<bool>,
    pub label: String,
}

const ALL_GOOD_LABEL: &str = "Launch, spin, and start line in optimal window.";
const NOTHING_KNOWN_LABEL: &str = "All windows off: adjust launch, spin, and start line.";

/// Check launch (deg), spin (RPM) and start line (deg) against `windows`.
pub fn assess(
    windows: &OptimalWindows,
    vla: Option<f64>,
    total_spin: Option<f64>,
    hla: Option<f64>,
) -> WindowAssessment {
    let launch_ok = vla.map(|v| units::within(v, windows.launch_deg));
    let spin_ok = total_spin.map(|s| units::within(s, windows.spin_rpm));
    let start_ok = hla.map(|h| units::within(h, windows.start_deg));

    let label = if launch_ok == Some(true) && spin_ok == Some(true) && start_ok == Some(true) {
        ALL_GOOD_LABEL.to_string()
    } else {
        let fragments: Vec<&str> = [
            launch_ok.map(|ok| if ok { "launch good" } else { "launch off" }),
            spin_ok.map(|ok| if ok { "spin good" } else { "spin off" }),
            start_ok.map(|ok| if ok { "start centered" } else { "start off" }),
        ]
        .into_iter()
        .flatten()
        .collect();
        if fragments.is_empty() {
            NOTHING_KNOWN_LABEL.to_string()
        } else {
            format!("{}.", capitalize(&fragments.join(", ")))
        }
    };

    WindowAssessment { launch_ok, spin_ok, start_ok, label }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Penalty for each window explicitly missed. Unknown windows cost nothing.
const WINDOW_MISS_PENALTY: f64 = 10.0;

/// 0–100 score from carry vs. Tour, dispersion, and the window checks.
pub fn quality_score(
    carry_yards: f64,
    offline_yards: f64,
    tour_carry_yards: f64,
    assessment: &WindowAssessment,
) -> f64 {
    let mut score = 100.0;
    score -= ((carry_yards - tour_carry_yards).abs() / 2.0).min(30.0);
    score -= (offline_yards.abs() / 5.0).min(25.0);
    for ok in [assessment.launch_ok, assessment.spin_ok, assessment.start_ok] {
        if ok == Some(false) {
            score -= WINDOW_MISS_PENALTY;
        }
    }
    units::clamp(score, 0.0, 100.0)
}
