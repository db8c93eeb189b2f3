//! Backspin / sidespin decomposition.

/// Spin split along the spin axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinComponents {
    /// Backspin (RPM)
    pub backspin: f64,
    /// Sidespin (RPM, neg = draw side)
    pub sidespin: f64,
}

impl SpinComponents {
    /// Split `total_spin` (RPM) by `spin_axis` (deg). Negative spin counts as zero.
    pub fn from_axis(total_spin: f64, spin_axis: f64) -> Self {
        let total = total_spin.max(0.0);
        let axis = spin_axis.to_radians();
        Self {
            backspin: total * axis.cos(),
            sidespin: total * axis.sin(),
        }
    }

    /// Magnitude of the combined spin vector.
    pub fn total(&self) -> f64 {
        self.backspin.hypot(self.sidespin)
    }
}
