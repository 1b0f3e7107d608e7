//! # Applied Forces
//!
//! Point forces applied to the beam, positioned by the normalized parameter
//! `t` in [0, 1] along the beam axis.
//!
//! Angles are measured counter-clockwise from the beam-drawing +x axis.
//! Component decomposition uses the conventional up-positive physical y
//! axis: a 90-degree force is physically upward (positive fy), a 270-degree
//! force straight down (negative fy). The screen-space y inversion is a
//! drawing concern and lives in [`crate::geometry::unit_vector`] alone.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default magnitude for a newly added force (N)
pub const DEFAULT_MAGNITUDE_N: f64 = 100.0;
/// Default angle for a newly added force (degrees, straight down)
pub const DEFAULT_ANGLE_DEG: f64 = 270.0;
/// Default position for a newly added force (midspan)
pub const DEFAULT_T: f64 = 0.5;

// Self-weight always acts straight down at midspan
const WEIGHT_ANGLE_DEG: f64 = 270.0;
const WEIGHT_T: f64 = 0.5;

/// A single point force on the beam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointForce {
    /// Unique identifier for this force (for UI row management)
    pub id: Uuid,

    /// Magnitude (N), non-negative
    pub magnitude_n: f64,

    /// Direction (degrees CCW from the drawing +x axis)
    pub angle_deg: f64,

    /// Normalized position along the beam axis, in [0, 1]
    pub t: f64,
}

impl PointForce {
    /// Create a point force. Magnitude is clamped non-negative and the
    /// position clamped into [0, 1].
    pub fn new(magnitude_n: f64, angle_deg: f64, t: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            magnitude_n: magnitude_n.max(0.0),
            angle_deg,
            t: t.clamp(0.0, 1.0),
        }
    }

    /// The implicit self-weight force: straight down at midspan.
    ///
    /// Derived on demand from the current weight input and combined with the
    /// persisted force list only at the solver-call boundary; it is never
    /// stored in the list.
    pub fn self_weight(magnitude_n: f64) -> Self {
        Self::new(magnitude_n, WEIGHT_ANGLE_DEG, WEIGHT_T)
    }

    /// Decompose into physical components `(fx, fy)`, up-positive y.
    ///
    /// `fy = mag * sin(angle)`: 90 degrees is physically upward and yields
    /// positive fy. This convention propagates into every reaction and
    /// moment value the solver reports.
    pub fn components(&self) -> (f64, f64) {
        let rad = self.angle_deg.to_radians();
        (
            self.magnitude_n * rad.cos(),
            self.magnitude_n * rad.sin(),
        )
    }
}

/// Which support the reported bending moment is evaluated about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MomentReference {
    /// Support A (pin: horizontal + vertical reaction)
    #[default]
    A,
    /// Support B (roller: vertical reaction only)
    B,
}

impl MomentReference {
    /// Single-letter label used in displays
    pub fn code(&self) -> &'static str {
        match self {
            MomentReference::A => "A",
            MomentReference::B => "B",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            MomentReference::A => "Moment about support A",
            MomentReference::B => "Moment about support B",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_downward_force_components() {
        let f = PointForce::new(100.0, 270.0, 0.5);
        let (fx, fy) = f.components();
        assert!(approx_eq(fx, 0.0, 1e-9));
        assert!(approx_eq(fy, -100.0, 1e-9));
    }

    #[test]
    fn test_upward_force_components() {
        let f = PointForce::new(100.0, 90.0, 0.5);
        let (fx, fy) = f.components();
        assert!(approx_eq(fx, 0.0, 1e-9));
        assert!(approx_eq(fy, 100.0, 1e-9));
    }

    #[test]
    fn test_axial_force_components() {
        let f = PointForce::new(100.0, 0.0, 0.5);
        let (fx, fy) = f.components();
        assert!(approx_eq(fx, 100.0, 1e-9));
        assert!(approx_eq(fy, 0.0, 1e-9));
    }

    #[test]
    fn test_new_clamps_inputs() {
        let f = PointForce::new(-50.0, 45.0, 1.7);
        assert_eq!(f.magnitude_n, 0.0);
        assert_eq!(f.t, 1.0);
    }

    #[test]
    fn test_self_weight_is_midspan_down() {
        let w = PointForce::self_weight(250.0);
        assert_eq!(w.angle_deg, 270.0);
        assert_eq!(w.t, 0.5);
        assert_eq!(w.magnitude_n, 250.0);
    }

    #[test]
    fn test_reference_codes() {
        assert_eq!(MomentReference::A.code(), "A");
        assert_eq!(MomentReference::B.code(), "B");
        assert_eq!(MomentReference::default(), MomentReference::A);
    }
}
