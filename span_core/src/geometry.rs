//! # Beam Geometry
//!
//! Converts a beam's horizontal-projected length and tilt angle into its true
//! inclined length, and maps the normalized position parameter `t` in [0, 1]
//! to points in drawing space.
//!
//! Two length spaces exist and never mix:
//!
//! - **Physical**: [`Beam::real_length`] in meters, used for every force-arm
//!   and distance calculation.
//! - **Drawing**: a fixed pixel bar length passed to [`position_on_beam`],
//!   used only to place things on a canvas.
//!
//! ## Example
//!
//! ```rust
//! use span_core::geometry::{Beam, compute_geometry};
//!
//! let beam = Beam::new(10.0, 0.0);
//! let geo = compute_geometry(&beam);
//! assert_eq!(geo.real_length_m, 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};

/// Below this |cos| the real-length conversion switches to the sine
/// denominator (beam within ~0.057 degrees of vertical).
pub const COS_SWITCHOVER: f64 = 1e-3;

/// A simply-supported beam: horizontal span as drawn plus tilt from
/// horizontal. The angle is unconstrained; trigonometry is periodic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Horizontal-projected length (m), must be positive
    pub projected_length_m: f64,

    /// Tilt from horizontal (degrees, counter-clockwise as drawn)
    pub angle_deg: f64,
}

impl Default for Beam {
    fn default() -> Self {
        Beam {
            projected_length_m: 10.0,
            angle_deg: 0.0,
        }
    }
}

impl Beam {
    /// Create a beam from projected length and tilt angle
    pub fn new(projected_length_m: f64, angle_deg: f64) -> Self {
        Beam {
            projected_length_m,
            angle_deg,
        }
    }

    /// Validate beam parameters.
    pub fn validate(&self) -> ModelResult<()> {
        if self.projected_length_m <= 0.0 {
            return Err(ModelError::invalid_input(
                "projected_length_m",
                self.projected_length_m.to_string(),
                "Beam length must be positive",
            ));
        }
        Ok(())
    }

    /// True length along the tilted axis (m).
    ///
    /// Normally `projected_length_m / cos(angle)`. When |cos| drops below
    /// [`COS_SWITCHOVER`] the divisor becomes `sin(angle)` instead, so a
    /// near-vertical beam never divides by a vanishing cosine. This is a
    /// numeric-stability approximation with a defined switchover, not an
    /// exact conversion; sin and cos are never simultaneously small, so the
    /// fallback denominator is always safe.
    pub fn real_length(&self) -> f64 {
        let rad = self.angle_deg.to_radians();
        let c = rad.cos();
        if c.abs() < COS_SWITCHOVER {
            self.projected_length_m / rad.sin()
        } else {
            self.projected_length_m / c
        }
    }
}

/// A direction in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// A point in drawing space (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Unit direction of the beam axis in drawing space.
///
/// Screen y grows downward, so the sine term is negated: a positive angle
/// rotates the drawn beam counter-clockwise.
pub fn unit_vector(angle_deg: f64) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2 {
        x: rad.cos(),
        y: -rad.sin(),
    }
}

/// Map normalized position `t` to a drawing-space point.
///
/// The beam is centered on `center` and drawn with a fixed pixel length
/// `bar_px`; `t` offsets `(t - 0.5) * bar_px` along the beam axis. Pixel
/// placement only — physical distances go through [`Beam::real_length`].
pub fn position_on_beam(t: f64, beam: &Beam, center: Point2, bar_px: f64) -> Point2 {
    let u = unit_vector(beam.angle_deg);
    Point2 {
        x: center.x + (t - 0.5) * bar_px * u.x,
        y: center.y + (t - 0.5) * bar_px * u.y,
    }
}

/// Derived geometry bundle handed to front ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamGeometry {
    /// True inclined length (m)
    pub real_length_m: f64,
    /// Unit direction of the beam axis in drawing space
    pub unit_vector: Vec2,
}

/// Compute the derived geometry for the current beam definition
pub fn compute_geometry(beam: &Beam) -> BeamGeometry {
    BeamGeometry {
        real_length_m: beam.real_length(),
        unit_vector: unit_vector(beam.angle_deg),
    }
}
