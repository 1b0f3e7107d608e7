//! # Static Equilibrium Solver
//!
//! Computes the statically-determinate reactions of a simply-supported beam
//! under a list of point forces, assuming the classic pin + roller
//! idealization: support A provides a horizontal and a vertical reaction,
//! support B a vertical reaction only. A bending moment is also evaluated
//! about a chosen reference support.
//!
//! ## Sign Convention
//! - Force components are up-positive physical y ([`PointForce::components`]).
//! - The span `(t_b - t_a) * real_length` is signed; B left of A simply
//!   flips it, and the reactions come out right without any special casing.
//! - The reported moment's arm re-bases with the reference support so its
//!   physical meaning (sagging/hogging) is the same from either end.
//!
//! ## Example
//! ```rust
//! use span_core::geometry::Beam;
//! use span_core::loads::{MomentReference, PointForce};
//! use span_core::model::SupportPosition;
//! use span_core::statics::solve;
//!
//! // 10 m flat beam, supports at the ends, 100 N straight down at midspan
//! let beam = Beam::new(10.0, 0.0);
//! let forces = vec![PointForce::new(100.0, 270.0, 0.5)];
//! let r = solve(
//!     &forces,
//!     SupportPosition::new(0.0),
//!     SupportPosition::new(1.0),
//!     &beam,
//!     MomentReference::A,
//! )
//! .unwrap();
//!
//! assert!((r.ay_n - 50.0).abs() < 1e-9);
//! assert!((r.by_n - 50.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};
use crate::geometry::Beam;
use crate::loads::{MomentReference, PointForce};
use crate::model::SupportPosition;

/// Supports closer together than this in t are treated as coincident
const DEGENERATE_EPS: f64 = 1e-12;

/// Support reactions and reference-point bending moment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Horizontal reaction at support A (N)
    pub ax_n: f64,
    /// Vertical reaction at support A (N)
    pub ay_n: f64,
    /// Vertical reaction at support B (N)
    pub by_n: f64,
    /// Bending moment about the chosen reference support (N·m)
    pub moment_nm: f64,
}

/// Solve for the support reactions and the reference-point bending moment.
///
/// The force slice is the effective load set: callers that model self-weight
/// combine it in before calling (see `BeamModel`). Returns
/// [`ModelError::DegenerateSpan`] when the supports coincide, since moment
/// equilibrium about A can no longer determine the reaction at B.
pub fn solve(
    forces: &[PointForce],
    support_a: SupportPosition,
    support_b: SupportPosition,
    beam: &Beam,
    reference: MomentReference,
) -> ModelResult<Reactions> {
    let real_length = beam.real_length();
    let t_a = support_a.t;
    let t_b = support_b.t;

    if (t_b - t_a).abs() < DEGENERATE_EPS {
        return Err(ModelError::degenerate_span(t_a, t_b));
    }

    let mut sum_fx = 0.0;
    let mut sum_fy = 0.0;
    let mut ma = 0.0;
    for f in forces {
        let (fx, fy) = f.components();
        sum_fx += fx;
        sum_fy += fy;
        ma += fy * (f.t - t_a) * real_length;
    }

    // Signed span: preserving the sign keeps reactions correct when B sits
    // on the A side of the beam.
    let ls = (t_b - t_a) * real_length;
    let by = -ma / ls;
    let ay = -sum_fy - by;
    let ax = -sum_fx;

    let moment = forces
        .iter()
        .map(|f| {
            let (_, fy) = f.components();
            let arm = match reference {
                MomentReference::A => (f.t - t_a) * real_length,
                MomentReference::B => (t_b - f.t) * real_length,
            };
            fy * arm
        })
        .sum();

    Ok(Reactions {
        ax_n: ax,
        ay_n: ay,
        by_n: by,
        moment_nm: moment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn end_supports() -> (SupportPosition, SupportPosition) {
        (SupportPosition::new(0.0), SupportPosition::new(1.0))
    }

    #[test]
    fn test_midspan_point_load() {
        // 10 m flat beam, 100 N down at midspan: each support carries half
        let beam = Beam::new(10.0, 0.0);
        let (a, b) = end_supports();
        let forces = vec![PointForce::new(100.0, 270.0, 0.5)];

        let r = solve(&forces, a, b, &beam, MomentReference::A).unwrap();
        assert!(approx_eq(r.ax_n, 0.0, EPSILON));
        assert!(approx_eq(r.ay_n, 50.0, EPSILON));
        assert!(approx_eq(r.by_n, 50.0, EPSILON));
        assert!(approx_eq(r.moment_nm, -500.0, EPSILON));
    }

    #[test]
    fn test_quarter_span_lever_arms() {
        // Load at t = 0.25 splits 75/25 between the near and far supports
        let beam = Beam::new(10.0, 0.0);
        let (a, b) = end_supports();
        let forces = vec![PointForce::new(100.0, 270.0, 0.25)];

        let r = solve(&forces, a, b, &beam, MomentReference::A).unwrap();
        assert!(approx_eq(r.ay_n, 75.0, EPSILON));
        assert!(approx_eq(r.by_n, 25.0, EPSILON));
    }

    #[test]
    fn test_global_equilibrium() {
        // Mixed force set: force and moment sums must close to zero
        let beam = Beam::new(8.0, 15.0);
        let (a, b) = end_supports();
        let forces = vec![
            PointForce::new(120.0, 270.0, 0.3),
            PointForce::new(80.0, 45.0, 0.7),
            PointForce::new(40.0, 180.0, 0.1),
        ];

        let r = solve(&forces, a, b, &beam, MomentReference::A).unwrap();

        let (sum_fx, sum_fy) = forces.iter().fold((0.0, 0.0), |(x, y), f| {
            let (fx, fy) = f.components();
            (x + fx, y + fy)
        });
        assert!(approx_eq(r.ax_n + sum_fx, 0.0, EPSILON));
        assert!(approx_eq(r.ay_n + r.by_n + sum_fy, 0.0, EPSILON));
    }

    #[test]
    fn test_moment_equilibrium_about_a() {
        // Sum of force moments about A plus By * Ls must vanish
        let beam = Beam::new(12.0, 0.0);
        let a = SupportPosition::new(0.1);
        let b = SupportPosition::new(0.9);
        let forces = vec![
            PointForce::new(200.0, 270.0, 0.4),
            PointForce::new(150.0, 300.0, 0.75),
        ];

        let r = solve(&forces, a, b, &beam, MomentReference::A).unwrap();

        let l = beam.real_length();
        let ma: f64 = forces
            .iter()
            .map(|f| f.components().1 * (f.t - a.t) * l)
            .sum();
        let ls = (b.t - a.t) * l;
        assert!(approx_eq(ma + r.by_n * ls, 0.0, 1e-6));
    }

    #[test]
    fn test_reversed_supports_keep_sign() {
        // A at the far end, B at the start; load 2.5 m from B
        let beam = Beam::new(10.0, 0.0);
        let a = SupportPosition::new(1.0);
        let b = SupportPosition::new(0.0);
        let forces = vec![PointForce::new(100.0, 270.0, 0.25)];

        let r = solve(&forces, a, b, &beam, MomentReference::A).unwrap();
        assert!(approx_eq(r.by_n, 75.0, EPSILON));
        assert!(approx_eq(r.ay_n, 25.0, EPSILON));
    }

    #[test]
    fn test_reference_switch_rebases_arm() {
        let beam = Beam::new(10.0, 0.0);
        let (a, b) = end_supports();
        let forces = vec![
            PointForce::new(100.0, 270.0, 0.25),
            PointForce::new(60.0, 270.0, 0.8),
        ];

        let at_a = solve(&forces, a, b, &beam, MomentReference::A).unwrap();
        let at_b = solve(&forces, a, b, &beam, MomentReference::B).unwrap();

        let l = beam.real_length();
        let expected_a: f64 = forces
            .iter()
            .map(|f| f.components().1 * (f.t - a.t) * l)
            .sum();
        let expected_b: f64 = forces
            .iter()
            .map(|f| f.components().1 * (b.t - f.t) * l)
            .sum();
        assert!(approx_eq(at_a.moment_nm, expected_a, EPSILON));
        assert!(approx_eq(at_b.moment_nm, expected_b, EPSILON));

        // Reactions are independent of the chosen reference
        assert!(approx_eq(at_a.ay_n, at_b.ay_n, EPSILON));
        assert!(approx_eq(at_a.by_n, at_b.by_n, EPSILON));
    }

    #[test]
    fn test_inclined_beam_uses_real_length() {
        // 60 degree tilt doubles the real length; proportions are unchanged
        let beam = Beam::new(10.0, 60.0);
        let (a, b) = end_supports();
        let forces = vec![PointForce::new(100.0, 270.0, 0.25)];

        let r = solve(&forces, a, b, &beam, MomentReference::A).unwrap();
        assert!(approx_eq(r.ay_n, 75.0, EPSILON));
        assert!(approx_eq(r.by_n, 25.0, EPSILON));
        // Moment scales with the doubled arm
        assert!(approx_eq(r.moment_nm, -100.0 * 0.25 * 20.0, 1e-6));
    }

    #[test]
    fn test_degenerate_span_is_typed_error() {
        let beam = Beam::new(10.0, 0.0);
        let a = SupportPosition::new(0.5);
        let b = SupportPosition::new(0.5);
        let forces = vec![PointForce::new(100.0, 270.0, 0.5)];

        let err = solve(&forces, a, b, &beam, MomentReference::A).unwrap_err();
        assert_eq!(err, ModelError::degenerate_span(0.5, 0.5));
        assert_eq!(err.error_code(), "DEGENERATE_SPAN");
    }

    #[test]
    fn test_empty_force_list_is_all_zero() {
        let beam = Beam::new(10.0, 0.0);
        let (a, b) = end_supports();

        let r = solve(&[], a, b, &beam, MomentReference::B).unwrap();
        assert_eq!(r.ax_n, 0.0);
        assert_eq!(r.ay_n, 0.0);
        assert_eq!(r.by_n, 0.0);
        assert_eq!(r.moment_nm, 0.0);
    }
}
