//! # Beam Model
//!
//! The root state container: one beam, two supports, the ordered list of
//! applied forces, the self-weight input, and the moment-reference choice.
//! Created once at startup, mutated in place for the lifetime of the
//! session, never persisted.
//!
//! Every mutator clamps or validates at the boundary, stamps the metadata,
//! and returns a fresh [`Snapshot`] of all derived outputs, so any front end
//! (canvas, native GUI, terminal) can re-render from the snapshot without
//! coupling to an event model. Nothing here caches derived state; geometry
//! and equilibrium are recomputed from current state on every request.
//!
//! ## Example
//!
//! ```rust
//! use span_core::model::BeamModel;
//!
//! let mut model = BeamModel::new();
//! let snap = model.add_force();
//! let reactions = snap.equilibrium.unwrap();
//! assert!((reactions.ay_n - 50.0).abs() < 1e-9);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ModelError, ModelResult};
use crate::geometry::{compute_geometry, Beam, BeamGeometry};
use crate::loads::{
    MomentReference, PointForce, DEFAULT_ANGLE_DEG, DEFAULT_MAGNITUDE_N, DEFAULT_T,
};
use crate::statics::{self, Reactions};

/// Current schema version for serialized models
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Model metadata: schema version plus lifecycle timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Schema version of this model
    pub version: String,
    /// When the model was created
    pub created: DateTime<Utc>,
    /// When the model was last mutated
    pub modified: DateTime<Utc>,
}

/// One of the two reaction points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportId {
    /// The pin support (horizontal + vertical reaction)
    A,
    /// The roller support (vertical reaction only)
    B,
}

/// A support's position as a fraction along the beam axis.
///
/// `t` is always in [0, 1]; 0 is the beam start, 1 the end. A and B are
/// independent and may sit in either order, or coincide (the solver reports
/// that as a degenerate configuration).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportPosition {
    /// Normalized position along the beam axis
    pub t: f64,
}

impl SupportPosition {
    /// Create a support position, clamping into [0, 1]
    pub fn new(t: f64) -> Self {
        SupportPosition { t: t.clamp(0.0, 1.0) }
    }
}

/// Derived display values for one stored force
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceReadout {
    /// Identity of the underlying force row
    pub id: Uuid,
    /// Magnitude (N)
    pub magnitude_n: f64,
    /// Direction (degrees)
    pub angle_deg: f64,
    /// Normalized position
    pub t: f64,
    /// Distance from support A along the beam axis (m, unsigned)
    pub distance_from_a_m: f64,
    /// Distance from support B along the beam axis (m, unsigned)
    pub distance_from_b_m: f64,
    /// Position as a percentage of the beam, 0-100
    pub percent: f64,
}

/// Everything a front end needs to redraw, computed fresh from current state.
///
/// The equilibrium field carries the degenerate-support case as a branchable
/// value: a caller refuses to update its reaction read-outs on `Err` while
/// still redrawing geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Derived beam geometry
    pub geometry: BeamGeometry,
    /// Support-to-support span (m, unsigned, for display)
    pub span_ab_m: f64,
    /// Per-force derived display values, in force-list order
    pub forces: Vec<ForceReadout>,
    /// Reactions and reference moment, or the typed failure
    pub equilibrium: Result<Reactions, ModelError>,
}

/// The structural state of one beam session.
///
/// Owns the beam definition, both supports, the persisted force list, the
/// self-weight input, and the moment-reference choice. All mutation goes
/// through the methods below; each clamps at the boundary so the stored
/// state always satisfies its invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamModel {
    /// Metadata (schema version, timestamps)
    pub meta: ModelMetadata,

    /// Beam definition
    pub beam: Beam,

    /// Pin support position
    pub support_a: SupportPosition,

    /// Roller support position
    pub support_b: SupportPosition,

    /// Persisted applied forces, in insertion order.
    ///
    /// The implicit self-weight force is never stored here; it is combined
    /// with this list at the solver-call boundary only.
    pub forces: Vec<PointForce>,

    /// Self-weight input (N). When positive, an extra midspan downward
    /// force of this magnitude joins the effective load set.
    pub self_weight_n: f64,

    /// Which support the reported moment is evaluated about
    pub moment_reference: MomentReference,
}

impl Default for BeamModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BeamModel {
    /// Create the startup state: default beam, supports at the two ends,
    /// no forces, no self-weight, moment reported about A.
    pub fn new() -> Self {
        let now = Utc::now();
        BeamModel {
            meta: ModelMetadata {
                version: SCHEMA_VERSION.to_string(),
                created: now,
                modified: now,
            },
            beam: Beam::default(),
            support_a: SupportPosition::new(0.0),
            support_b: SupportPosition::new(1.0),
            forces: Vec::new(),
            self_weight_n: 0.0,
            moment_reference: MomentReference::A,
        }
    }

    fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Unsigned metric length used by all distance conversions.
    ///
    /// The signed real length drives the solver; distances along the beam
    /// are reported and entered as unsigned meters.
    fn metric_length(&self) -> f64 {
        self.beam.real_length().abs()
    }

    // ------------------------------------------------------------------
    // Derived outputs
    // ------------------------------------------------------------------

    /// The effective load set: persisted forces plus the implicit
    /// self-weight force when the weight input is positive.
    pub fn effective_forces(&self) -> Vec<PointForce> {
        let mut list = self.forces.clone();
        if self.self_weight_n > 0.0 {
            list.push(PointForce::self_weight(self.self_weight_n));
        }
        list
    }

    /// Recompute every derived output from current state.
    pub fn snapshot(&self) -> Snapshot {
        let geometry = compute_geometry(&self.beam);
        let span_ab_m = (self.support_b.t - self.support_a.t).abs() * self.metric_length();
        let forces = self
            .forces
            .iter()
            .map(|f| ForceReadout {
                id: f.id,
                magnitude_n: f.magnitude_n,
                angle_deg: f.angle_deg,
                t: f.t,
                distance_from_a_m: self.t_to_distance_from_a(f.t),
                distance_from_b_m: self.t_to_distance_from_b(f.t),
                percent: f.t * 100.0,
            })
            .collect();
        let equilibrium = statics::solve(
            &self.effective_forces(),
            self.support_a,
            self.support_b,
            &self.beam,
            self.moment_reference,
        );

        Snapshot {
            geometry,
            span_ab_m,
            forces,
            equilibrium,
        }
    }

    // ------------------------------------------------------------------
    // Distance conversions
    // ------------------------------------------------------------------

    /// Convert a distance from support A (m) to a t value.
    ///
    /// The offset runs from A toward B, so the conversion round-trips with
    /// [`Self::t_to_distance_from_a`] whichever order the supports sit in.
    /// The distance is clamped into [0, real length] first, the result into
    /// [0, 1].
    pub fn distance_from_a_to_t(&self, distance_m: f64) -> f64 {
        let l = self.metric_length();
        let d = distance_m.clamp(0.0, l);
        let t = if self.support_a.t <= self.support_b.t {
            self.support_a.t + d / l
        } else {
            self.support_a.t - d / l
        };
        t.clamp(0.0, 1.0)
    }

    /// Distance from support A to position `t` (m, unsigned)
    pub fn t_to_distance_from_a(&self, t: f64) -> f64 {
        (t - self.support_a.t).abs() * self.metric_length()
    }

    /// Convert a distance from support B (m) to a t value; the offset runs
    /// from B toward A.
    pub fn distance_from_b_to_t(&self, distance_m: f64) -> f64 {
        let l = self.metric_length();
        let d = distance_m.clamp(0.0, l);
        let t = if self.support_a.t <= self.support_b.t {
            self.support_b.t - d / l
        } else {
            self.support_b.t + d / l
        };
        t.clamp(0.0, 1.0)
    }

    /// Distance from support B to position `t` (m, unsigned)
    pub fn t_to_distance_from_b(&self, t: f64) -> f64 {
        (self.support_b.t - t).abs() * self.metric_length()
    }

    /// Convert a 0-100 percentage to a t value
    pub fn percent_to_t(percent: f64) -> f64 {
        (percent / 100.0).clamp(0.0, 1.0)
    }

    // ------------------------------------------------------------------
    // Mutators (the contract surface toward any front end)
    // ------------------------------------------------------------------

    /// Append a force with the default magnitude, direction, and position.
    pub fn add_force(&mut self) -> Snapshot {
        self.forces
            .push(PointForce::new(DEFAULT_MAGNITUDE_N, DEFAULT_ANGLE_DEG, DEFAULT_T));
        self.touch();
        self.snapshot()
    }

    /// Remove the force at `index`.
    pub fn remove_force(&mut self, index: usize) -> ModelResult<Snapshot> {
        if index >= self.forces.len() {
            return Err(ModelError::force_not_found(index, self.forces.len()));
        }
        self.forces.remove(index);
        self.touch();
        Ok(self.snapshot())
    }

    fn force_mut(&mut self, index: usize) -> ModelResult<&mut PointForce> {
        let count = self.forces.len();
        self.forces
            .get_mut(index)
            .ok_or(ModelError::force_not_found(index, count))
    }

    /// Set a force's magnitude (clamped non-negative).
    pub fn set_force_magnitude(&mut self, index: usize, magnitude_n: f64) -> ModelResult<Snapshot> {
        self.force_mut(index)?.magnitude_n = magnitude_n.max(0.0);
        self.touch();
        Ok(self.snapshot())
    }

    /// Set a force's direction (clamped into [0, 360] degrees).
    pub fn set_force_angle(&mut self, index: usize, angle_deg: f64) -> ModelResult<Snapshot> {
        self.force_mut(index)?.angle_deg = angle_deg.clamp(0.0, 360.0);
        self.touch();
        Ok(self.snapshot())
    }

    /// Position a force by its distance from support A (m).
    pub fn set_force_distance_from_a(&mut self, index: usize, distance_m: f64) -> ModelResult<Snapshot> {
        let t = self.distance_from_a_to_t(distance_m);
        self.force_mut(index)?.t = t;
        self.touch();
        Ok(self.snapshot())
    }

    /// Position a force by its distance from support B (m).
    pub fn set_force_distance_from_b(&mut self, index: usize, distance_m: f64) -> ModelResult<Snapshot> {
        let t = self.distance_from_b_to_t(distance_m);
        self.force_mut(index)?.t = t;
        self.touch();
        Ok(self.snapshot())
    }

    /// Position a force by beam percentage (0-100).
    pub fn set_force_percent(&mut self, index: usize, percent: f64) -> ModelResult<Snapshot> {
        let t = Self::percent_to_t(percent);
        self.force_mut(index)?.t = t;
        self.touch();
        Ok(self.snapshot())
    }

    /// Move a support to `t` (clamped into [0, 1]).
    pub fn set_support_t(&mut self, which: SupportId, t: f64) -> Snapshot {
        let position = SupportPosition::new(t);
        match which {
            SupportId::A => self.support_a = position,
            SupportId::B => self.support_b = position,
        }
        self.touch();
        self.snapshot()
    }

    /// Set the beam's projected length. A non-positive value is rejected
    /// and the stored beam left unchanged.
    pub fn set_beam_length(&mut self, projected_length_m: f64) -> ModelResult<Snapshot> {
        let candidate = Beam::new(projected_length_m, self.beam.angle_deg);
        candidate.validate()?;
        self.beam = candidate;
        self.touch();
        Ok(self.snapshot())
    }

    /// Set the beam's tilt angle (any value; trigonometry is periodic).
    pub fn set_beam_angle(&mut self, angle_deg: f64) -> Snapshot {
        self.beam.angle_deg = angle_deg;
        self.touch();
        self.snapshot()
    }

    /// Set the self-weight input (clamped non-negative).
    pub fn set_self_weight(&mut self, weight_n: f64) -> Snapshot {
        self.self_weight_n = weight_n.max(0.0);
        self.touch();
        self.snapshot()
    }

    /// Set the support-to-support span (m) by moving B away from A in its
    /// current direction, so whichever support was lower in t stays lower.
    pub fn set_span_ab(&mut self, span_m: f64) -> Snapshot {
        let l = self.metric_length();
        let v = span_m.clamp(0.0, l);
        let t_b = if self.support_a.t <= self.support_b.t {
            self.support_a.t + v / l
        } else {
            self.support_a.t - v / l
        };
        self.support_b = SupportPosition::new(t_b);
        self.touch();
        self.snapshot()
    }

    /// Choose which support the reported moment is evaluated about.
    pub fn set_moment_reference(&mut self, reference: MomentReference) -> Snapshot {
        self.moment_reference = reference;
        self.touch();
        self.snapshot()
    }
}
