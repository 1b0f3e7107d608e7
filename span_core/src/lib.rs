//! # span_core - Beam Statics Engine
//!
//! `span_core` is the computational heart of Spanwise: the geometry,
//! structural state, and static-equilibrium solver for an interactively
//! edited simply-supported beam. All inputs and outputs are
//! JSON-serializable, so any front end (canvas, native GUI, terminal) can
//! drive it and render from its snapshots.
//!
//! ## Design Philosophy
//!
//! - **Recompute, don't cache**: every derived value (geometry,
//!   equilibrium) is a pure function of current state, recomputed on each
//!   request
//! - **Command surface**: every mutator clamps at the boundary and returns
//!   a fresh snapshot of all derived outputs
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings; the
//!   degenerate support configuration is a branchable value, never a NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use span_core::model::BeamModel;
//!
//! let mut model = BeamModel::new();
//! model.add_force();
//! let snap = model.set_self_weight(50.0);
//!
//! match snap.equilibrium {
//!     Ok(r) => println!("Ay = {:.2} N, By = {:.2} N", r.ay_n, r.by_n),
//!     Err(e) => println!("invalid configuration: {}", e),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Structural state container and its mutator surface
//! - [`geometry`] - Inclined-length conversion and drawing-space mapping
//! - [`statics`] - Static-equilibrium solver (reactions + moment)
//! - [`loads`] - Point forces and the moment-reference choice
//! - [`errors`] - Structured error types

pub mod errors;
pub mod geometry;
pub mod loads;
pub mod model;
pub mod statics;

// Re-export commonly used types at crate root for convenience
pub use errors::{ModelError, ModelResult};
pub use geometry::{compute_geometry, position_on_beam, Beam, BeamGeometry};
pub use loads::{MomentReference, PointForce};
pub use model::{BeamModel, Snapshot, SupportId, SupportPosition};
pub use statics::{solve, Reactions};
