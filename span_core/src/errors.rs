//! # Error Types
//!
//! Structured error types for span_core. Every failure mode that can cross
//! the engine boundary is a typed variant with enough context for a caller
//! to branch on it programmatically.
//!
//! ## Example
//!
//! ```rust
//! use span_core::errors::{ModelError, ModelResult};
//!
//! fn validate_length(length_m: f64) -> ModelResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(ModelError::InvalidInput {
//!             field: "projected_length_m".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Beam length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for span_core operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Structured error type for beam model operations.
///
/// Each variant provides specific context about what went wrong. The
/// degenerate-span variant in particular is part of the solver contract:
/// front ends branch on it to refuse updating reaction read-outs while the
/// supports coincide.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ModelError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A force index does not refer to a stored force
    #[error("No force at index {index} (force list has {count} entries)")]
    ForceNotFound { index: usize, count: usize },

    /// Both supports sit at the same position, so moment equilibrium about
    /// one of them cannot determine the other reaction
    #[error("Degenerate support configuration: A and B coincide at t = {t_a}")]
    DegenerateSpan { t_a: f64, t_b: f64 },
}

impl ModelError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ModelError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ForceNotFound error
    pub fn force_not_found(index: usize, count: usize) -> Self {
        ModelError::ForceNotFound { index, count }
    }

    /// Create a DegenerateSpan error
    pub fn degenerate_span(t_a: f64, t_b: f64) -> Self {
        ModelError::DegenerateSpan { t_a, t_b }
    }

    /// Check if this is a recoverable condition (the user can fix it by
    /// moving state, e.g. dragging a support apart)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ModelError::DegenerateSpan { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ModelError::InvalidInput { .. } => "INVALID_INPUT",
            ModelError::ForceNotFound { .. } => "FORCE_NOT_FOUND",
            ModelError::DegenerateSpan { .. } => "DEGENERATE_SPAN",
        }
    }
}
