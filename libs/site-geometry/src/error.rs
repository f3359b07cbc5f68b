//! # Error Types
//!
//! Error types for planar geometry operations. All errors are explicit and
//! carry enough context to tell which input or operation failed.
//!
//! ## Error Policy
//!
//! - Invalid input geometry is rejected at construction time
//! - Operations that produce nothing usable report `DegenerateOffset`
//!   so the caller can drop that single input and carry on

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during geometry construction or kernel operations.
///
/// ## Example
///
/// ```rust
/// use site_geometry::{GeometryError, Polygon, Vec2};
///
/// let result = Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);
/// assert!(matches!(result, Err(GeometryError::InvalidGeometry { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Input polygon or curve is empty, non-finite or self-intersecting.
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// What made the input unusable.
        reason: String,
    },

    /// An offset, scale or boolean produced no valid result for one input.
    #[error("Degenerate result from '{operation}': {reason}")]
    DegenerateOffset {
        /// Name of the operation (offset, scale, difference).
        operation: &'static str,
        /// Why the result was unusable.
        reason: String,
    },

    /// The clipping engine rejected its input.
    #[error("Clipper operation '{operation}' failed: {message}")]
    Clipper {
        /// Name of the clipping operation.
        operation: &'static str,
        /// Error message from the engine.
        message: String,
    },
}

impl GeometryError {
    /// Creates an invalid geometry error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate result error.
    pub fn degenerate(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateOffset {
            operation,
            reason: reason.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
