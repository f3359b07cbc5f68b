//! Offset operation for site polygons.
//!
//! Offsets use mitered corners so rectilinear lots stay rectilinear.
//! Several polygons offset together are unioned by the clipping engine.

use clipper2::{EndType, JoinType};

use super::utils::{from_paths, to_paths};
use crate::core::polygon::Polygon;
use crate::error::{GeometryError, GeometryResult};
use config::constants::EPSILON;

/// Which way a boundary moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetDirection {
    /// Shrink each region (erosion).
    Inward,
    /// Grow each region (dilation).
    Outward,
}

/// Parameters for an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetParams {
    /// Non-negative distance to move the boundary.
    pub distance: f64,
    /// Inward or outward.
    pub direction: OffsetDirection,
    /// Miter limit, as a multiple of the distance.
    pub miter_limit: f64,
    /// Loops at or below this area are dropped from the result.
    pub area_tol: f64,
}

/// Offsets every polygon by the same distance.
///
/// The sense is per polygon: `Inward` shrinks each region regardless of how
/// its ring is oriented. Loops that collapse are left out of the result, so
/// an inward offset of a thin region may return nothing. A zero distance
/// returns the inputs unchanged.
///
/// # Errors
///
/// `GeometryError::InvalidGeometry` when the distance is negative or not
/// finite, or the miter limit is below 1.
pub fn offset(polygons: &[Polygon], params: &OffsetParams) -> GeometryResult<Vec<Polygon>> {
    if !params.distance.is_finite() || params.distance < 0.0 {
        return Err(GeometryError::invalid(format!(
            "offset distance must be non-negative, got {}",
            params.distance
        )));
    }
    if params.miter_limit.is_nan() || params.miter_limit < 1.0 {
        return Err(GeometryError::invalid(format!(
            "miter limit must be at least 1, got {}",
            params.miter_limit
        )));
    }

    if polygons.is_empty() {
        return Ok(Vec::new());
    }
    if params.distance <= EPSILON {
        return Ok(polygons.to_vec());
    }

    // Rings go in counter-clockwise, where a positive delta grows them
    let delta = match params.direction {
        OffsetDirection::Inward => -params.distance,
        OffsetDirection::Outward => params.distance,
    };

    let paths = to_paths(polygons);
    let result = paths.inflate(delta, JoinType::Miter, EndType::Polygon, params.miter_limit);
    Ok(from_paths(result, params.area_tol))
}
