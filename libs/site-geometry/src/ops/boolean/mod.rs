//! Boolean operations on polygon sets.

use clipper2::FillRule;

use super::utils::{from_paths, to_paths};
use crate::core::polygon::Polygon;
use crate::error::{GeometryError, GeometryResult};

/// Subtracts `clip` from `subject`.
///
/// Both inputs are treated as unions of their polygons. Each loop of the
/// result, holes included, comes back as its own counter-clockwise polygon;
/// loops at or below `area_tol` are dropped.
///
/// # Errors
///
/// `GeometryError::Clipper` when the clipping engine rejects the input.
pub fn difference(
    subject: &[Polygon],
    clip: &[Polygon],
    area_tol: f64,
) -> GeometryResult<Vec<Polygon>> {
    if subject.is_empty() {
        return Ok(Vec::new());
    }

    let result = clipper2::difference(to_paths(subject), to_paths(clip), FillRule::NonZero)
        .map_err(|e| GeometryError::Clipper {
            operation: "difference",
            message: format!("{e:?}"),
        })?;

    Ok(from_paths(result, area_tol))
}
