//! Uniform scaling and curve evaluation.

use crate::core::curve::Curve;
use crate::core::polygon::Polygon;
use crate::core::vec2::Vec2;
use crate::error::{GeometryError, GeometryResult};

/// Scales `polygon` uniformly about `center`.
///
/// The result is counter-clockwise; its area is the input area times
/// `factor` squared.
///
/// # Errors
///
/// `GeometryError::DegenerateOffset` when `factor` is not a positive finite
/// number or the scaled ring collapses.
///
/// # Example
///
/// ```rust
/// use site_geometry::ops::transform::scale;
/// use site_geometry::{Polygon, Vec2};
///
/// let lot = Polygon::rectangle(Vec2::ZERO, Vec2::new(10.0, 10.0)).unwrap();
/// let half = scale(&lot, Vec2::ZERO, 0.5).unwrap();
/// assert_eq!(half.area(), 25.0);
/// ```
pub fn scale(polygon: &Polygon, center: Vec2, factor: f64) -> GeometryResult<Polygon> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(GeometryError::degenerate(
            "scale",
            format!("factor must be positive, got {factor}"),
        ));
    }

    let vertices = polygon
        .vertices()
        .iter()
        .map(|v| center + (*v - center) * factor)
        .collect();

    Polygon::from_loop(vertices)
        .ok_or_else(|| GeometryError::degenerate("scale", "scaled region collapsed"))
}

/// Point at normalized arc-length parameter `t` of `curve`.
pub fn point_at_parameter(curve: &Curve, t: f64) -> Vec2 {
    curve.point_at_parameter(t)
}
