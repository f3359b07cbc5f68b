//! 2D vector definitions for the geometry kernel.
//!
//! Provides type alias for `glam::DVec2` and the few helpers glam lacks.

pub use glam::DVec2 as Vec2;

/// Z component of the cross product of two planar vectors.
///
/// # Examples
/// ```
/// use site_geometry::core::vec2::{cross, Vec2};
///
/// assert_eq!(cross(Vec2::X, Vec2::Y), 1.0);
/// assert_eq!(cross(Vec2::Y, Vec2::X), -1.0);
/// ```
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Distance from `point` to the segment `a`-`b`.
///
/// Degenerate segments fall back to the distance to `a`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Exact orientation of `c` relative to the directed line `a`-`b`.
///
/// Positive when `a`, `b`, `c` turn counter-clockwise, negative when
/// clockwise and zero when collinear.
#[inline]
pub fn orient(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    )
}

/// Returns true when the closed segments `p1`-`p2` and `q1`-`q2` share any point.
///
/// Collinear overlaps and endpoint contact count as intersections.
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if opposite_signs(d1, d2) && opposite_signs(d3, d4) {
        return true;
    }

    (d1 == 0.0 && within_box(q1, q2, p1))
        || (d2 == 0.0 && within_box(q1, q2, p2))
        || (d3 == 0.0 && within_box(p1, p2, q1))
        || (d4 == 0.0 && within_box(p1, p2, q2))
}

/// Returns true when the segments cross at a single point interior to both.
pub fn segments_cross(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    opposite_signs(orient(q1, q2, p1), orient(q1, q2, p2))
        && opposite_signs(orient(p1, p2, q1), orient(p1, p2, q2))
}

#[inline]
fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Checks that `p` lies in the axis-aligned box spanned by `a` and `b`.
#[inline]
fn within_box(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests;
