//! Closed planar polygon used for lots, footprints and candidate regions.
//!
//! A `Polygon` is a single simple ring stored without a repeated closing
//! vertex. Instances are validated at construction and never mutated in
//! place: orientation changes and transformations return new values.

use serde::{Deserialize, Serialize};

use crate::core::curve::Curve;
use crate::core::vec2::{cross, distance_to_segment, orient, segments_intersect, Vec2};
use crate::error::{GeometryError, GeometryResult};
use config::constants::EPSILON;

/// A simple closed polygon in the shared site plane.
///
/// # Example
///
/// ```rust
/// use site_geometry::{Polygon, Vec2};
///
/// let square = Polygon::rectangle(Vec2::ZERO, Vec2::new(10.0, 10.0)).unwrap();
/// assert_eq!(square.area(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a validated polygon from its ring of vertices.
    ///
    /// A trailing vertex equal to the first one is dropped, as are
    /// consecutive duplicates.
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidGeometry` when fewer than 3 distinct vertices
    /// remain, a coordinate is not finite, the area is zero or the ring
    /// intersects itself.
    pub fn new(vertices: Vec<Vec2>) -> GeometryResult<Self> {
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::invalid("polygon has non-finite coordinates"));
        }

        let vertices = clean_ring(vertices);
        if vertices.len() < 3 {
            return Err(GeometryError::invalid(format!(
                "polygon needs at least 3 distinct vertices, got {}",
                vertices.len()
            )));
        }

        if ring_signed_area(&vertices).abs() <= EPSILON {
            return Err(GeometryError::invalid("polygon has zero area"));
        }

        if let Some((i, j)) = find_self_intersection(&vertices) {
            return Err(GeometryError::invalid(format!(
                "polygon edges {i} and {j} intersect"
            )));
        }

        Ok(Self { vertices })
    }

    /// Creates an axis-aligned rectangle from two opposite corners.
    pub fn rectangle(min: Vec2, max: Vec2) -> GeometryResult<Self> {
        Self::new(vec![
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ])
    }

    /// Wraps a loop produced by a kernel operation.
    ///
    /// Only degeneracy is checked; the clipping engine guarantees the rest.
    /// Returns `None` when the loop has collapsed.
    pub(crate) fn from_loop(vertices: Vec<Vec2>) -> Option<Self> {
        let vertices = clean_ring(vertices);
        if vertices.len() < 3 || ring_signed_area(&vertices).abs() <= EPSILON {
            return None;
        }
        Some(Self { vertices }.to_ccw())
    }

    /// Ring vertices without the closing duplicate.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the edges of the ring, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        ring_signed_area(&self.vertices)
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns true when the ring runs counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns the same region with counter-clockwise orientation.
    pub fn to_ccw(&self) -> Self {
        if self.is_ccw() {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Returns the same region with clockwise orientation.
    pub fn to_cw(&self) -> Self {
        if self.is_ccw() {
            self.reversed()
        } else {
            self.clone()
        }
    }

    fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// The boundary as a closed curve.
    pub fn boundary(&self) -> Curve {
        Curve::from_ring(self.vertices.clone())
    }

    /// Perimeter length.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance(b)).sum()
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (Vec2, Vec2) {
        self.vertices.iter().fold(
            (Vec2::splat(f64::INFINITY), Vec2::splat(f64::NEG_INFINITY)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        )
    }

    /// Shortest distance from `point` to the boundary.
    pub fn distance_to_boundary(&self, point: Vec2) -> f64 {
        self.edges()
            .map(|(a, b)| distance_to_segment(point, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Winding number of the ring around `point`.
    ///
    /// Points on the boundary give an unspecified result; pair this with
    /// `distance_to_boundary` when the boundary matters.
    pub fn winding_number(&self, point: Vec2) -> i32 {
        let mut winding = 0;
        for (a, b) in self.edges() {
            if a.y <= point.y {
                if b.y > point.y && orient(a, b, point) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= point.y && orient(a, b, point) < 0.0 {
                winding -= 1;
            }
        }
        winding
    }

    /// Returns true when `point` lies in the interior of the polygon.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.winding_number(point) != 0
    }
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

// =============================================================================
// RING HELPERS
// =============================================================================

/// Drops consecutive duplicates and a closing vertex equal to the first one.
pub(crate) fn clean_ring(vertices: Vec<Vec2>) -> Vec<Vec2> {
    let mut ring: Vec<Vec2> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if ring.last().map_or(true, |last| last.distance(v) > EPSILON) {
            ring.push(v);
        }
    }
    while ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) <= EPSILON {
        ring.pop();
    }
    ring
}

/// Shoelace formula over a ring without closing duplicate.
pub(crate) fn ring_signed_area(ring: &[Vec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n).map(|i| cross(ring[i], ring[(i + 1) % n])).sum();
    twice / 2.0
}

/// Finds the first pair of edges that violates simplicity.
///
/// Non-adjacent edges must not touch at all; adjacent edges must not fold
/// back over each other.
fn find_self_intersection(ring: &[Vec2]) -> Option<(usize, usize)> {
    let n = ring.len();
    let edge = |i: usize| (ring[i], ring[(i + 1) % n]);

    for i in 0..n {
        let (a1, a2) = edge(i);
        for j in (i + 1)..n {
            let (b1, b2) = edge(j);
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                // Shared vertex is a2 == b1 (or b2 == a1 for the closing pair)
                let (shared, before, after) = if j == i + 1 { (a2, a1, b2) } else { (a1, a2, b1) };
                if orient(before, shared, after) == 0.0 && (before - shared).dot(after - shared) > 0.0 {
                    return Some((i, j));
                }
            } else if segments_intersect(a1, a2, b1, b2) {
                return Some((i, j));
            }
        }
    }
    None
}
