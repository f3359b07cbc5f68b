//! Planar polylines for road edges, boundaries and overlap pieces.

use serde::{Deserialize, Serialize};

use crate::core::polygon::clean_ring;
use crate::core::vec2::Vec2;
use crate::error::{GeometryError, GeometryResult};
use config::constants::EPSILON;

/// An open or closed polyline.
///
/// # Example
///
/// ```rust
/// use site_geometry::{Curve, Vec2};
///
/// let road = Curve::open(vec![Vec2::ZERO, Vec2::new(100.0, 0.0)]).unwrap();
/// assert_eq!(road.length(), 100.0);
/// assert_eq!(road.point_at_parameter(0.5), Vec2::new(50.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveRepr", into = "CurveRepr")]
pub struct Curve {
    points: Vec<Vec2>,
    closed: bool,
}

#[derive(Clone, Serialize, Deserialize)]
struct CurveRepr {
    points: Vec<Vec2>,
    #[serde(default)]
    closed: bool,
}

impl Curve {
    /// Creates a validated curve.
    ///
    /// # Errors
    ///
    /// `GeometryError::InvalidGeometry` when a coordinate is not finite, fewer
    /// than 2 distinct points remain (3 for a closed curve) or the length is
    /// zero.
    pub fn new(points: Vec<Vec2>, closed: bool) -> GeometryResult<Self> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeometryError::invalid("curve has non-finite coordinates"));
        }

        let points = if closed {
            clean_ring(points)
        } else {
            dedup_points(points)
        };

        let needed = if closed { 3 } else { 2 };
        if points.len() < needed {
            return Err(GeometryError::invalid(format!(
                "curve needs at least {needed} distinct points, got {}",
                points.len()
            )));
        }

        let curve = Self { points, closed };
        if curve.length() <= EPSILON {
            return Err(GeometryError::invalid("curve has zero length"));
        }
        Ok(curve)
    }

    /// Creates an open polyline.
    pub fn open(points: Vec<Vec2>) -> GeometryResult<Self> {
        Self::new(points, false)
    }

    /// Creates a closed polyline.
    pub fn closed(points: Vec<Vec2>) -> GeometryResult<Self> {
        Self::new(points, true)
    }

    /// Creates a single straight segment.
    pub fn line(start: Vec2, end: Vec2) -> GeometryResult<Self> {
        Self::new(vec![start, end], false)
    }

    /// Boundary of an already validated ring.
    pub(crate) fn from_ring(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Polyline assembled from overlap pieces; callers ensure 2+ points.
    pub(crate) fn from_points_unchecked(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Curve vertices; closed curves do not repeat the first point.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Returns true when the last point connects back to the first.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Iterates over the straight segments, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        let count = if self.closed { n } else { n.saturating_sub(1) };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Total length.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// First point.
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    /// Last point (the start again for closed curves).
    pub fn end(&self) -> Vec2 {
        if self.closed {
            self.points[0]
        } else {
            self.points[self.points.len() - 1]
        }
    }

    /// Point at normalized arc-length parameter `t`, clamped to `[0, 1]`.
    pub fn point_at_parameter(&self, t: f64) -> Vec2 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mut remaining = self.length() * t;
        for (a, b) in self.segments() {
            let len = a.distance(b);
            if remaining <= len {
                if len <= EPSILON {
                    return a;
                }
                return a.lerp(b, remaining / len);
            }
            remaining -= len;
        }
        self.end()
    }
}

impl TryFrom<CurveRepr> for Curve {
    type Error = GeometryError;

    fn try_from(repr: CurveRepr) -> Result<Self, Self::Error> {
        Self::new(repr.points, repr.closed)
    }
}

impl From<Curve> for CurveRepr {
    fn from(curve: Curve) -> Self {
        Self {
            points: curve.points,
            closed: curve.closed,
        }
    }
}

fn dedup_points(points: Vec<Vec2>) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().map_or(true, |last| last.distance(p) > EPSILON) {
            out.push(p);
        }
    }
    out
}
