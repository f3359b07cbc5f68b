//! Topological relationship between two regions.

use crate::core::polygon::Polygon;
use crate::core::vec2::{distance_to_segment, segments_cross, segments_intersect, Vec2};

/// Which region holds the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// The first region lies inside the second.
    AInsideB,
    /// The second region lies inside the first.
    BInsideA,
}

/// How two regions relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRelation {
    /// No shared points within tolerance.
    Disjoint,
    /// Boundaries meet but interiors do not.
    Touching,
    /// Interiors intersect and neither region holds the other.
    Overlapping,
    /// One region lies inside the other.
    Contained(Containment),
}

impl RegionRelation {
    /// Returns true when the regions share no point at all.
    pub fn is_disjoint(self) -> bool {
        self == Self::Disjoint
    }
}

#[derive(Debug, Default)]
struct SampleCount {
    inside: usize,
    outside: usize,
}

/// Classifies how `a` relates to `b`.
///
/// Boundaries closer than `tol` count as meeting. Identical regions are
/// reported as `Overlapping`.
pub fn region_relationship(a: &Polygon, b: &Polygon, tol: f64) -> RegionRelation {
    let crossing = a
        .edges()
        .any(|(a1, a2)| b.edges().any(|(b1, b2)| segments_cross(a1, a2, b1, b2)));
    if crossing {
        return RegionRelation::Overlapping;
    }

    let a_in_b = classify(a, b, tol);
    let b_in_a = classify(b, a, tol);

    if (a_in_b.inside > 0 && a_in_b.outside > 0) || (b_in_a.inside > 0 && b_in_a.outside > 0) {
        return RegionRelation::Overlapping;
    }
    if a_in_b.inside > 0 {
        return RegionRelation::Contained(Containment::AInsideB);
    }
    if b_in_a.inside > 0 {
        return RegionRelation::Contained(Containment::BInsideA);
    }
    if a_in_b.outside == 0 && b_in_a.outside == 0 {
        return RegionRelation::Overlapping;
    }

    if boundaries_meet(a, b, tol) {
        RegionRelation::Touching
    } else {
        RegionRelation::Disjoint
    }
}

/// Counts sample points of `a` strictly inside and strictly outside `b`.
///
/// Samples are the vertices and edge midpoints; points within `tol` of the
/// boundary of `b` count as neither.
fn classify(a: &Polygon, b: &Polygon, tol: f64) -> SampleCount {
    let samples = a.edges().flat_map(|(p, q)| [p, p.lerp(q, 0.5)]);

    let mut count = SampleCount::default();
    for point in samples {
        if b.distance_to_boundary(point) <= tol {
            continue;
        }
        if b.contains_point(point) {
            count.inside += 1;
        } else {
            count.outside += 1;
        }
    }
    count
}

fn boundaries_meet(a: &Polygon, b: &Polygon, tol: f64) -> bool {
    a.edges()
        .any(|(a1, a2)| b.edges().any(|(b1, b2)| segment_distance(a1, a2, b1, b2) <= tol))
}

fn segment_distance(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> f64 {
    if segments_intersect(a1, a2, b1, b2) {
        return 0.0;
    }
    [
        distance_to_segment(a1, b1, b2),
        distance_to_segment(a2, b1, b2),
        distance_to_segment(b1, a1, a2),
        distance_to_segment(b2, a1, a2),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}
