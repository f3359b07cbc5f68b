//! Shared boundary between two curves.
//!
//! Two curves overlap where their segments run along each other within a
//! distance tolerance. The overlap is reported as pieces of the first curve,
//! joined into polylines where they connect.

use crate::core::curve::Curve;
use crate::core::vec2::{distance_to_segment, Vec2};
use config::constants::EPSILON;

/// Tolerances for overlap detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapParams {
    /// Maximum distance between segments considered coincident.
    pub tol: f64,
    /// Pieces shorter than this are discarded.
    pub min_length: f64,
    /// Piece ends closer than this are joined.
    pub join_tol: f64,
}

/// Returns the portions of `a` that lie along `b`.
///
/// Pieces follow the direction of `a` and are joined where contiguous,
/// including across the seam of a closed `a`. The result is empty when the
/// curves only cross or touch at points.
///
/// # Example
///
/// ```rust
/// use site_geometry::ops::overlap::{overlap_curve, OverlapParams};
/// use site_geometry::{Curve, Vec2};
///
/// let road = Curve::line(Vec2::new(-10.0, 0.0), Vec2::new(60.0, 0.0)).unwrap();
/// let edge = Curve::line(Vec2::ZERO, Vec2::new(100.0, 0.0)).unwrap();
/// let params = OverlapParams { tol: 0.001, min_length: 0.001, join_tol: 0.01 };
///
/// let shared = overlap_curve(&edge, &road, &params);
/// assert_eq!(shared.len(), 1);
/// assert_eq!(shared[0].length(), 60.0);
/// ```
pub fn overlap_curve(a: &Curve, b: &Curve, params: &OverlapParams) -> Vec<Curve> {
    let b_segments: Vec<(Vec2, Vec2)> = b.segments().collect();

    let mut pieces: Vec<(Vec2, Vec2)> = Vec::new();
    for (p, q) in a.segments() {
        pieces.extend(segment_overlap(p, q, &b_segments, params));
    }

    join_pieces(pieces, a.is_closed(), params.join_tol)
        .into_iter()
        .map(Curve::from_points_unchecked)
        .collect()
}

/// Total length of the shared boundary of `a` and `b`.
pub fn overlap_length(a: &Curve, b: &Curve, params: &OverlapParams) -> f64 {
    overlap_curve(a, b, params).iter().map(Curve::length).sum()
}

/// Portions of segment `p -> q` covered by any of `others`.
fn segment_overlap(
    p: Vec2,
    q: Vec2,
    others: &[(Vec2, Vec2)],
    params: &OverlapParams,
) -> Vec<(Vec2, Vec2)> {
    let len = p.distance(q);
    if len <= EPSILON {
        return Vec::new();
    }
    let dir = (q - p) / len;

    // Both ends of the clamped stretch must lie on the other segment; its
    // far ends may drift off this segment's line.
    let mut intervals: Vec<(f64, f64)> = others
        .iter()
        .filter_map(|&(r, s)| {
            let tr = (r - p).dot(dir);
            let ts = (s - p).dot(dir);
            let lo = tr.min(ts).max(0.0);
            let hi = tr.max(ts).min(len);
            if hi - lo <= EPSILON {
                return None;
            }
            let on_other = |t: f64| distance_to_segment(p + dir * t, r, s) <= params.tol;
            (on_other(lo) && on_other(hi)).then_some((lo, hi))
        })
        .collect();
    intervals.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(intervals.len());
    for (lo, hi) in intervals {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + params.tol => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }

    merged
        .into_iter()
        .filter(|(lo, hi)| hi - lo >= params.min_length)
        .map(|(lo, hi)| {
            // Snap to the segment ends so consecutive pieces join exactly
            let start = if lo <= params.tol { p } else { p + dir * lo };
            let end = if hi >= len - params.tol { q } else { p + dir * hi };
            (start, end)
        })
        .collect()
}

/// Chains pieces into polylines, in the order given.
fn join_pieces(pieces: Vec<(Vec2, Vec2)>, closed: bool, join_tol: f64) -> Vec<Vec<Vec2>> {
    let mut chains: Vec<Vec<Vec2>> = Vec::new();
    for (start, end) in pieces {
        match chains.last_mut() {
            Some(chain) if chain.last().is_some_and(|last| last.distance(start) <= join_tol) => {
                chain.push(end);
            }
            _ => chains.push(vec![start, end]),
        }
    }

    // The first chain may continue the last one across the seam
    if closed && chains.len() > 1 {
        let first_start = chains[0][0];
        let joins_seam = chains
            .last()
            .and_then(|chain| chain.last())
            .is_some_and(|last| last.distance(first_start) <= join_tol);
        if joins_seam {
            let first = chains.remove(0);
            if let Some(last) = chains.last_mut() {
                last.extend(first.into_iter().skip(1));
            }
        }
    }

    chains
}
