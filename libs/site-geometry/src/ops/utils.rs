//! Shared utilities for the Clipper-backed operations.

use clipper2::{Milli, Paths};

use crate::core::polygon::Polygon;
use crate::core::vec2::Vec2;

/// Clipper paths at millimeter resolution.
///
/// Clipper works on integers internally; site coordinates are meters, so
/// three decimals keep rounding well inside the overlap tolerances.
pub(crate) type SitePaths = Paths<Milli>;

/// Converts polygons into Clipper paths, all counter-clockwise.
pub(crate) fn to_paths<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> SitePaths {
    let coords: Vec<Vec<(f64, f64)>> = polygons
        .into_iter()
        .map(|polygon| {
            polygon
                .to_ccw()
                .vertices()
                .iter()
                .map(|v| (v.x, v.y))
                .collect()
        })
        .collect();
    coords.into()
}

/// Converts Clipper output back into polygons.
///
/// Every loop becomes its own counter-clockwise polygon, outer contours
/// and holes alike. Loops with an area at or below `area_tol` are dropped.
pub(crate) fn from_paths(paths: SitePaths, area_tol: f64) -> Vec<Polygon> {
    let loops: Vec<Vec<(f64, f64)>> = paths.into();
    loops
        .into_iter()
        .filter_map(|coords| {
            Polygon::from_loop(coords.into_iter().map(|(x, y)| Vec2::new(x, y)).collect())
        })
        .filter(|polygon| polygon.area() > area_tol)
        .collect()
}
