//! Candidate filter: road frontage, then minimum area.

use config::constants::OpenspaceConfig;
use rayon::prelude::*;
use site_geometry::{GeometryKernel, Polygon};
use tracing::{debug, info_span};

use crate::site::{Lot, Road};

/// Keeps the candidates that front a road and are large enough.
///
/// A candidate fronts road `r` when its shared boundary with `r` is longer
/// than `road_adjust_ratio` times the lot's own frontage on `r`. Input
/// order is preserved.
pub fn filter<K: GeometryKernel>(
    kernel: &K,
    candidates: Vec<Polygon>,
    lot: &Lot,
    roads: &[Road],
    config: &OpenspaceConfig,
) -> Vec<Polygon> {
    let _span = info_span!("filter").entered();
    let before = candidates.len();

    let lot_boundary = lot.region().boundary();
    let thresholds: Vec<f64> = roads
        .iter()
        .map(|road| kernel.overlap_length(&lot_boundary, road.curve()) * config.road_adjust_ratio)
        .collect();

    let fronting: Vec<Polygon> = candidates
        .into_par_iter()
        .filter(|candidate| fronts_road(kernel, candidate, roads, &thresholds))
        .collect();
    debug!(before, fronting = fronting.len(), "road frontage test");

    let surviving: Vec<Polygon> = fronting
        .into_iter()
        .filter(|candidate| kernel.area(candidate) >= config.min_area)
        .collect();
    debug!(surviving = surviving.len(), "minimum area test");

    surviving
}

fn fronts_road<K: GeometryKernel>(
    kernel: &K,
    candidate: &Polygon,
    roads: &[Road],
    thresholds: &[f64],
) -> bool {
    let boundary = candidate.boundary();
    roads
        .iter()
        .zip(thresholds)
        .any(|(road, threshold)| kernel.overlap_length(&boundary, road.curve()) > *threshold)
}
