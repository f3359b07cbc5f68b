//! Candidate ranking.

use site_geometry::{GeometryKernel, Polygon};
use tracing::info_span;

/// Orders candidates by area, largest first.
///
/// The sort is stable: equal areas keep their input order.
pub fn rank<K: GeometryKernel>(kernel: &K, candidates: Vec<Polygon>) -> Vec<Polygon> {
    let _span = info_span!("rank").entered();

    let mut scored: Vec<(f64, Polygon)> = candidates
        .into_iter()
        .map(|candidate| (kernel.area(&candidate), candidate))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}
