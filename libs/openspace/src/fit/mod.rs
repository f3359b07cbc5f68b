//! Greedy fitting of ranked candidates to the required area.
//!
//! Candidates are taken whole while they fit. The first one that would
//! overshoot is shrunk by similarity scaling until the total matches the
//! requirement exactly. The scaling centre sits on the candidate's shared
//! boundary with the lot, so the shrunk region keeps touching the lot edge.

use config::constants::approx_zero;
use site_geometry::{Curve, GeometryError, GeometryKernel, GeometryResult, Polygon};
use tracing::{debug, info_span, warn};

use crate::site::Lot;

/// Accepts ranked candidates until their areas sum to `requirement_area`.
///
/// The accepted total never exceeds the requirement and equals it whenever
/// the candidates are large enough. A candidate that cannot be shrunk is
/// dropped and the next one is tried.
pub fn fit<K: GeometryKernel>(
    kernel: &K,
    ranked: Vec<Polygon>,
    lot: &Lot,
    requirement_area: f64,
) -> Vec<Polygon> {
    let _span = info_span!("fit", requirement_area).entered();

    let lot_boundary = lot.region().boundary();
    let mut accepted = Vec::new();
    let mut total = 0.0;

    for (index, candidate) in ranked.into_iter().enumerate() {
        if total >= requirement_area {
            break;
        }

        let area = kernel.area(&candidate);
        if approx_zero(area) {
            debug!(candidate = index, "skipping zero-area candidate");
            continue;
        }

        if total + area <= requirement_area {
            total += area;
            accepted.push(candidate);
            continue;
        }

        let target = requirement_area - total;
        match shrink_to(kernel, &candidate, &lot_boundary, area, target) {
            Ok(shrunk) => {
                debug!(candidate = index, area, target, "candidate shrunk to fit");
                accepted.push(shrunk);
                total = requirement_area;
            }
            Err(err) => {
                warn!(candidate = index, error = %err, "dropping candidate: cannot shrink");
            }
        }
    }

    debug!(accepted = accepted.len(), total, "fit complete");
    accepted
}

/// Scales `candidate` down to `target` m² about the middle of its first
/// stretch of shared boundary with the lot.
fn shrink_to<K: GeometryKernel>(
    kernel: &K,
    candidate: &Polygon,
    lot_boundary: &Curve,
    area: f64,
    target: f64,
) -> GeometryResult<Polygon> {
    let factor = (target / area).sqrt();

    let contact = kernel.overlap_curve(&candidate.boundary(), lot_boundary);
    let first = contact.first().ok_or_else(|| {
        GeometryError::degenerate("scale", "candidate shares no boundary with the lot")
    })?;
    let center = kernel.point_at_parameter(first, 0.5);

    kernel.scale(candidate, center, factor)
}
