//! Candidate generation by erosion and dilation.
//!
//! The lot is shrunk and every obstacle grown by half the minimum depth;
//! what is left of the shrunk lot is the set of seeds. Growing each seed
//! back by the same distance yields regions that are at least the minimum
//! depth wide everywhere and stay clear of buildings and parking.
//!
//! Every loop of the difference is a solid seed, holes included. A seed
//! that encloses an obstacle is rejected, so a parking pad standing inside
//! a yard removes that whole yard from the candidates.

use config::constants::OpenspaceConfig;
use site_geometry::{GeometryKernel, OffsetDirection, Polygon, RegionRelation};
use tracing::{debug, info_span, warn};

use crate::error::OpenspaceResult;
use crate::site::Site;

/// Produces candidate regions for `site`, in kernel output order.
///
/// # Errors
///
/// Fails only when the kernel rejects the lot or obstacle set as a whole;
/// a single seed that cannot be grown back is dropped with a warning.
pub fn generate<K: GeometryKernel>(
    kernel: &K,
    site: &Site,
    config: &OpenspaceConfig,
) -> OpenspaceResult<Vec<Polygon>> {
    let _span = info_span!("generate").entered();

    let distance = config.half_depth();
    let obstacles = site.obstacles();

    let seeds = inward_regions(kernel, site.lot.region(), &obstacles, distance, config)?;
    debug!(seeds = seeds.len(), "inward regions");

    let clear: Vec<Polygon> = seeds
        .into_iter()
        .filter(|seed| is_clear_of(kernel, seed, &obstacles))
        .collect();
    debug!(clear = clear.len(), "seeds clear of obstacles");

    let candidates: Vec<Polygon> = clear
        .iter()
        .enumerate()
        .filter_map(|(index, seed)| outward_region(kernel, seed, distance, config, index))
        .collect();
    debug!(candidates = candidates.len(), "candidates generated");

    Ok(candidates)
}

/// Shrunk lot minus grown obstacles, one polygon per loop.
fn inward_regions<K: GeometryKernel>(
    kernel: &K,
    lot: &Polygon,
    obstacles: &[Polygon],
    distance: f64,
    config: &OpenspaceConfig,
) -> OpenspaceResult<Vec<Polygon>> {
    let shrunk_lot = kernel.offset(
        std::slice::from_ref(lot),
        distance,
        OffsetDirection::Inward,
        config.miter_limit,
    )?;
    if shrunk_lot.is_empty() {
        return Ok(Vec::new());
    }

    let grown_obstacles = kernel.offset(
        obstacles,
        distance,
        OffsetDirection::Outward,
        config.miter_limit,
    )?;

    Ok(kernel.difference(&shrunk_lot, &grown_obstacles)?)
}

/// A seed survives when it shares no area and no boundary length with any
/// obstacle. Contact at isolated points is allowed.
fn is_clear_of<K: GeometryKernel>(kernel: &K, seed: &Polygon, obstacles: &[Polygon]) -> bool {
    obstacles
        .iter()
        .all(|obstacle| match kernel.region_relationship(seed, obstacle) {
            RegionRelation::Disjoint => true,
            RegionRelation::Touching => {
                kernel.overlap_length(&seed.boundary(), &obstacle.boundary())
                    <= kernel.tolerances().tol
            }
            RegionRelation::Overlapping | RegionRelation::Contained(_) => false,
        })
}

/// Grows a seed back to full size, keeping its outer contour.
fn outward_region<K: GeometryKernel>(
    kernel: &K,
    seed: &Polygon,
    distance: f64,
    config: &OpenspaceConfig,
    index: usize,
) -> Option<Polygon> {
    let grown = match kernel.offset(
        std::slice::from_ref(seed),
        distance,
        OffsetDirection::Outward,
        config.miter_limit,
    ) {
        Ok(grown) => grown,
        Err(err) => {
            warn!(seed = index, error = %err, "dropping candidate: outward offset failed");
            return None;
        }
    };

    let outer = grown
        .into_iter()
        .max_by(|a, b| kernel.area(a).total_cmp(&kernel.area(b)));
    if outer.is_none() {
        warn!(seed = index, "dropping candidate: outward offset produced no region");
    }
    outer
}

#[cfg(test)]
mod tests;
