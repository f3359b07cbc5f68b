//! Pipeline results.

use serde::Serialize;
use site_geometry::Polygon;

/// Open space regions chosen for a site.
///
/// A plan that falls short of the requirement is still a valid result:
/// `shortfall` says how much area is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenspacePlan {
    /// Accepted regions, in rank order.
    pub regions: Vec<Polygon>,
    /// Area owed (m²).
    pub requirement_area: f64,
    /// Area of the accepted regions (m²).
    pub provided_area: f64,
    /// Area still missing (m²), never negative.
    pub shortfall: f64,
    #[serde(skip)]
    area_tol: f64,
}

impl OpenspacePlan {
    /// Builds a plan from accepted regions and their areas.
    pub fn new(regions: Vec<Polygon>, areas: &[f64], requirement_area: f64, area_tol: f64) -> Self {
        // Summing from 0.0 keeps an empty plan at +0.0
        let provided_area = areas.iter().fold(0.0, |acc, area| acc + area);
        Self {
            regions,
            requirement_area,
            provided_area,
            shortfall: (requirement_area - provided_area).max(0.0),
            area_tol,
        }
    }

    /// Plan for a site that owes no open space.
    pub fn empty(area_tol: f64) -> Self {
        Self::new(Vec::new(), &[], 0.0, area_tol)
    }

    /// Returns true when the shortfall is within the area tolerance.
    pub fn is_satisfied(&self) -> bool {
        self.shortfall <= self.area_tol
    }
}

/// Figures reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteSummary {
    /// Lot area (m²).
    pub lot_area: f64,
    /// Building footprint area (m²).
    pub building_floor_area: f64,
    /// Footprint area times floor count (m²).
    pub building_total_area: f64,
    /// Area owed (m²).
    pub requirement_area: f64,
    /// Area provided by the plan (m²).
    pub openspace_area: f64,
}
