//! Open space requirement for a lot and its building.
//!
//! Open space is owed only when the district, the building use and the
//! total floor area all qualify. The owed area is a share of the lot area,
//! never less than the minimum region area.

use config::constants::OpenspaceConfig;
use tracing::debug;

use crate::site::{Building, BuildingUse, DistrictUse, Lot};

/// Outcome of the eligibility check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eligibility {
    /// All three conditions hold.
    Required,
    /// The zoning district carries no obligation.
    ExemptDistrict(DistrictUse),
    /// The building use carries no obligation.
    ExemptUse(BuildingUse),
    /// Total floor area is under the threshold.
    BelowThreshold {
        /// Floor area times floor count (m²).
        total_area: f64,
        /// Threshold it failed to reach (m²).
        threshold: f64,
    },
}

impl Eligibility {
    /// Returns true when open space is owed.
    pub fn is_required(self) -> bool {
        self == Eligibility::Required
    }
}

/// Checks which eligibility condition, if any, fails.
///
/// Conditions are checked in order: district, use, floor area.
pub fn eligibility(lot: &Lot, building: &Building, config: &OpenspaceConfig) -> Eligibility {
    let district = lot.district_use();
    if !district.requires_openspace() {
        return Eligibility::ExemptDistrict(district);
    }

    let building_use = building.building_use();
    if !building_use.requires_openspace() {
        return Eligibility::ExemptUse(building_use);
    }

    let total_area = building.total_area();
    if total_area < config.floor_area_threshold {
        return Eligibility::BelowThreshold {
            total_area,
            threshold: config.floor_area_threshold,
        };
    }

    Eligibility::Required
}

/// Required open space area in m², zero when none is owed.
///
/// # Example
///
/// ```rust
/// use config::constants::OpenspaceConfig;
/// use openspace::requirement::evaluate;
/// use openspace::{Building, BuildingUse, DistrictUse, Lot};
/// use site_geometry::{Polygon, Vec2};
///
/// let lot = Lot::new(
///     Polygon::rectangle(Vec2::ZERO, Vec2::new(100.0, 50.0)).unwrap(),
///     DistrictUse::Commercial,
/// );
/// let building = Building::new(
///     vec![Polygon::rectangle(Vec2::new(35.0, 5.0), Vec2::new(95.0, 45.0)).unwrap()],
///     3,
///     BuildingUse::Office,
/// )
/// .unwrap();
///
/// assert_eq!(evaluate(&lot, &building, &OpenspaceConfig::default()), 500.0);
/// ```
pub fn evaluate(lot: &Lot, building: &Building, config: &OpenspaceConfig) -> f64 {
    match eligibility(lot, building, config) {
        Eligibility::Required => {
            let area = (lot.area() * config.area_ratio).max(config.min_area);
            debug!(lot_area = lot.area(), requirement_area = area, "open space required");
            area
        }
        exempt => {
            debug!(reason = ?exempt, "no open space required");
            0.0
        }
    }
}

#[cfg(test)]
mod tests;
