//! Site model: the lot, its roads, the building and surface parking.
//!
//! Every value is validated when it is built and immutable afterwards.
//! A [`Site`] is handed to the pipeline explicitly, either assembled in code
//! or deserialized from a site description.

mod category;

pub use category::{BuildingUse, DistrictUse};

use serde::{Deserialize, Serialize};
use site_geometry::{Curve, Polygon};

use crate::error::{OpenspaceError, OpenspaceResult};

/// The developable parcel and its zoning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    region: Polygon,
    district_use: DistrictUse,
}

impl Lot {
    /// Creates a lot.
    pub fn new(region: Polygon, district_use: DistrictUse) -> Self {
        Self {
            region,
            district_use,
        }
    }

    /// Parcel boundary.
    pub fn region(&self) -> &Polygon {
        &self.region
    }

    /// Zoning district.
    pub fn district_use(&self) -> DistrictUse {
        self.district_use
    }

    /// Parcel area in m².
    pub fn area(&self) -> f64 {
        self.region.area()
    }
}

/// One road-facing edge of the lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Road {
    curve: Curve,
}

impl Road {
    /// Creates a road from its centre or edge line.
    pub fn new(curve: Curve) -> Self {
        Self { curve }
    }

    /// Road geometry.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }
}

/// The planned building: one or more footprints sharing a floor count and use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BuildingRepr")]
pub struct Building {
    regions: Vec<Polygon>,
    floor_count: u32,
    #[serde(rename = "use")]
    building_use: BuildingUse,
}

#[derive(Deserialize)]
struct BuildingRepr {
    regions: Vec<Polygon>,
    floor_count: u32,
    #[serde(rename = "use")]
    building_use: BuildingUse,
}

impl Building {
    /// Creates a building.
    ///
    /// # Errors
    ///
    /// `OpenspaceError::InvalidBuilding` when there is no footprint or the
    /// floor count is zero.
    pub fn new(
        regions: Vec<Polygon>,
        floor_count: u32,
        building_use: BuildingUse,
    ) -> OpenspaceResult<Self> {
        if regions.is_empty() {
            return Err(OpenspaceError::InvalidBuilding {
                reason: "building has no footprint".to_string(),
            });
        }
        if floor_count == 0 {
            return Err(OpenspaceError::InvalidBuilding {
                reason: "building has no floors".to_string(),
            });
        }
        Ok(Self {
            regions,
            floor_count,
            building_use,
        })
    }

    /// Footprints.
    pub fn regions(&self) -> &[Polygon] {
        &self.regions
    }

    /// Number of floors.
    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    /// Principal use.
    pub fn building_use(&self) -> BuildingUse {
        self.building_use
    }

    /// Footprint area summed over all regions (m²).
    pub fn floor_area(&self) -> f64 {
        self.regions.iter().map(Polygon::area).sum()
    }

    /// Floor area times floor count (m²).
    pub fn total_area(&self) -> f64 {
        self.floor_area() * f64::from(self.floor_count)
    }
}

impl TryFrom<BuildingRepr> for Building {
    type Error = OpenspaceError;

    fn try_from(repr: BuildingRepr) -> Result<Self, Self::Error> {
        Self::new(repr.regions, repr.floor_count, repr.building_use)
    }
}

/// Surface parking footprint.
///
/// Parking blocks open space like a building but adds no floor area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParkingRegion {
    region: Polygon,
}

impl ParkingRegion {
    /// Creates a parking region.
    pub fn new(region: Polygon) -> Self {
        Self { region }
    }

    /// Parking footprint.
    pub fn region(&self) -> &Polygon {
        &self.region
    }
}

/// Everything the pipeline needs to know about one lot.
///
/// # Example
///
/// ```rust
/// use openspace::{Building, BuildingUse, DistrictUse, Lot, Road, Site};
/// use site_geometry::{Curve, Polygon, Vec2};
///
/// let lot = Lot::new(
///     Polygon::rectangle(Vec2::ZERO, Vec2::new(100.0, 50.0)).unwrap(),
///     DistrictUse::Commercial,
/// );
/// let road = Road::new(Curve::line(Vec2::ZERO, Vec2::new(100.0, 0.0)).unwrap());
/// let building = Building::new(
///     vec![Polygon::rectangle(Vec2::new(35.0, 5.0), Vec2::new(95.0, 45.0)).unwrap()],
///     3,
///     BuildingUse::Office,
/// )
/// .unwrap();
///
/// let site = Site::new(lot, vec![road], building, None);
/// assert_eq!(site.building.total_area(), 7200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// The parcel.
    pub lot: Lot,
    /// Road edges; a site without roads gets no open space.
    #[serde(default)]
    pub roads: Vec<Road>,
    /// The planned building.
    pub building: Building,
    /// Surface parking, if any.
    #[serde(default)]
    pub parking: Option<ParkingRegion>,
}

impl Site {
    /// Bundles the parts of a site.
    pub fn new(
        lot: Lot,
        roads: Vec<Road>,
        building: Building,
        parking: Option<ParkingRegion>,
    ) -> Self {
        Self {
            lot,
            roads,
            building,
            parking,
        }
    }

    /// Building and parking footprints, the regions open space must avoid.
    pub fn obstacles(&self) -> Vec<Polygon> {
        self.building
            .regions()
            .iter()
            .chain(self.parking.as_ref().map(ParkingRegion::region))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests;
