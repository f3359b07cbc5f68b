//! Public open space planning for a single development lot.
//!
//! Given a lot, its road edges, the planned building and any surface
//! parking, this crate decides whether the site owes public open space,
//! how much, and where it goes. Regions are found by eroding the lot and
//! dilating the obstacles by half the minimum depth, keeping what fronts a
//! road, and fitting the largest regions to the required area.
//!
//! All geometry goes through the [`site_geometry::GeometryKernel`] trait;
//! [`plan_openspace`] uses the Clipper-backed kernel.
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod error;
pub mod filter;
pub mod fit;
pub mod generate;
pub mod pipeline;
pub mod rank;
pub mod requirement;
pub mod site;

pub use error::{OpenspaceError, OpenspaceResult};
pub use pipeline::{plan_openspace, OpenspaceGenerator, OpenspacePlan, SiteSummary};
pub use site::{Building, BuildingUse, DistrictUse, Lot, ParkingRegion, Road, Site};
