//! End-to-end open space pipeline.
//!
//! ```text
//! Site ──► requirement ──► generate ──► filter ──► rank ──► fit ──► OpenspacePlan
//! ```
//!
//! Every stage takes and returns plain values; nothing is shared between
//! runs, so planning the same site twice gives the same plan.

mod report;

pub use report::{OpenspacePlan, SiteSummary};

use config::constants::OpenspaceConfig;
use site_geometry::{ClipperKernel, GeometryKernel, Polygon};
use tracing::{debug, info_span, warn};

use crate::error::OpenspaceResult;
use crate::site::Site;
use crate::{filter, fit, generate, rank, requirement};

/// Plans open space for one site with one kernel.
///
/// The stages are exposed separately so hosts can inspect intermediate
/// candidates; [`OpenspaceGenerator::get_openspace`] runs them all.
#[derive(Debug)]
pub struct OpenspaceGenerator<'a, K: GeometryKernel> {
    site: &'a Site,
    config: &'a OpenspaceConfig,
    kernel: &'a K,
    requirement_area: f64,
}

impl<'a, K: GeometryKernel> OpenspaceGenerator<'a, K> {
    /// Validates `config` and evaluates the requirement for `site`.
    ///
    /// # Errors
    ///
    /// `OpenspaceError::Config` when the configuration is invalid.
    pub fn new(site: &'a Site, config: &'a OpenspaceConfig, kernel: &'a K) -> OpenspaceResult<Self> {
        config.validate()?;
        let requirement_area = requirement::evaluate(&site.lot, &site.building, config);
        Ok(Self {
            site,
            config,
            kernel,
            requirement_area,
        })
    }

    /// Area owed (m²), zero when the site is exempt.
    pub fn requirement_area(&self) -> f64 {
        self.requirement_area
    }

    /// Candidate regions clear of every obstacle.
    pub fn generate_candidates(&self) -> OpenspaceResult<Vec<Polygon>> {
        generate::generate(self.kernel, self.site, self.config)
    }

    /// Candidates fronting a road and large enough.
    pub fn filter_candidates(&self, candidates: Vec<Polygon>) -> Vec<Polygon> {
        filter::filter(
            self.kernel,
            candidates,
            &self.site.lot,
            &self.site.roads,
            self.config,
        )
    }

    /// Candidates ordered largest first.
    pub fn rank_candidates(&self, candidates: Vec<Polygon>) -> Vec<Polygon> {
        rank::rank(self.kernel, candidates)
    }

    /// Ranked candidates fitted to the requirement.
    pub fn fit_candidates(&self, ranked: Vec<Polygon>) -> Vec<Polygon> {
        fit::fit(self.kernel, ranked, &self.site.lot, self.requirement_area)
    }

    /// Runs every stage and reports the result.
    ///
    /// # Errors
    ///
    /// Propagates kernel failures on the lot or obstacle set as a whole.
    pub fn get_openspace(&self) -> OpenspaceResult<OpenspacePlan> {
        let _span = info_span!("openspace", requirement_area = self.requirement_area).entered();
        let area_tol = self.config.tolerances.area_tol;

        if self.requirement_area <= 0.0 {
            debug!("site owes no open space");
            return Ok(OpenspacePlan::empty(area_tol));
        }

        let candidates = self.generate_candidates()?;
        let filtered = self.filter_candidates(candidates);
        let ranked = self.rank_candidates(filtered);
        let regions = self.fit_candidates(ranked);

        let areas: Vec<f64> = regions.iter().map(|r| self.kernel.area(r)).collect();
        let plan = OpenspacePlan::new(regions, &areas, self.requirement_area, area_tol);
        if !plan.is_satisfied() {
            warn!(
                requirement_area = plan.requirement_area,
                provided_area = plan.provided_area,
                shortfall = plan.shortfall,
                "open space requirement not met"
            );
        }
        Ok(plan)
    }

    /// Headline figures for the site and a plan made for it.
    pub fn summary(&self, plan: &OpenspacePlan) -> SiteSummary {
        SiteSummary {
            lot_area: self.kernel.area(self.site.lot.region()),
            building_floor_area: self.site.building.floor_area(),
            building_total_area: self.site.building.total_area(),
            requirement_area: self.requirement_area,
            openspace_area: plan.provided_area,
        }
    }
}

/// Plans open space for `site` with the Clipper kernel.
///
/// # Example
///
/// ```rust
/// use config::constants::OpenspaceConfig;
/// use openspace::{plan_openspace, Building, BuildingUse, DistrictUse, Lot, Road, Site};
/// use site_geometry::{Curve, Polygon, Vec2};
///
/// let site = Site::new(
///     Lot::new(
///         Polygon::rectangle(Vec2::ZERO, Vec2::new(100.0, 50.0)).unwrap(),
///         DistrictUse::GeneralResidential,
///     ),
///     vec![Road::new(Curve::line(Vec2::ZERO, Vec2::new(100.0, 0.0)).unwrap())],
///     Building::new(
///         vec![Polygon::rectangle(Vec2::new(35.0, 5.0), Vec2::new(95.0, 45.0)).unwrap()],
///         3,
///         BuildingUse::Office,
///     )
///     .unwrap(),
///     None,
/// );
///
/// let plan = plan_openspace(&site, &OpenspaceConfig::default()).unwrap();
/// assert_eq!(plan.regions.len(), 1);
/// assert!(plan.is_satisfied());
/// ```
pub fn plan_openspace(site: &Site, config: &OpenspaceConfig) -> OpenspaceResult<OpenspacePlan> {
    let kernel = ClipperKernel::new(config.tolerances);
    OpenspaceGenerator::new(site, config, &kernel)?.get_openspace()
}
