//! Geometry kernel seam used by the open space pipeline.
//!
//! The pipeline only talks to [`GeometryKernel`], so a different clipping
//! backend can be dropped in without touching the algorithms.

use config::constants::Tolerances;

use crate::core::curve::Curve;
use crate::core::polygon::Polygon;
use crate::core::vec2::Vec2;
use crate::error::GeometryResult;
use crate::ops::offset::{OffsetDirection, OffsetParams};
use crate::ops::overlap::OverlapParams;
use crate::ops::relation::RegionRelation;
use crate::ops::{boolean, offset, overlap, relation, transform};

/// Planar operations needed to compute open space.
///
/// Implementations must be shareable across worker threads.
pub trait GeometryKernel: Send + Sync {
    /// Tolerances the kernel works with.
    fn tolerances(&self) -> &Tolerances;

    /// Unsigned area of a region.
    fn area(&self, polygon: &Polygon) -> f64 {
        polygon.area()
    }

    /// Offsets each polygon by `distance` in `direction`.
    ///
    /// Collapsed loops are omitted; a zero distance returns the inputs.
    fn offset(
        &self,
        polygons: &[Polygon],
        distance: f64,
        direction: OffsetDirection,
        miter_limit: f64,
    ) -> GeometryResult<Vec<Polygon>>;

    /// Subtracts `clip` from `subject`, one polygon per resulting loop.
    fn difference(&self, subject: &[Polygon], clip: &[Polygon]) -> GeometryResult<Vec<Polygon>>;

    /// Portions of `a` lying along `b`, joined where contiguous.
    fn overlap_curve(&self, a: &Curve, b: &Curve) -> Vec<Curve>;

    /// Total length of the portions of `a` lying along `b`.
    fn overlap_length(&self, a: &Curve, b: &Curve) -> f64 {
        self.overlap_curve(a, b).iter().map(Curve::length).sum()
    }

    /// How two regions relate.
    fn region_relationship(&self, a: &Polygon, b: &Polygon) -> RegionRelation;

    /// Scales `polygon` uniformly about `center`.
    fn scale(&self, polygon: &Polygon, center: Vec2, factor: f64) -> GeometryResult<Polygon>;

    /// Point at normalized arc-length parameter `t`.
    fn point_at_parameter(&self, curve: &Curve, t: f64) -> Vec2 {
        transform::point_at_parameter(curve, t)
    }
}

/// Kernel backed by the Clipper2 polygon engine.
///
/// # Example
///
/// ```rust
/// use site_geometry::{ClipperKernel, GeometryKernel, OffsetDirection, Polygon, Vec2};
///
/// let kernel = ClipperKernel::default();
/// let lot = Polygon::rectangle(Vec2::ZERO, Vec2::new(20.0, 10.0)).unwrap();
/// let shrunk = kernel.offset(&[lot], 1.0, OffsetDirection::Inward, 10.0).unwrap();
/// assert_eq!(kernel.area(&shrunk[0]), 144.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipperKernel {
    tolerances: Tolerances,
}

impl ClipperKernel {
    /// Creates a kernel with explicit tolerances.
    pub fn new(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    fn overlap_params(&self) -> OverlapParams {
        // Clipper output is rounded, so coincidence uses the coarser distance tolerance
        OverlapParams {
            tol: self.tolerances.dist_tol,
            min_length: self.tolerances.tol,
            join_tol: self.tolerances.dist_tol,
        }
    }
}

impl GeometryKernel for ClipperKernel {
    fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    fn offset(
        &self,
        polygons: &[Polygon],
        distance: f64,
        direction: OffsetDirection,
        miter_limit: f64,
    ) -> GeometryResult<Vec<Polygon>> {
        let params = OffsetParams {
            distance,
            direction,
            miter_limit,
            area_tol: self.tolerances.op_tol,
        };
        offset::offset(polygons, &params)
    }

    fn difference(&self, subject: &[Polygon], clip: &[Polygon]) -> GeometryResult<Vec<Polygon>> {
        boolean::difference(subject, clip, self.tolerances.op_tol)
    }

    fn overlap_curve(&self, a: &Curve, b: &Curve) -> Vec<Curve> {
        overlap::overlap_curve(a, b, &self.overlap_params())
    }

    fn region_relationship(&self, a: &Polygon, b: &Polygon) -> RegionRelation {
        relation::region_relationship(a, b, self.tolerances.tol)
    }

    fn scale(&self, polygon: &Polygon, center: Vec2, factor: f64) -> GeometryResult<Polygon> {
        transform::scale(polygon, center, factor)
    }
}
