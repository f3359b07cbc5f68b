//! Planar geometry kernel for site planning.
//!
//! Lots, building footprints and candidate regions are [`Polygon`]s; road
//! edges and shared boundaries are [`Curve`]s. All coordinates live in one
//! metric plane. The [`GeometryKernel`] trait bundles the operations the
//! open space pipeline needs, and [`ClipperKernel`] implements it on top of
//! Clipper2.
//!
//! # Example
//!
//! ```rust
//! use site_geometry::{ClipperKernel, Curve, GeometryKernel, Polygon, Vec2};
//!
//! let kernel = ClipperKernel::default();
//! let lot = Polygon::rectangle(Vec2::ZERO, Vec2::new(100.0, 50.0)).unwrap();
//! let road = Curve::line(Vec2::ZERO, Vec2::new(100.0, 0.0)).unwrap();
//!
//! assert_eq!(kernel.overlap_length(&lot.boundary(), &road), 100.0);
//! ```

pub mod core;
pub mod error;
pub mod kernel;
pub mod ops;

pub use crate::core::curve::Curve;
pub use crate::core::polygon::Polygon;
pub use crate::core::vec2::Vec2;
pub use error::{GeometryError, GeometryResult};
pub use kernel::{ClipperKernel, GeometryKernel};
pub use ops::offset::OffsetDirection;
pub use ops::relation::{Containment, RegionRelation};
