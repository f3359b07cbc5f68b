//! # Config Crate
//!
//! Centralized configuration constants for the open-space planning pipeline.
//! Every regulatory threshold and numeric tolerance is defined here so the
//! geometry kernel and the planning stages agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{OpenspaceConfig, AREA_TOL, MIN_AREA};
//!
//! // Regulatory floor for the public open space
//! let lot_area: f64 = 500.0;
//! let required = (lot_area * 0.1).max(MIN_AREA);
//! assert_eq!(required, MIN_AREA);
//!
//! // Full configuration snapshot with the legal defaults
//! let config = OpenspaceConfig::default();
//! assert_eq!(config.tolerances.area_tol, AREA_TOL);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit**: Callers pass configuration snapshots, nothing is ambient
//! - **Validated**: Snapshots reject values that would break the geometry

pub mod constants;

#[cfg(test)]
mod tests;
