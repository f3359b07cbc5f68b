//! # Error Types
//!
//! Errors raised while building a site or planning its open space.
//!
//! ## Error Policy
//!
//! - Malformed geometry or categories fail fast when the site is built
//! - A candidate whose offset or scaling degenerates is dropped and logged
//!   by the stage that hit it; it never surfaces here
//! - An unmet requirement is a result state (`OpenspacePlan::shortfall`),
//!   not an error

use config::constants::ConfigError;
use site_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur while planning open space.
///
/// ## Example
///
/// ```rust
/// use openspace::{BuildingUse, OpenspaceError};
///
/// let err = "warehouse".parse::<BuildingUse>().unwrap_err();
/// assert!(matches!(err, OpenspaceError::UnknownCategory { kind: "building use", .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpenspaceError {
    /// A lot, road, building or parking geometry failed validation.
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    /// A building has no footprint or no floors.
    #[error("Invalid building: {reason}")]
    InvalidBuilding {
        /// What is wrong with the building.
        reason: String,
    },

    /// A zoning or building-use label was not recognized.
    #[error("Unknown {kind} '{label}'")]
    UnknownCategory {
        /// Which table was consulted.
        kind: &'static str,
        /// The label as given.
        label: String,
    },

    /// The supplied configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for open space planning.
pub type OpenspaceResult<T> = Result<T, OpenspaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_errors_convert() {
        let err: OpenspaceError = GeometryError::invalid("empty lot").into();
        assert!(matches!(err, OpenspaceError::InvalidGeometry(_)));
        assert!(err.to_string().contains("empty lot"));
    }

    #[test]
    fn test_config_errors_convert() {
        let err: OpenspaceError = ConfigError::InvalidMiterLimit(0.5).into();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenspaceError>();
    }
}
