//! Centralized configuration values shared across the open-space pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// REGULATORY CONSTANTS
// =============================================================================

/// Minimum area of a public open space in square meters.
///
/// Also the floor of the required area: an eligible lot never needs less.
///
/// # Examples
/// ```
/// use config::constants::MIN_AREA;
/// let required = (500.0_f64 * 0.1).max(MIN_AREA);
/// assert_eq!(required, 90.0);
/// ```
pub const MIN_AREA: f64 = 90.0;

/// Minimum depth (width) of any open-space region in meters.
///
/// Candidate regions are eroded and dilated by half of this value.
///
/// # Examples
/// ```
/// use config::constants::MIN_DEPTH;
/// assert_eq!(MIN_DEPTH / 2.0, 4.5);
/// ```
pub const MIN_DEPTH: f64 = 9.0;

/// Fraction of the lot area that must be reserved as open space.
///
/// # Examples
/// ```
/// use config::constants::AREA_RATIO;
/// assert_eq!(2000.0 * AREA_RATIO, 200.0);
/// ```
pub const AREA_RATIO: f64 = 0.1;

/// Share of the lot's frontage on a road that a candidate must capture.
///
/// # Examples
/// ```
/// use config::constants::ROAD_ADJUST_RATIO;
/// let lot_frontage = 100.0;
/// assert!(30.0 > lot_frontage * ROAD_ADJUST_RATIO);
/// ```
pub const ROAD_ADJUST_RATIO: f64 = 0.25;

/// Total floor area (m²) from which the open-space requirement applies.
///
/// # Examples
/// ```
/// use config::constants::FLOOR_AREA_THRESHOLD;
/// assert!(4000.0 < FLOOR_AREA_THRESHOLD);
/// ```
pub const FLOOR_AREA_THRESHOLD: f64 = 5000.0;

// =============================================================================
// OFFSET CONSTANTS
// =============================================================================

/// Miter limit used for region offsets, as a multiple of the offset distance.
///
/// Large enough that corners are always mitered and never squared off.
///
/// # Examples
/// ```
/// use config::constants::MITER_LIMIT;
/// assert!(MITER_LIMIT > 1.0e6);
/// ```
pub const MITER_LIMIT: f64 = 10_000_000.0;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Geometric tolerance for curve overlap and region relationship tests.
///
/// # Examples
/// ```
/// use config::constants::TOL;
/// let gap: f64 = 0.0005;
/// assert!(gap < TOL);
/// ```
pub const TOL: f64 = 0.001;

/// Distance tolerance used when merging and joining curve pieces.
pub const DIST_TOL: f64 = 0.01;

/// Area tolerance in square meters.
///
/// Two areas closer than this are considered equal, and loops smaller than
/// this are treated as collapsed.
///
/// # Examples
/// ```
/// use config::constants::AREA_TOL;
/// assert!((500.0_f64 - 500.05).abs() < AREA_TOL);
/// ```
pub const AREA_TOL: f64 = 0.1;

/// Tolerance handed to offset and boolean operations.
pub const OP_TOL: f64 = 0.00001;

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TOLERANCES
// =============================================================================

/// Immutable set of numeric tolerances shared by the kernel and the pipeline.
///
/// # Examples
/// ```
/// use config::constants::Tolerances;
/// let tolerances = Tolerances::default();
/// assert!(tolerances.tol > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Overlap and containment tolerance.
    pub tol: f64,
    /// Joining tolerance for curve pieces.
    pub dist_tol: f64,
    /// Area equality tolerance.
    pub area_tol: f64,
    /// Offset and boolean tolerance.
    pub op_tol: f64,
}

impl Tolerances {
    /// Builds a tolerance set, rejecting zero, negative or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Tolerances;
    /// let t = Tolerances::new(1.0e-3, 1.0e-2, 0.1, 1.0e-5).expect("valid tolerances");
    /// assert_eq!(t.area_tol, 0.1);
    /// assert!(Tolerances::new(0.0, 1.0e-2, 0.1, 1.0e-5).is_err());
    /// ```
    pub fn new(tol: f64, dist_tol: f64, area_tol: f64, op_tol: f64) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("tol", tol),
            ("dist_tol", dist_tol),
            ("area_tol", area_tol),
            ("op_tol", op_tol),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(Self {
            tol,
            dist_tol,
            area_tol,
            op_tol,
        })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            tol: TOL,
            dist_tol: DIST_TOL,
            area_tol: AREA_TOL,
            op_tol: OP_TOL,
        }
    }
}

// =============================================================================
// OPEN SPACE CONFIGURATION
// =============================================================================

/// Immutable snapshot of every tunable of the open-space pipeline.
///
/// # Examples
/// ```
/// use config::constants::{OpenspaceConfig, MIN_DEPTH};
/// let config = OpenspaceConfig::default();
/// assert_eq!(config.min_depth, MIN_DEPTH);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenspaceConfig {
    /// Minimum area of one open-space region (m²).
    pub min_area: f64,
    /// Minimum depth of one open-space region (m).
    pub min_depth: f64,
    /// Required open space as a fraction of the lot area.
    pub area_ratio: f64,
    /// Required share of the lot frontage on at least one road.
    pub road_adjust_ratio: f64,
    /// Total floor area from which the requirement applies (m²).
    pub floor_area_threshold: f64,
    /// Miter limit for region offsets.
    pub miter_limit: f64,
    /// Numeric tolerances.
    pub tolerances: Tolerances,
}

impl OpenspaceConfig {
    /// Half of the minimum depth, the distance used for erosion and dilation.
    pub fn half_depth(&self) -> f64 {
        self.min_depth / 2.0
    }

    /// Replaces the minimum area.
    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    /// Replaces the minimum depth.
    pub fn with_min_depth(mut self, min_depth: f64) -> Self {
        self.min_depth = min_depth;
        self
    }

    /// Replaces the area ratio.
    pub fn with_area_ratio(mut self, area_ratio: f64) -> Self {
        self.area_ratio = area_ratio;
        self
    }

    /// Replaces the road frontage ratio.
    pub fn with_road_adjust_ratio(mut self, ratio: f64) -> Self {
        self.road_adjust_ratio = ratio;
        self
    }

    /// Replaces the tolerances.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Checks that every value is usable by the pipeline.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, OpenspaceConfig};
    /// let config = OpenspaceConfig::default().with_area_ratio(1.5);
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::InvalidRatio { name: "area_ratio", value: 1.5 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("min_area", self.min_area),
            ("min_depth", self.min_depth),
            ("floor_area_threshold", self.floor_area_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeValue { name, value });
            }
        }
        for (name, value) in [
            ("area_ratio", self.area_ratio),
            ("road_adjust_ratio", self.road_adjust_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRatio { name, value });
            }
        }
        if self.miter_limit.is_nan() || self.miter_limit < 1.0 {
            return Err(ConfigError::InvalidMiterLimit(self.miter_limit));
        }
        Tolerances::new(
            self.tolerances.tol,
            self.tolerances.dist_tol,
            self.tolerances.area_tol,
            self.tolerances.op_tol,
        )?;
        Ok(())
    }
}

impl Default for OpenspaceConfig {
    fn default() -> Self {
        Self {
            min_area: MIN_AREA,
            min_depth: MIN_DEPTH,
            area_ratio: AREA_RATIO,
            road_adjust_ratio: ROAD_ADJUST_RATIO,
            floor_area_threshold: FLOOR_AREA_THRESHOLD,
            miter_limit: MITER_LIMIT,
            tolerances: Tolerances::default(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance { name: &'static str, value: f64 },
    /// Raised when an area or length is negative or not finite.
    NegativeValue { name: &'static str, value: f64 },
    /// Raised when a ratio falls outside `[0, 1]`.
    InvalidRatio { name: &'static str, value: f64 },
    /// Raised when the miter limit is below 1.
    InvalidMiterLimit(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
            ConfigError::NegativeValue { name, value } => {
                write!(f, "{name} must be non-negative: {value}")
            }
            ConfigError::InvalidRatio { name, value } => {
                write!(f, "{name} must lie in [0, 1]: {value}")
            }
            ConfigError::InvalidMiterLimit(value) => {
                write!(f, "miter_limit must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
