//! Tests for the configuration snapshots.

use super::*;

/// Ensures default snapshots are sane and valid.
#[test]
fn default_config_is_valid() {
    let cfg = OpenspaceConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.half_depth(), 4.5);
    assert_eq!(cfg.tolerances, Tolerances::default());
}

/// Validates the tolerance builder rejects invalid values.
#[test]
fn tolerances_validate_inputs() {
    assert_eq!(
        Tolerances::new(0.0, DIST_TOL, AREA_TOL, OP_TOL).unwrap_err(),
        ConfigError::InvalidTolerance {
            name: "tol",
            value: 0.0
        }
    );
    assert!(matches!(
        Tolerances::new(TOL, DIST_TOL, f64::NAN, OP_TOL),
        Err(ConfigError::InvalidTolerance {
            name: "area_tol",
            ..
        })
    ));
}

#[test]
fn validate_rejects_negative_depth() {
    let cfg = OpenspaceConfig::default().with_min_depth(-1.0);
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::NegativeValue {
            name: "min_depth",
            value: -1.0
        })
    );
}

#[test]
fn validate_rejects_small_miter_limit() {
    let cfg = OpenspaceConfig {
        miter_limit: 0.5,
        ..OpenspaceConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidMiterLimit(0.5)));
}

#[test]
fn validate_rejects_broken_tolerances() {
    let cfg = OpenspaceConfig::default().with_tolerances(Tolerances {
        op_tol: -1.0,
        ..Tolerances::default()
    });
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidTolerance { name: "op_tol", .. })
    ));
}

#[test]
fn zero_depth_is_allowed() {
    let cfg = OpenspaceConfig::default().with_min_depth(0.0);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.half_depth(), 0.0);
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidRatio {
        name: "road_adjust_ratio",
        value: 2.0,
    };
    assert!(err.to_string().contains("road_adjust_ratio"));
}
