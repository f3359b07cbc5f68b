//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// REGULATORY TESTS
// =============================================================================

#[test]
fn test_min_area_matches_regulation() {
    // Public open space must be at least 90 m²
    assert_eq!(MIN_AREA, 90.0);
}

#[test]
fn test_min_depth_matches_regulation() {
    assert_eq!(MIN_DEPTH, 9.0);
}

#[test]
fn test_ratios_are_fractions() {
    assert!(AREA_RATIO > 0.0 && AREA_RATIO <= 1.0);
    assert!(ROAD_ADJUST_RATIO > 0.0 && ROAD_ADJUST_RATIO <= 1.0);
}

#[test]
fn test_floor_area_threshold() {
    assert_eq!(FLOOR_AREA_THRESHOLD, 5000.0);
}

#[test]
fn test_miter_limit_always_miters() {
    assert!(MITER_LIMIT >= 1.0e6);
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_tolerances_are_positive() {
    for value in [TOL, DIST_TOL, AREA_TOL, OP_TOL, EPSILON] {
        assert!(value > 0.0);
    }
}

#[test]
fn test_tolerance_ordering() {
    // Offsets are finer than overlap tests, which are finer than joins
    assert!(OP_TOL < TOL);
    assert!(TOL < DIST_TOL);
    assert!(DIST_TOL < AREA_TOL);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}
