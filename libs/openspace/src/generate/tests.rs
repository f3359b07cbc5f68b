use super::*;
use crate::site::{Building, BuildingUse, DistrictUse, Lot, ParkingRegion, Road};
use approx::assert_abs_diff_eq;
use site_geometry::{ClipperKernel, Curve, Vec2};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::rectangle(Vec2::new(x0, y0), Vec2::new(x1, y1)).expect("valid rectangle")
}

/// 100 x 50 lot with a road along its south edge.
fn site_with(buildings: Vec<Polygon>, parking: Option<Polygon>) -> Site {
    let lot = Lot::new(rect(0.0, 0.0, 100.0, 50.0), DistrictUse::Commercial);
    let road = Road::new(Curve::line(Vec2::ZERO, Vec2::new(100.0, 0.0)).expect("valid road"));
    let building = Building::new(buildings, 3, BuildingUse::Office).expect("valid building");
    Site::new(lot, vec![road], building, parking.map(ParkingRegion::new))
}

fn sorted_areas(regions: &[Polygon]) -> Vec<f64> {
    let mut areas: Vec<f64> = regions.iter().map(Polygon::area).collect();
    areas.sort_by(f64::total_cmp);
    areas
}

#[test]
fn test_single_side_yard() {
    let site = site_with(vec![rect(35.0, 5.0, 95.0, 45.0)], None);
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");

    assert_eq!(candidates.len(), 1);
    assert_abs_diff_eq!(candidates[0].area(), 35.0 * 50.0, epsilon = 1e-6);
    let (min, max) = candidates[0].bounding_box();
    assert_abs_diff_eq!(min.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(max.x, 35.0, epsilon = 1e-6);
    assert_abs_diff_eq!(max.y, 50.0, epsilon = 1e-6);
}

#[test]
fn test_two_side_yards() {
    let site = site_with(vec![rect(40.0, 5.0, 60.0, 45.0)], None);
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");

    assert_eq!(candidates.len(), 2);
    for area in sorted_areas(&candidates) {
        assert_abs_diff_eq!(area, 2000.0, epsilon = 1e-6);
    }
}

#[test]
fn test_parking_blocks_like_a_building() {
    let site = site_with(vec![rect(35.0, 5.0, 95.0, 45.0)], Some(rect(0.0, 0.0, 20.0, 50.0)));
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");

    assert_eq!(candidates.len(), 1);
    assert_abs_diff_eq!(candidates[0].area(), 15.0 * 50.0, epsilon = 1e-6);
}

#[test]
fn test_gaps_narrower_than_min_depth_vanish() {
    // 8 m side strip and 5 m front and back strips, all under 9 m
    let site = site_with(vec![rect(8.0, 5.0, 95.0, 45.0)], None);
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");
    assert!(candidates.is_empty());
}

#[test]
fn test_ring_around_building_is_rejected() {
    // The only seed is the yard ring, which surrounds the building
    let site = site_with(vec![rect(30.0, 15.0, 70.0, 35.0)], None);
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");
    assert!(candidates.is_empty());
}

#[test]
fn test_smaller_depth_widens_candidates() {
    // Building covers everything east of an 8 m strip
    let site = site_with(vec![rect(8.0, 0.0, 100.0, 50.0)], None);
    let default_run = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");
    assert!(default_run.is_empty());

    let cfg = OpenspaceConfig::default().with_min_depth(4.0);
    let candidates = generate(&ClipperKernel::default(), &site, &cfg).expect("generation succeeds");

    // The strip now qualifies
    assert_eq!(candidates.len(), 1);
    assert_abs_diff_eq!(candidates[0].area(), 8.0 * 50.0, epsilon = 1e-6);
}

#[test]
fn test_multiple_footprints() {
    let site = site_with(
        vec![rect(20.0, 5.0, 40.0, 45.0), rect(60.0, 5.0, 80.0, 45.0)],
        None,
    );
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");

    let areas = sorted_areas(&candidates);
    assert_eq!(areas.len(), 3);
    assert_abs_diff_eq!(areas[0], 1000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(areas[1], 1000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(areas[2], 1000.0, epsilon = 1e-6);
}

#[test]
fn test_parking_pad_inside_yard_removes_it() {
    let site = site_with(
        vec![rect(35.0, 5.0, 95.0, 45.0)],
        Some(rect(15.0, 20.0, 20.0, 30.0)),
    );
    let candidates = generate(&ClipperKernel::default(), &site, &OpenspaceConfig::default())
        .expect("generation succeeds");

    // The yard's outer loop encloses the pad and its hole loop covers it
    assert!(candidates.is_empty());
}
