use super::*;

#[test]
fn test_cross_sign() {
    assert_eq!(cross(Vec2::new(2.0, 0.0), Vec2::new(0.0, 3.0)), 6.0);
    assert_eq!(cross(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)), 0.0);
}

#[test]
fn test_distance_to_segment_interior() {
    let d = distance_to_segment(Vec2::new(5.0, 3.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
    assert_eq!(d, 3.0);
}

#[test]
fn test_distance_to_segment_endpoint() {
    let d = distance_to_segment(Vec2::new(13.0, 4.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
    assert_eq!(d, 5.0);
}

#[test]
fn test_distance_to_degenerate_segment() {
    let d = distance_to_segment(Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::ZERO);
    assert_eq!(d, 5.0);
}

#[test]
fn test_orient() {
    let a = Vec2::ZERO;
    let b = Vec2::new(1.0, 0.0);
    assert!(orient(a, b, Vec2::new(0.5, 1.0)) > 0.0);
    assert!(orient(a, b, Vec2::new(0.5, -1.0)) < 0.0);
    assert_eq!(orient(a, b, Vec2::new(2.0, 0.0)), 0.0);
}

#[test]
fn test_segments_intersect_crossing() {
    let hit = segments_intersect(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(10.0, 0.0),
    );
    assert!(hit);
}

#[test]
fn test_segments_intersect_touching_endpoint() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, 0.0);
    assert!(segments_intersect(a, b, b, Vec2::new(10.0, 5.0)));
    assert!(!segments_cross(a, b, b, Vec2::new(10.0, 5.0)));
}

#[test]
fn test_segments_collinear_disjoint() {
    let hit = segments_intersect(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(3.0, 0.0),
    );
    assert!(!hit);
}

#[test]
fn test_segments_cross_properly() {
    assert!(segments_cross(
        Vec2::new(0.0, 5.0),
        Vec2::new(10.0, 5.0),
        Vec2::new(5.0, 0.0),
        Vec2::new(5.0, 10.0),
    ));
}
