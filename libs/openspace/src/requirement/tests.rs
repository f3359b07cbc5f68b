use super::*;
use site_geometry::{Polygon, Vec2};

fn lot(width: f64, depth: f64, district: DistrictUse) -> Lot {
    Lot::new(
        Polygon::rectangle(Vec2::ZERO, Vec2::new(width, depth)).expect("valid lot"),
        district,
    )
}

/// A single footprint of `floor_area` m² (square) with the given floors.
fn building(floor_area: f64, floors: u32, building_use: BuildingUse) -> Building {
    let side = floor_area.sqrt();
    Building::new(
        vec![Polygon::rectangle(Vec2::new(1.0, 1.0), Vec2::new(1.0 + side, 1.0 + side)).expect("valid footprint")],
        floors,
        building_use,
    )
    .expect("valid building")
}

#[test]
fn test_all_conditions_hold() {
    let cfg = OpenspaceConfig::default();
    let lot = lot(100.0, 50.0, DistrictUse::GeneralResidential);
    let bld = building(2500.0, 3, BuildingUse::Cultural);

    assert_eq!(eligibility(&lot, &bld, &cfg), Eligibility::Required);
    assert_eq!(evaluate(&lot, &bld, &cfg), 500.0);
}

#[test]
fn test_minimum_area_floor_applies() {
    let cfg = OpenspaceConfig::default();
    // 500 m² lot: 10% is 50, below the 90 m² floor
    let small = lot(25.0, 20.0, DistrictUse::Commercial);
    let tower = building(400.0, 20, BuildingUse::Lodging);
    assert_eq!(evaluate(&small, &tower, &cfg), 90.0);

    let larger = lot(50.0, 40.0, DistrictUse::Commercial);
    assert_eq!(evaluate(&larger, &tower, &cfg), 200.0);
}

#[test]
fn test_each_failing_condition_zeroes_requirement() {
    let cfg = OpenspaceConfig::default();
    let eligible_lot = lot(100.0, 50.0, DistrictUse::QuasiResidential);
    let eligible_bld = building(2500.0, 3, BuildingUse::Assembly);

    let green = lot(100.0, 50.0, DistrictUse::Green);
    assert_eq!(
        eligibility(&green, &eligible_bld, &cfg),
        Eligibility::ExemptDistrict(DistrictUse::Green)
    );
    assert_eq!(evaluate(&green, &eligible_bld, &cfg), 0.0);

    let housing = building(2500.0, 3, BuildingUse::Residential);
    assert_eq!(
        eligibility(&eligible_lot, &housing, &cfg),
        Eligibility::ExemptUse(BuildingUse::Residential)
    );
    assert_eq!(evaluate(&eligible_lot, &housing, &cfg), 0.0);

    let low = building(1000.0, 4, BuildingUse::Assembly);
    assert!(matches!(
        eligibility(&eligible_lot, &low, &cfg),
        Eligibility::BelowThreshold { threshold, .. } if threshold == 5000.0
    ));
    assert_eq!(evaluate(&eligible_lot, &low, &cfg), 0.0);
}

#[test]
fn test_every_combination() {
    let cfg = OpenspaceConfig::default();
    let big = 2500.0;
    let small = 1000.0;

    for district in DistrictUse::ALL {
        for use_ in BuildingUse::ALL {
            for floor_area in [big, small] {
                let l = lot(100.0, 50.0, district);
                let b = building(floor_area, 2, use_);
                let expected = district.requires_openspace()
                    && use_.requires_openspace()
                    && floor_area == big;
                let area = evaluate(&l, &b, &cfg);
                assert_eq!(area > 0.0, expected, "{district:?} {use_:?} {floor_area}");
            }
        }
    }
}

#[test]
fn test_threshold_is_inclusive() {
    let cfg = OpenspaceConfig::default();
    let l = lot(100.0, 50.0, DistrictUse::Commercial);
    let b = building(2500.0, 2, BuildingUse::Retail);
    assert_eq!(b.total_area(), 5000.0);
    assert!(eligibility(&l, &b, &cfg).is_required());
}

#[test]
fn test_ratio_comes_from_config() {
    let cfg = OpenspaceConfig::default().with_area_ratio(0.5);
    let l = lot(100.0, 50.0, DistrictUse::Commercial);
    let b = building(2500.0, 2, BuildingUse::Retail);
    assert_eq!(evaluate(&l, &b, &cfg), 2500.0);
}
