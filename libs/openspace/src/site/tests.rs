use super::*;
use site_geometry::Vec2;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::rectangle(Vec2::new(x0, y0), Vec2::new(x1, y1)).expect("valid rectangle")
}

// =============================================================================
// CATEGORY TESTS
// =============================================================================

#[test]
fn test_district_parses_label_and_name() {
    assert_eq!("일반주거지역".parse::<DistrictUse>().expect("label"), DistrictUse::GeneralResidential);
    assert_eq!("quasi_industrial".parse::<DistrictUse>().expect("name"), DistrictUse::QuasiIndustrial);
    assert_eq!(" 상업지역 ".parse::<DistrictUse>().expect("trimmed"), DistrictUse::Commercial);
}

#[test]
fn test_unknown_district_is_rejected() {
    let err = "industrial_park".parse::<DistrictUse>().unwrap_err();
    assert_eq!(
        err,
        OpenspaceError::UnknownCategory {
            kind: "district use",
            label: "industrial_park".to_string(),
        }
    );
}

#[test]
fn test_eligible_districts() {
    let eligible: Vec<DistrictUse> = DistrictUse::ALL
        .into_iter()
        .filter(|d| d.requires_openspace())
        .collect();
    assert_eq!(
        eligible,
        vec![
            DistrictUse::GeneralResidential,
            DistrictUse::QuasiResidential,
            DistrictUse::Commercial,
            DistrictUse::QuasiIndustrial,
        ]
    );
}

#[test]
fn test_eligible_building_uses() {
    let eligible = BuildingUse::ALL
        .into_iter()
        .filter(|u| u.requires_openspace())
        .count();
    assert_eq!(eligible, 7);
    assert!(BuildingUse::Office.requires_openspace());
    assert!(!BuildingUse::Residential.requires_openspace());
    assert!(!BuildingUse::Factory.requires_openspace());
}

#[test]
fn test_labels_round_trip_through_parse() {
    for use_ in BuildingUse::ALL {
        assert_eq!(use_.label().parse::<BuildingUse>().expect("label parses"), use_);
    }
    for district in DistrictUse::ALL {
        assert_eq!(district.to_string().parse::<DistrictUse>().expect("display parses"), district);
    }
}

#[test]
fn test_categories_serialize_snake_case() {
    let json = serde_json::to_string(&BuildingUse::Transportation).expect("serialize");
    assert_eq!(json, "\"transportation\"");
    let back: BuildingUse = serde_json::from_str("\"운수시설\"").expect("deserialize label");
    assert_eq!(back, BuildingUse::Transportation);
}

// =============================================================================
// MODEL TESTS
// =============================================================================

#[test]
fn test_building_areas() {
    let building = Building::new(
        vec![rect(0.0, 0.0, 10.0, 10.0), rect(20.0, 0.0, 30.0, 5.0)],
        4,
        BuildingUse::Retail,
    )
    .expect("valid building");
    assert_eq!(building.floor_area(), 150.0);
    assert_eq!(building.total_area(), 600.0);
}

#[test]
fn test_building_needs_footprint_and_floors() {
    assert!(matches!(
        Building::new(vec![], 3, BuildingUse::Office),
        Err(OpenspaceError::InvalidBuilding { .. })
    ));
    assert!(matches!(
        Building::new(vec![rect(0.0, 0.0, 1.0, 1.0)], 0, BuildingUse::Office),
        Err(OpenspaceError::InvalidBuilding { .. })
    ));
}

#[test]
fn test_obstacles_include_parking() {
    let lot = Lot::new(rect(0.0, 0.0, 100.0, 50.0), DistrictUse::Commercial);
    let building = Building::new(vec![rect(50.0, 10.0, 90.0, 40.0)], 2, BuildingUse::Office)
        .expect("valid building");
    let parking = ParkingRegion::new(rect(10.0, 10.0, 20.0, 20.0));

    let site = Site::new(lot.clone(), vec![], building.clone(), Some(parking));
    assert_eq!(site.obstacles().len(), 2);

    let site = Site::new(lot, vec![], building, None);
    assert_eq!(site.obstacles().len(), 1);
}

#[test]
fn test_site_from_json() {
    let json = r#"{
        "lot": {
            "region": [[0, 0], [100, 0], [100, 50], [0, 50]],
            "district_use": "일반주거지역"
        },
        "roads": [{ "points": [[0, 0], [100, 0]] }],
        "building": {
            "regions": [[[35, 5], [95, 5], [95, 45], [35, 45]]],
            "floor_count": 3,
            "use": "office"
        }
    }"#;

    let site: Site = serde_json::from_str(json).expect("site parses");
    assert_eq!(site.lot.area(), 5000.0);
    assert_eq!(site.lot.district_use(), DistrictUse::GeneralResidential);
    assert_eq!(site.roads.len(), 1);
    assert!(!site.roads[0].curve().is_closed());
    assert_eq!(site.building.building_use(), BuildingUse::Office);
    assert!(site.parking.is_none());
}

#[test]
fn test_site_json_rejects_bad_building() {
    let json = r#"{
        "lot": { "region": [[0, 0], [10, 0], [10, 10]], "district_use": "commercial" },
        "building": { "regions": [], "floor_count": 3, "use": "office" }
    }"#;
    let err = serde_json::from_str::<Site>(json).unwrap_err();
    assert!(err.to_string().contains("no footprint"));
}

#[test]
fn test_site_json_rejects_self_intersecting_lot() {
    let json = r#"{
        "lot": { "region": [[0, 0], [10, 10], [10, 0], [0, 10]], "district_use": "commercial" },
        "building": { "regions": [[[1, 1], [2, 1], [2, 2]]], "floor_count": 1, "use": "office" }
    }"#;
    assert!(serde_json::from_str::<Site>(json).is_err());
}
