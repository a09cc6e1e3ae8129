use super::prelude::*;

fn create_fixture_with_addresses() -> BackendFixture {
    let fixture = BackendFixture::new();
    for (name, lat_lng) in [
        ("Stuttgart", (48.7784, 9.18)),
        ("Esslingen", (48.7406, 9.3108)),
        ("Ludwigsburg", (48.8975, 9.1919)),
        ("Berlin", (52.52, 13.405)),
    ] {
        fixture.create_address(new_address(name, Some(lat_lng)));
    }
    fixture
}

fn names(addresses: &[Address]) -> Vec<&str> {
    addresses.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn search_by_coordinates() {
    let fixture = create_fixture_with_addresses();
    let results = flows::search_by_coordinates(
        &fixture.db_connections,
        MapPoint::from_lat_lng_deg(48.7784, 9.18),
        Distance::from_km(20.0),
    )
    .unwrap();
    assert_eq!(names(&results), vec!["Stuttgart", "Esslingen", "Ludwigsburg"]);
}

#[test]
fn search_by_address() {
    let mut fixture = create_fixture_with_addresses();
    fixture.geo.result = Some((52.5, 13.4));
    let results = flows::search_by_address(
        &fixture.db_connections,
        &fixture.geo,
        " Berlin ",
        Distance::from_km(10.0),
    )
    .unwrap();
    assert_eq!(names(&results), vec!["Berlin"]);
    assert_eq!(fixture.geo.queries.borrow()[0], "Berlin");
}

#[test]
fn search_by_address_fails_if_not_found() {
    let fixture = create_fixture_with_addresses();
    let err = flows::search_by_address(
        &fixture.db_connections,
        &fixture.geo,
        "Atlantis",
        Distance::from_km(10.0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::Geocoding))
    ));
}

#[test]
fn reject_non_positive_radius_before_geocoding() {
    let fixture = BackendFixture::with_geocoding_result(52.5, 13.4);
    for km in [0.0, -5.0] {
        let err = flows::search_by_address(
            &fixture.db_connections,
            &fixture.geo,
            "Berlin",
            Distance::from_km(km),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::InvalidRadius))
        ));
        let err = flows::search_by_coordinates(
            &fixture.db_connections,
            MapPoint::from_lat_lng_deg(52.5, 13.4),
            Distance::from_km(km),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::InvalidRadius))
        ));
    }
    assert_eq!(fixture.geo.calls(), 0);
}

#[test]
fn reject_short_address_queries() {
    let fixture = BackendFixture::with_geocoding_result(52.5, 13.4);
    let err = flows::search_by_address(
        &fixture.db_connections,
        &fixture.geo,
        " B ",
        Distance::from_km(1.0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AddressQuery))
    ));
    assert_eq!(fixture.geo.calls(), 0);
}
