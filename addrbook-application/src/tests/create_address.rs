use super::prelude::*;

#[test]
fn create_with_explicit_position_and_read_back() {
    let fixture = BackendFixture::new();
    let created = fixture.create_address(new_address("Office", Some((48.778_412_3, 9.180_045_6))));
    assert_eq!(fixture.geo.calls(), 0);
    let loaded = flows::get_address(&fixture.db_connections, created.id.as_str()).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(
        loaded.pos,
        Some(MapPoint::from_lat_lng_deg(48.778_412_3, 9.180_045_6))
    );
    assert_eq!(loaded.name, "Office");
    assert_eq!(loaded.postal_code, "70173");
    assert_eq!(loaded.created_at, loaded.updated_at);
}

#[test]
fn create_with_geocoded_position() {
    let fixture = BackendFixture::with_geocoding_result(48.7784, 9.18);
    let created = fixture.create_address(new_address("Office", None));
    assert_eq!(fixture.geo.calls(), 1);
    assert_eq!(
        fixture.geo.queries.borrow()[0],
        "Königstraße 1, Mitte, Stuttgart, Germany"
    );
    assert_eq!(created.pos, Some(MapPoint::from_lat_lng_deg(48.7784, 9.18)));
    assert_eq!(fixture.count_addresses(), 1);
}

#[test]
fn create_fails_if_position_cannot_be_resolved() {
    let fixture = BackendFixture::new();
    let err = flows::create_address(
        &fixture.db_connections,
        &fixture.geo,
        new_address("Office", None),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::Geocoding))
    ));
    assert_eq!(fixture.geo.calls(), 1);
    assert_eq!(fixture.count_addresses(), 0);
}

#[test]
fn create_fails_if_geocoder_returns_an_invalid_position() {
    let fixture = BackendFixture::with_geocoding_result(123.0, 9.18);
    assert!(flows::create_address(
        &fixture.db_connections,
        &fixture.geo,
        new_address("Office", None),
    )
    .is_err());
    assert_eq!(fixture.count_addresses(), 0);
}

#[test]
fn create_with_invalid_postal_code() {
    let fixture = BackendFixture::with_geocoding_result(48.7784, 9.18);
    let new_address = usecases::NewAddress {
        postal_code: "1".into(),
        ..new_address("Office", None)
    };
    let err = flows::create_address(&fixture.db_connections, &fixture.geo, new_address)
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::PostalCode))
    ));
    assert_eq!(fixture.geo.calls(), 0);
}

#[test]
fn delete_address() {
    let fixture = BackendFixture::new();
    let created = fixture.create_address(new_address("Office", Some((1.0, 1.0))));
    flows::delete_address(&fixture.db_connections, created.id.as_str()).unwrap();
    assert_eq!(fixture.count_addresses(), 0);
    let err = flows::delete_address(&fixture.db_connections, created.id.as_str()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Repo(RepoError::NotFound))
    ));
    assert!(flows::all_addresses(&fixture.db_connections)
        .unwrap()
        .is_empty());
}
