use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use addrbook_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod address;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn load_address(address: models::Address) -> Address {
    let models::Address {
        id,
        name,
        building,
        area,
        city,
        postal_code,
        country,
        lat,
        lng,
        created_at,
        updated_at,
    } = address;
    let pos = lat.zip(lng).and_then(|(lat, lng)| {
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng);
        if pos.is_none() {
            // This should never happen
            log::warn!("Ignoring invalid position ({lat}, {lng}) of address {id}");
        }
        pos
    });
    Address {
        id: id.into(),
        name,
        building,
        area,
        city,
        postal_code,
        country,
        pos,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    }
}

fn get_address(conn: &mut SqliteConnection, id: &str) -> Result<Address> {
    use schema::addresses::dsl;
    let address = schema::addresses::table
        .filter(dsl::id.eq(id))
        .first::<models::Address>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_address(address))
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<Address>> {
    use schema::addresses::dsl;
    Ok(schema::addresses::table
        .order_by((dsl::created_at, dsl::id))
        .load::<models::Address>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_address)
        .collect())
}

fn count_addresses(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::addresses::table
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn addresses_within_bbox(conn: &mut SqliteConnection, bbox: &MapBbox) -> Result<Vec<Address>> {
    use schema::addresses::dsl;
    let (south_west_lat, south_west_lng) = bbox.southwest().to_lat_lng_deg();
    let (north_east_lat, north_east_lng) = bbox.northeast().to_lat_lng_deg();
    // Rows without a position never match
    let mut query = schema::addresses::table
        .filter(dsl::lat.between(south_west_lat, north_east_lat))
        .into_boxed();
    if bbox.crosses_antimeridian() {
        query = query.filter(
            dsl::lng
                .ge(south_west_lng)
                .or(dsl::lng.le(north_east_lng)),
        );
    } else {
        query = query.filter(dsl::lng.between(south_west_lng, north_east_lng));
    }
    Ok(query
        .load::<models::Address>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_address)
        .collect())
}

fn create_address(conn: &mut SqliteConnection, address: &Address) -> Result<()> {
    let (lat, lng) = address.pos.map(MapPoint::to_lat_lng_deg).unzip();
    let new_address = models::NewAddress {
        id: address.id.as_str(),
        name: &address.name,
        building: &address.building,
        area: &address.area,
        city: &address.city,
        postal_code: &address.postal_code,
        country: &address.country,
        lat,
        lng,
        created_at: address.created_at.as_millis(),
        updated_at: address.updated_at.as_millis(),
    };
    diesel::insert_into(schema::addresses::table)
        .values(&new_address)
        .execute(conn)
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                repo::Error::AlreadyExists
            }
            _ => from_diesel_err(err),
        })?;
    Ok(())
}

fn update_address(conn: &mut SqliteConnection, address: &Address) -> Result<()> {
    use schema::addresses::dsl;
    let (lat, lng) = address.pos.map(MapPoint::to_lat_lng_deg).unzip();
    let count = diesel::update(schema::addresses::table.filter(dsl::id.eq(address.id.as_str())))
        .set((
            dsl::name.eq(&address.name),
            dsl::building.eq(&address.building),
            dsl::area.eq(&address.area),
            dsl::city.eq(&address.city),
            dsl::postal_code.eq(&address.postal_code),
            dsl::country.eq(&address.country),
            dsl::lat.eq(lat),
            dsl::lng.eq(lng),
            dsl::updated_at.eq(address.updated_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_address(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::addresses::dsl;
    let count = diesel::delete(schema::addresses::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
