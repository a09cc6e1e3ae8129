use super::*;
use addrbook_entities as e;

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            id,
            name,
            building,
            area,
            city,
            postal_code,
            country,
            pos,
            created_at,
            updated_at,
        } = from;
        let (latitude, longitude) = pos.map(|pos| pos.to_lat_lng_deg()).unzip();
        Self {
            id: id.into(),
            name,
            building,
            area,
            city,
            postal_code,
            country,
            latitude,
            longitude,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}
