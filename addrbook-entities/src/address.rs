use crate::{geo::MapPoint, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id          : Id,
    pub name        : String,
    pub building    : String,
    pub area        : String,
    pub city        : String,
    pub postal_code : String,
    pub country     : String,
    /// Geocoded or explicitly supplied location.
    pub pos         : Option<MapPoint>,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}

impl Address {
    pub fn has_valid_pos(&self) -> bool {
        self.pos.is_some_and(MapPoint::is_valid)
    }

    /// Free-text query for resolving the location of this address.
    ///
    /// The name and the postal code are not part of the query.
    pub fn geocoding_query(&self) -> String {
        [
            self.building.as_str(),
            self.area.as_str(),
            self.city.as_str(),
            self.country.as_str(),
        ]
        .join(", ")
    }
}
