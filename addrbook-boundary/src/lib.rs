use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Address {
    pub id          : String,
    pub name        : String,
    pub building    : String,
    pub area        : String,
    pub city        : String,
    pub postal_code : String,
    pub country     : String,
    pub latitude    : Option<f64>,
    pub longitude   : Option<f64>,
    /// Unix timestamp in milliseconds
    pub created_at  : i64,
    /// Unix timestamp in milliseconds
    pub updated_at  : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewAddress {
    pub name        : String,
    pub building    : String,
    pub area        : String,
    pub city        : String,
    pub postal_code : String,
    pub country     : String,
    #[serde(default)]
    pub latitude    : Option<f64>,
    #[serde(default)]
    pub longitude   : Option<f64>,
}

/// Partial update: omitted fields remain unchanged.
///
/// An explicit `null` removes the coordinate.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country     : Option<String>,
    #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub latitude    : Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub longitude   : Option<Option<f64>>,
}

// Distinguishes between a missing field (`None`) and `null` (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
