use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl Default for LatCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl Default for LngCoord {
    fn default() -> Self {
        let res = Self(f64::NAN);
        debug_assert!(!res.is_valid());
        res
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location given in degrees.
///
/// The default value is invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lng(String),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split_once(',') else {
            return Err(MapPointParseError::Format(s.to_owned()));
        };
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| MapPointParseError::Lat(lat_str.to_owned()))?;
        let lng = lng_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| MapPointParseError::Lng(lng_str.to_owned()))?;
        Ok(Self::new(lat, lng))
    }
}

/// A distance on the surface of the earth in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_km(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

pub const MEAN_EARTH_RADIUS: Distance = Distance::from_km(6371.0);

impl MapPoint {
    /// Great-circle distance on the surface of the earth
    /// calculated with the haversine formula.
    ///
    /// Returns `None` if one of the points is invalid.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        // Rounding errors may push `a` slightly out of [0, 1]
        // for antipodal points or points near the poles.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_km(MEAN_EARTH_RADIUS.to_km() * c))
    }
}

/// A rectangular area on the map.
///
/// If the south west longitude is greater than the north east
/// longitude the box wraps around the antimeridian.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub fn whole_world() -> Self {
        Self::new(
            MapPoint::new(LatCoord::min(), LngCoord::min()),
            MapPoint::new(LatCoord::max(), LngCoord::max()),
        )
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.sw.lng() > self.ne.lng()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if !pt.is_valid() {
            return false;
        }
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.crosses_antimeridian() {
            pt.lng() >= self.sw.lng() || pt.lng() <= self.ne.lng()
        } else {
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
