use std::f64::consts::FRAC_PI_2;

use crate::entities::*;

/// Approximate length of one degree of latitude.
const KM_PER_LAT_DEG: f64 = 111.0;

/// The bounding box is enlarged by 10% in each direction.
const BBOX_SAFETY_MARGIN: f64 = 1.1;

/// Rectangular pre-filter around a circle on the map.
///
/// The box is cheap to query but only approximates the circle:
/// every point within `radius` of `center` is contained in the box,
/// the opposite does not hold. Boxes near the poles cover all
/// longitudes and boxes that reach beyond the antimeridian wrap
/// around.
pub fn bbox_around(center: MapPoint, radius: Distance) -> MapBbox {
    debug_assert!(center.is_valid());
    debug_assert!(radius.is_valid());
    let (lat_deg, lng_deg) = center.to_lat_lng_deg();
    let radius_km = radius.to_km();

    let lat_ext_deg = radius_km / KM_PER_LAT_DEG * BBOX_SAFETY_MARGIN;
    let south_lat_deg = LatCoord::min().to_deg().max(lat_deg - lat_ext_deg);
    let north_lat_deg = LatCoord::max().to_deg().min(lat_deg + lat_ext_deg);

    let (west_lng_deg, east_lng_deg) = if south_lat_deg <= LatCoord::min().to_deg()
        || north_lat_deg >= LatCoord::max().to_deg()
    {
        // A circle around a pole covers all longitudes
        full_lng_range()
    } else {
        match lng_ext_deg(center, radius) {
            Some(lng_ext_deg) => wrapped_lng_range(lng_deg, lng_ext_deg),
            None => full_lng_range(),
        }
    };

    let bbox = MapBbox::new(
        MapPoint::from_lat_lng_deg(south_lat_deg, west_lng_deg),
        MapPoint::from_lat_lng_deg(north_lat_deg, east_lng_deg),
    );
    debug_assert!(bbox.is_valid());
    bbox
}

fn full_lng_range() -> (f64, f64) {
    (LngCoord::min().to_deg(), LngCoord::max().to_deg())
}

/// Longitude extension in degrees or `None` if all longitudes are covered.
fn lng_ext_deg(center: MapPoint, radius: Distance) -> Option<f64> {
    let lat_cos = center.lat().to_rad().cos();
    // `lat_cos` approaches 0 near the poles and the quotient
    // may become arbitrarily large or even infinite.
    let approx_deg = radius.to_km() / (KM_PER_LAT_DEG * lat_cos) * BBOX_SAFETY_MARGIN;
    let max_deg = (LngCoord::max().to_deg() - LngCoord::min().to_deg()) / 2.0;
    if !(approx_deg < max_deg) {
        return None;
    }
    // At high latitudes the linear approximation underestimates the
    // spherical extent of the circle.
    let exact_deg = spherical_lng_ext_deg(lat_cos, radius)?;
    if !(exact_deg < max_deg) {
        return None;
    }
    Some(approx_deg.max(exact_deg))
}

fn spherical_lng_ext_deg(lat_cos: f64, radius: Distance) -> Option<f64> {
    let angle_rad = radius.to_km() / MEAN_EARTH_RADIUS.to_km();
    if angle_rad >= FRAC_PI_2 {
        return None;
    }
    let ratio = angle_rad.sin() / lat_cos;
    if !(ratio < 1.0) {
        return None;
    }
    Some(ratio.asin().to_degrees())
}

fn wrapped_lng_range(lng_deg: f64, lng_ext_deg: f64) -> (f64, f64) {
    let lng_min = LngCoord::min().to_deg();
    let lng_max = LngCoord::max().to_deg();
    let full_circle = lng_max - lng_min;
    let mut west_lng_deg = lng_deg - lng_ext_deg;
    if west_lng_deg < lng_min {
        // wrap around
        west_lng_deg += full_circle;
    }
    let mut east_lng_deg = lng_deg + lng_ext_deg;
    if east_lng_deg > lng_max {
        // wrap around
        east_lng_deg -= full_circle;
    }
    (west_lng_deg, east_lng_deg)
}
