use super::prelude::*;
use crate::{bbox::bbox_around, util::validate::is_valid_radius};

pub fn check_search_radius(radius: Distance) -> Result<()> {
    if !is_valid_radius(radius) {
        return Err(Error::InvalidRadius);
    }
    Ok(())
}

/// All addresses within `radius` around `center`, nearest first.
///
/// Candidates are pre-filtered by a bounding box and then refined
/// by their great-circle distance.
pub fn search_by_coordinates<R: AddressRepo>(
    repo: &R,
    center: MapPoint,
    radius: Distance,
) -> Result<Vec<Address>> {
    check_search_radius(radius)?;
    if !center.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let bbox = bbox_around(center, radius);
    let candidates = repo.addresses_within_bbox(&bbox)?;
    let candidate_count = candidates.len();
    let mut results: Vec<_> = candidates
        .into_iter()
        .filter_map(|address| {
            let distance = MapPoint::distance(center, address.pos?)?;
            (distance <= radius).then_some((distance, address))
        })
        .collect();
    results.sort_by(|(lhs, _), (rhs, _)| lhs.to_km().total_cmp(&rhs.to_km()));
    debug!(
        "Found {} of {} candidates within {} around {}",
        results.len(),
        candidate_count,
        radius,
        center
    );
    Ok(results.into_iter().map(|(_, address)| address).collect())
}
