use super::prelude::*;
use crate::repositories::Error as RepoError;

use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub addresses: RefCell<Vec<Address>>,
}

impl AddressRepo for MockDb {
    fn get_address(&self, id: &str) -> RepoResult<Address> {
        self.addresses
            .borrow()
            .iter()
            .find(|a| a.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_addresses(&self) -> RepoResult<Vec<Address>> {
        Ok(self.addresses.borrow().clone())
    }

    fn count_addresses(&self) -> RepoResult<usize> {
        Ok(self.addresses.borrow().len())
    }

    fn addresses_within_bbox(&self, bbox: &MapBbox) -> RepoResult<Vec<Address>> {
        Ok(self
            .addresses
            .borrow()
            .iter()
            .filter(|a| a.pos.is_some_and(|pos| bbox.contains_point(pos)))
            .cloned()
            .collect())
    }

    fn create_address(&self, address: &Address) -> RepoResult<()> {
        if self.get_address(address.id.as_str()).is_ok() {
            return Err(RepoError::AlreadyExists);
        }
        self.addresses.borrow_mut().push(address.clone());
        Ok(())
    }

    fn update_address(&self, address: &Address) -> RepoResult<()> {
        let mut addresses = self.addresses.borrow_mut();
        let old = addresses
            .iter_mut()
            .find(|a| a.id == address.id)
            .ok_or(RepoError::NotFound)?;
        *old = address.clone();
        Ok(())
    }

    fn delete_address(&self, id: &str) -> RepoResult<()> {
        let mut addresses = self.addresses.borrow_mut();
        let len = addresses.len();
        addresses.retain(|a| a.id.as_str() != id);
        if addresses.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

/// Geocoder that answers every query with the same result.
#[derive(Default)]
pub struct DummyGeoGW {
    result: Option<(f64, f64)>,
    queries: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl DummyGeoGW {
    pub fn resolving(lat: f64, lng: f64) -> Self {
        Self {
            result: Some((lat, lng)),
            ..Default::default()
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.borrow().last().cloned()
    }
}

impl GeoCodingGateway for DummyGeoGW {
    fn resolve_address_lat_lng(&self, query: &str) -> Option<(f64, f64)> {
        self.calls.set(self.calls.get() + 1);
        self.queries.borrow_mut().push(query.to_owned());
        self.result
    }
}
