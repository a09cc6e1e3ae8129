// Low-level database access traits.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    fn get_address(&self, id: &str) -> Result<Address>;
    fn all_addresses(&self) -> Result<Vec<Address>>;
    fn count_addresses(&self) -> Result<usize>;

    /// All addresses with a position inside the bounding box.
    ///
    /// Addresses without a position are never included.
    fn addresses_within_bbox(&self, bbox: &MapBbox) -> Result<Vec<Address>>;

    fn create_address(&self, address: &Address) -> Result<()>;
    fn update_address(&self, address: &Address) -> Result<()>;
    fn delete_address(&self, id: &str) -> Result<()>;
}
