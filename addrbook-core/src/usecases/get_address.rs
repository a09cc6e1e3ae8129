use super::prelude::*;

pub fn get_address<R: AddressRepo>(repo: &R, id: &str) -> Result<Address> {
    Ok(repo.get_address(id)?)
}

pub fn load_all_addresses<R: AddressRepo>(repo: &R) -> Result<Vec<Address>> {
    Ok(repo.all_addresses()?)
}
