use super::*;

pub fn get_address(connections: &sqlite::Connections, id: &str) -> Result<Address> {
    let db = connections.shared()?;
    Ok(usecases::get_address(&db, id)?)
}

pub fn all_addresses(connections: &sqlite::Connections) -> Result<Vec<Address>> {
    let db = connections.shared()?;
    Ok(usecases::load_all_addresses(&db)?)
}
