#[macro_use]
extern crate log;

mod create_address;
mod delete_address;
mod load_addresses;
mod search_addresses;
mod update_address;

pub mod prelude {
    pub use super::{
        create_address::*, delete_address::*, load_addresses::*, search_addresses::*,
        update_address::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use addrbook_core::{entities::*, gateways::geocode::GeoCodingGateway, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use addrbook_db_sqlite::Connections;
}
