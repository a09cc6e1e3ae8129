#[macro_use]
extern crate log;

pub mod bbox;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use addrbook_entities::{address::*, geo::*, id::*, time::*};
}
