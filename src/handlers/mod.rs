//! Request handlers: direct request -> query -> serialize -> respond.

pub mod favorites;
pub mod meta;
pub mod people;
pub mod planets;
pub mod users;
pub mod vehicles;
