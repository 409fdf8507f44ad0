//! Query layer: one module per resource table. Handlers never build SQL.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
pub mod vehicles;
