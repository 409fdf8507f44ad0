//! Row types and request payloads for the five resource tables.
//!
//! Each entity has a row struct (`FromRow` + `Serialize`), a create payload
//! whose `name` is `Option` so handlers can answer HTTP 400 when it is
//! missing, and an all-`Option` patch struct for partial updates.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use favorite::{Favorite, FavoriteKind};
pub use people::{NewPerson, PersonPatch, Person};
pub use planet::{NewPlanet, Planet, PlanetPatch};
pub use user::User;
pub use vehicle::{NewVehicle, Vehicle, VehiclePatch};
