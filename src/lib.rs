//! Holocron: Star Wars blog REST backend.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Config;
pub use db::connect;
pub use error::AppError;
pub use response::{message, Message};
pub use routes::{app_router, route_table, RouteEntry};
pub use state::AppState;
