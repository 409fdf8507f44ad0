//! Explicit route table and router construction.
//!
//! The table is the single source of truth the sitemap endpoint renders;
//! `app_router` registers the same paths. No process-wide registry.

use crate::handlers::{favorites, meta, people, planets, users, vehicles};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub methods: &'static [&'static str],
    pub path: &'static str,
}

const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { methods: &["GET"], path: "/" },
    RouteEntry { methods: &["GET"], path: "/user" },
    RouteEntry { methods: &["GET"], path: "/people" },
    RouteEntry { methods: &["GET"], path: "/people/{id}" },
    RouteEntry { methods: &["GET"], path: "/planets" },
    RouteEntry { methods: &["GET"], path: "/planets/{id}" },
    RouteEntry { methods: &["GET"], path: "/vehicles" },
    RouteEntry { methods: &["GET"], path: "/vehicles/{id}" },
    RouteEntry { methods: &["GET"], path: "/users" },
    RouteEntry { methods: &["GET"], path: "/users/favorites" },
    RouteEntry { methods: &["POST", "DELETE"], path: "/favorite/planet/{id}" },
    RouteEntry { methods: &["POST", "DELETE"], path: "/favorite/people/{id}" },
    RouteEntry { methods: &["POST", "DELETE"], path: "/favorite/vehicle/{id}" },
    RouteEntry { methods: &["POST"], path: "/create/planet" },
    RouteEntry { methods: &["POST"], path: "/create/people" },
    RouteEntry { methods: &["POST"], path: "/create/vehicle" },
    RouteEntry { methods: &["PUT"], path: "/update/planet/{id}" },
    RouteEntry { methods: &["PUT"], path: "/update/people/{id}" },
    RouteEntry { methods: &["PUT"], path: "/update/vehicle/{id}" },
    RouteEntry { methods: &["DELETE"], path: "/delete/planet/{id}" },
    RouteEntry { methods: &["DELETE"], path: "/delete/people/{id}" },
    RouteEntry { methods: &["DELETE"], path: "/delete/vehicle/{id}" },
];

pub fn route_table() -> &'static [RouteEntry] {
    ROUTE_TABLE
}

/// Build the full application router. Trailing slashes are handled by the
/// normalize-path layer the caller wraps around this router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::sitemap))
        .route("/user", get(meta::hello))
        .route("/people", get(people::list))
        .route("/people/:id", get(people::get))
        .route("/planets", get(planets::list))
        .route("/planets/:id", get(planets::get))
        .route("/vehicles", get(vehicles::list))
        .route("/vehicles/:id", get(vehicles::get))
        .route("/users", get(users::list))
        .route("/users/favorites", get(favorites::list_for_user))
        .route(
            "/favorite/planet/:id",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/favorite/people/:id",
            post(favorites::add_people).delete(favorites::remove_people),
        )
        .route(
            "/favorite/vehicle/:id",
            post(favorites::add_vehicle).delete(favorites::remove_vehicle),
        )
        .route("/create/planet", post(planets::create))
        .route("/create/people", post(people::create))
        .route("/create/vehicle", post(vehicles::create))
        .route("/update/planet/:id", put(planets::update))
        .route("/update/people/:id", put(people::update))
        .route("/update/vehicle/:id", put(vehicles::update))
        .route("/delete/planet/:id", delete(planets::delete))
        .route("/delete/people/:id", delete(people::delete))
        .route("/delete/vehicle/:id", delete(vehicles::delete))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_resource_surface() {
        let paths: Vec<&str> = ROUTE_TABLE.iter().map(|e| e.path).collect();
        for prefix in ["/people", "/planets", "/vehicles"] {
            assert!(paths.contains(&prefix));
        }
        for kind in ["planet", "people", "vehicle"] {
            assert!(paths.iter().any(|p| *p == format!("/favorite/{kind}/{{id}}")));
            assert!(paths.iter().any(|p| *p == format!("/create/{kind}")));
            assert!(paths.iter().any(|p| *p == format!("/update/{kind}/{{id}}")));
            assert!(paths.iter().any(|p| *p == format!("/delete/{kind}/{{id}}")));
        }
    }
}
