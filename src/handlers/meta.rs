//! Sitemap and greeting endpoints.

use crate::routes::route_table;
use axum::Json;
use serde_json::{json, Value};

/// GET / renders the registered route table.
pub async fn sitemap() -> Json<Value> {
    let endpoints: Vec<Value> = route_table()
        .iter()
        .map(|entry| {
            json!({
                "methods": entry.methods,
                "path": entry.path,
            })
        })
        .collect();
    Json(json!({ "endpoints": endpoints }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "msg": "Hello, this is your GET /user response" }))
}
