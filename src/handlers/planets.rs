//! Planet CRUD handlers.

use crate::error::AppError;
use crate::models::{NewPlanet, Planet, PlanetPatch};
use crate::response::{message, Message};
use crate::service::planets;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, AppError> {
    Ok(Json(planets::list(&state.pool).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Planet>, AppError> {
    let planet = planets::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(Json(planet))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewPlanet>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = body
        .name
        .clone()
        .ok_or_else(|| AppError::BadRequest("Missing required field: name".into()))?;
    let planet = planets::create(&state.pool, &name, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Planet created successfully",
            "planet": planet,
        })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PlanetPatch>,
) -> Result<Json<Message>, AppError> {
    let mut planet = planets::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    planet.apply(patch);
    planets::update(&state.pool, &planet).await?;
    Ok(Json(message("Planet updated successfully")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !planets::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Planet not found".into()));
    }
    Ok(Json(message("Planet deleted successfully")))
}
