//! Vehicle CRUD handlers.

use crate::error::AppError;
use crate::models::{NewVehicle, Vehicle, VehiclePatch};
use crate::response::{message, Message};
use crate::service::vehicles;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    Ok(Json(vehicles::list(&state.pool).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vehicle>, AppError> {
    let vehicle = vehicles::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".into()))?;
    Ok(Json(vehicle))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewVehicle>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = body
        .name
        .clone()
        .ok_or_else(|| AppError::BadRequest("Missing required field: name".into()))?;
    let vehicle = vehicles::create(&state.pool, &name, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Vehicle created successfully",
            "vehicle": vehicle,
        })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<VehiclePatch>,
) -> Result<Json<Message>, AppError> {
    let mut vehicle = vehicles::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".into()))?;
    vehicle.apply(patch);
    vehicles::update(&state.pool, &vehicle).await?;
    Ok(Json(message("Vehicle updated successfully")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !vehicles::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Vehicle not found".into()));
    }
    Ok(Json(message("Vehicle deleted successfully")))
}
