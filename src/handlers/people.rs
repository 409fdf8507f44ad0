//! Character CRUD handlers.

use crate::error::AppError;
use crate::models::{NewPerson, Person, PersonPatch};
use crate::response::{message, Message};
use crate::service::people;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    Ok(Json(people::list(&state.pool).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, AppError> {
    let person = people::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Character not found".into()))?;
    Ok(Json(person))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewPerson>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = body
        .name
        .clone()
        .ok_or_else(|| AppError::BadRequest("Missing required field: name".into()))?;
    let person = people::create(&state.pool, &name, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "People created successfully",
            "people": person,
        })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PersonPatch>,
) -> Result<Json<Message>, AppError> {
    let mut person = people::fetch(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))?;
    person.apply(patch);
    people::update(&state.pool, &person).await?;
    Ok(Json(message("Person updated successfully")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if !people::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Person not found".into()));
    }
    Ok(Json(message("Person deleted successfully")))
}
