//! Favorite association handlers.
//!
//! Add is a check-then-insert: the duplicate lookup produces the friendly
//! HTTP 400, and the unique indexes in the schema close the race two
//! concurrent adds would otherwise win together.

use crate::error::AppError;
use crate::models::{Favorite, FavoriteKind};
use crate::response::{message, Message};
use crate::service::favorites;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

/// `?user_id=` query parameter shared by every favorites endpoint. The id is
/// not checked against the users table.
#[derive(Deserialize)]
pub struct UserIdParam {
    pub user_id: i64,
}

pub async fn list_for_user(
    State(state): State<AppState>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Vec<Favorite>>, AppError> {
    Ok(Json(
        favorites::list_for_user(&state.pool, params.user_id).await?,
    ))
}

async fn add(
    state: &AppState,
    kind: FavoriteKind,
    target_id: i64,
    user_id: i64,
) -> Result<Json<Message>, AppError> {
    if favorites::find(&state.pool, user_id, kind, target_id)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(format!(
            "Is already a favorite {} of the user",
            kind.noun().to_lowercase()
        )));
    }
    if !favorites::target_exists(&state.pool, kind, target_id).await? {
        return Err(AppError::NotFound(format!(
            "{} does not exist",
            kind.noun()
        )));
    }
    favorites::add(&state.pool, user_id, kind, target_id).await?;
    Ok(Json(message(format!("{} set as favorite", kind.noun()))))
}

async fn remove(
    state: &AppState,
    kind: FavoriteKind,
    target_id: i64,
    user_id: i64,
) -> Result<Json<Message>, AppError> {
    if !favorites::remove(&state.pool, user_id, kind, target_id).await? {
        return Err(AppError::NotFound(format!(
            "Favorite {} not found",
            kind.noun()
        )));
    }
    Ok(Json(message(format!("Favorite {} deleted", kind.noun()))))
}

pub async fn add_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Message>, AppError> {
    add(&state, FavoriteKind::Planet, id, params.user_id).await
}

pub async fn add_people(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Message>, AppError> {
    add(&state, FavoriteKind::People, id, params.user_id).await
}

pub async fn add_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Message>, AppError> {
    add(&state, FavoriteKind::Vehicle, id, params.user_id).await
}

pub async fn remove_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Message>, AppError> {
    remove(&state, FavoriteKind::Planet, id, params.user_id).await
}

pub async fn remove_people(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Message>, AppError> {
    remove(&state, FavoriteKind::People, id, params.user_id).await
}

pub async fn remove_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<UserIdParam>,
) -> Result<Json<Message>, AppError> {
    remove(&state, FavoriteKind::Vehicle, id, params.user_id).await
}
