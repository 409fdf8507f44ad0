//! User handlers. List only; the serialized shape never includes passwords.

use crate::error::AppError;
use crate::models::User;
use crate::service::users;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(users::list(&state.pool).await?))
}
