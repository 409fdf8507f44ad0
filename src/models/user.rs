use serde::Serialize;

/// Stored user row. The password is kept out of every response body.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub is_active: bool,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}
