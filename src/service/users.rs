//! User queries. The HTTP surface only lists users; rows are seeded out of
//! band (admin tooling, fixtures).

use crate::models::User;
use sqlx::SqlitePool;

pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, email, password, is_active, first_name, last_name, username \
         FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
pub mod test {
    use sqlx::SqlitePool;

    /// Insert a user row for tests that need a favorites owner.
    pub async fn seed_user(pool: &SqlitePool, username: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO users (email, password, is_active, first_name, last_name, username) \
             VALUES (?, ?, 1, ?, ?, ?) RETURNING id",
        )
        .bind(format!("{username}@rebellion.org"))
        .bind("plaintext")
        .bind(username)
        .bind("Tester")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap();
        row.0
    }
}
