//! Pool construction and schema migration.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the store at `database_url`, creating the file if missing, and apply
/// pending migrations. Foreign keys are declared but not enforced: deleting a
/// planet leaves favorites pointing at it, and a favorite's user_id is taken
/// as given.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .foreign_keys(false)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(sqlx::Error::from)?;
    Ok(pool)
}

#[cfg(test)]
pub mod test {
    use sqlx::SqlitePool;

    /// Fresh file-backed store in a temp directory. Returns the guard so the
    /// file outlives the test.
    pub async fn test_pool() -> (SqlitePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let pool = super::connect(&url).await.unwrap();
        (pool, dir)
    }
}
