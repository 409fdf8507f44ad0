//! Favorite association queries.
//!
//! The target column is chosen from `FavoriteKind`; column and table names
//! come from the enum, never from request input.

use crate::models::{Favorite, FavoriteKind};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, user_id, planet_id, people_id, vehicle_id";

pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM favorites WHERE user_id = ? ORDER BY id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// The existing (user, target) row, if any.
pub async fn find(
    pool: &SqlitePool,
    user_id: i64,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<Option<Favorite>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM favorites WHERE user_id = ? AND {} = ?",
        kind.column()
    ))
    .bind(user_id)
    .bind(target_id)
    .fetch_optional(pool)
    .await
}

pub async fn target_exists(
    pool: &SqlitePool,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(&format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)",
        kind.target_table()
    ))
    .bind(target_id)
    .fetch_one(pool)
    .await?;
    Ok(row.0 != 0)
}

pub async fn add(
    pool: &SqlitePool,
    user_id: i64,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<Favorite, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO favorites (user_id, {}) VALUES (?, ?) RETURNING {COLUMNS}",
        kind.column()
    ))
    .bind(user_id)
    .bind(target_id)
    .fetch_one(pool)
    .await
}

/// Returns false when no matching (user, target) row existed.
pub async fn remove(
    pool: &SqlitePool,
    user_id: i64,
    kind: FavoriteKind,
    target_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(&format!(
        "DELETE FROM favorites WHERE user_id = ? AND {} = ?",
        kind.column()
    ))
    .bind(user_id)
    .bind(target_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test::test_pool;
    use crate::models::{NewPlanet, NewVehicle};
    use crate::service::users::test::seed_user;
    use crate::service::{planets, vehicles};

    async fn seed_planet(pool: &SqlitePool, name: &str) -> i64 {
        let new = NewPlanet {
            name: Some(name.into()),
            gravity: None,
            population: None,
            climate: None,
            diameter: None,
        };
        planets::create(pool, name, &new).await.unwrap().id
    }

    #[tokio::test]
    async fn add_find_remove_cycle() {
        let (pool, _dir) = test_pool().await;
        let user_id = seed_user(&pool, "luke").await;
        let planet_id = seed_planet(&pool, "Dagobah").await;

        let favorite = add(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap();
        assert_eq!(favorite.planet_id, Some(planet_id));
        assert_eq!(favorite.people_id, None);

        assert!(find(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap()
            .is_some());
        assert!(remove(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap());
        assert!(find(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_pair_is_rejected_by_the_unique_index() {
        let (pool, _dir) = test_pool().await;
        let user_id = seed_user(&pool, "luke").await;
        let planet_id = seed_planet(&pool, "Dagobah").await;

        add(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap();
        let err = add(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap_err();
        assert!(matches!(err, sqlx::Error::Database(_)));

        let rows = list_for_user(&pool, user_id).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn kinds_do_not_collide() {
        let (pool, _dir) = test_pool().await;
        let user_id = seed_user(&pool, "luke").await;
        let planet_id = seed_planet(&pool, "Dagobah").await;
        let vehicle_id = {
            let new = NewVehicle {
                name: Some("X-wing".into()),
                model: None,
                passengers: None,
                cost_in_credits: None,
                crew: None,
                length: None,
            };
            vehicles::create(&pool, "X-wing", &new).await.unwrap().id
        };

        add(&pool, user_id, FavoriteKind::Planet, planet_id)
            .await
            .unwrap();
        add(&pool, user_id, FavoriteKind::Vehicle, vehicle_id)
            .await
            .unwrap();
        let rows = list_for_user(&pool, user_id).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn unknown_user_id_is_taken_as_given() {
        // user_id is not validated against the users table.
        let (pool, _dir) = test_pool().await;
        let planet_id = seed_planet(&pool, "Dagobah").await;
        let favorite = add(&pool, 999, FavoriteKind::Planet, planet_id)
            .await
            .unwrap();
        assert_eq!(favorite.user_id, 999);
    }
}
