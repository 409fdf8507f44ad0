//! Planet queries.

use crate::models::{NewPlanet, Planet};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, gravity, population, climate, diameter";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM planets ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM planets WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a row; `name` has already been presence-checked by the handler.
pub async fn create(
    pool: &SqlitePool,
    name: &str,
    new: &NewPlanet,
) -> Result<Planet, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO planets (name, gravity, population, climate, diameter) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(name)
    .bind(new.gravity)
    .bind(new.population)
    .bind(new.climate.as_deref())
    .bind(new.diameter)
    .fetch_one(pool)
    .await
}

/// Write back a full row after the handler applied a patch to it.
pub async fn update(pool: &SqlitePool, planet: &Planet) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE planets SET name = ?, gravity = ?, population = ?, climate = ?, diameter = ? \
         WHERE id = ?",
    )
    .bind(&planet.name)
    .bind(planet.gravity)
    .bind(planet.population)
    .bind(planet.climate.as_deref())
    .bind(planet.diameter)
    .bind(planet.id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Returns false when no row had that id.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM planets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test::test_pool;
    use crate::models::PlanetPatch;

    fn tatooine() -> NewPlanet {
        NewPlanet {
            name: Some("Tatooine".into()),
            gravity: None,
            population: None,
            climate: Some("arid".into()),
            diameter: None,
        }
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let (pool, _dir) = test_pool().await;
        let created = create(&pool, "Tatooine", &tatooine()).await.unwrap();
        let fetched = fetch(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Tatooine");
        assert_eq!(fetched.climate.as_deref(), Some("arid"));
        assert_eq!(fetched.gravity, None);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_by_the_store() {
        let (pool, _dir) = test_pool().await;
        create(&pool, "Hoth", &tatooine()).await.unwrap();
        let err = create(&pool, "Hoth", &tatooine()).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Database(_)));
    }

    #[tokio::test]
    async fn update_persists_patched_fields_only() {
        let (pool, _dir) = test_pool().await;
        let mut planet = create(&pool, "Tatooine", &tatooine()).await.unwrap();
        planet.apply(PlanetPatch {
            population: Some(200_000),
            ..Default::default()
        });
        update(&pool, &planet).await.unwrap();
        let fetched = fetch(&pool, planet.id).await.unwrap().unwrap();
        assert_eq!(fetched.population, Some(200_000));
        assert_eq!(fetched.climate.as_deref(), Some("arid"));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (pool, _dir) = test_pool().await;
        let planet = create(&pool, "Alderaan", &tatooine()).await.unwrap();
        assert!(delete(&pool, planet.id).await.unwrap());
        assert!(fetch(&pool, planet.id).await.unwrap().is_none());
        assert!(!delete(&pool, planet.id).await.unwrap());
    }
}
