//! Vehicle queries.

use crate::models::{NewVehicle, Vehicle};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, model, passengers, cost_in_credits, crew, length";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Vehicle>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM vehicles ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Vehicle>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM vehicles WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    new: &NewVehicle,
) -> Result<Vehicle, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO vehicles (name, model, passengers, cost_in_credits, crew, length) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(name)
    .bind(new.model.as_deref())
    .bind(new.passengers)
    .bind(new.cost_in_credits)
    .bind(new.crew)
    .bind(new.length)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, vehicle: &Vehicle) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE vehicles SET name = ?, model = ?, passengers = ?, cost_in_credits = ?, \
         crew = ?, length = ? WHERE id = ?",
    )
    .bind(&vehicle.name)
    .bind(vehicle.model.as_deref())
    .bind(vehicle.passengers)
    .bind(vehicle.cost_in_credits)
    .bind(vehicle.crew)
    .bind(vehicle.length)
    .bind(vehicle.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test::test_pool;

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let (pool, _dir) = test_pool().await;
        let new = NewVehicle {
            name: Some("Snowspeeder".into()),
            model: Some("t-47 airspeeder".into()),
            passengers: Some(2),
            cost_in_credits: None,
            crew: Some(2),
            length: None,
        };
        let created = create(&pool, "Snowspeeder", &new).await.unwrap();
        let fetched = fetch(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.model.as_deref(), Some("t-47 airspeeder"));
        assert_eq!(fetched.cost_in_credits, None);
    }
}
