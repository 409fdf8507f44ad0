//! Character ("people") queries.

use crate::models::{NewPerson, Person};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, eye_color, height, skin_color, gender";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Person>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM people ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM people WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    new: &NewPerson,
) -> Result<Person, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO people (name, eye_color, height, skin_color, gender) \
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(name)
    .bind(new.eye_color.as_deref())
    .bind(new.height)
    .bind(new.skin_color.as_deref())
    .bind(new.gender.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &SqlitePool, person: &Person) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE people SET name = ?, eye_color = ?, height = ?, skin_color = ?, gender = ? \
         WHERE id = ?",
    )
    .bind(&person.name)
    .bind(person.eye_color.as_deref())
    .bind(person.height)
    .bind(person.skin_color.as_deref())
    .bind(person.gender.as_deref())
    .bind(person.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM people WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
