use serde::Serialize;

/// Association row linking a user to exactly one target entity.
///
/// The stored column for characters is `people_id` and the JSON field matches
/// it (an earlier revision serialized it as `person_id`, which no column
/// defined).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

/// Which target column a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    People,
    Vehicle,
}

impl FavoriteKind {
    /// Column in `favorites` holding the target id.
    pub fn column(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planet_id",
            FavoriteKind::People => "people_id",
            FavoriteKind::Vehicle => "vehicle_id",
        }
    }

    /// Table the target id references.
    pub fn target_table(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "planets",
            FavoriteKind::People => "people",
            FavoriteKind::Vehicle => "vehicles",
        }
    }

    /// Noun used in response messages ("Planet not found" etc.).
    pub fn noun(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet",
            FavoriteKind::People => "People",
            FavoriteKind::Vehicle => "Vehicle",
        }
    }
}
