use serde::{Deserialize, Serialize};

/// Stored character row ("people" in the classic SWAPI naming).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub eye_color: Option<String>,
    pub height: Option<i64>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
}

/// Create payload. `name` is optional here so the handler can report the
/// missing field as HTTP 400 instead of a body-rejection.
#[derive(Debug, Deserialize)]
pub struct NewPerson {
    pub name: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<i64>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
}

/// Partial update: only fields present in the body are applied.
#[derive(Debug, Default, Deserialize)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub eye_color: Option<String>,
    pub height: Option<i64>,
    pub skin_color: Option<String>,
    pub gender: Option<String>,
}

impl Person {
    pub fn apply(&mut self, patch: PersonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(eye_color) = patch.eye_color {
            self.eye_color = Some(eye_color);
        }
        if let Some(height) = patch.height {
            self.height = Some(height);
        }
        if let Some(skin_color) = patch.skin_color {
            self.skin_color = Some(skin_color);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
    }
}
