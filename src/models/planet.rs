use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub gravity: Option<i64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub diameter: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub gravity: Option<i64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub diameter: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanetPatch {
    pub name: Option<String>,
    pub gravity: Option<i64>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub diameter: Option<i64>,
}

impl Planet {
    pub fn apply(&mut self, patch: PlanetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(gravity) = patch.gravity {
            self.gravity = Some(gravity);
        }
        if let Some(population) = patch.population {
            self.population = Some(population);
        }
        if let Some(climate) = patch.climate {
            self.climate = Some(climate);
        }
        if let Some(diameter) = patch.diameter {
            self.diameter = Some(diameter);
        }
    }
}
