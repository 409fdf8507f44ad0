use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub passengers: Option<i64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<i64>,
    pub length: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NewVehicle {
    pub name: Option<String>,
    pub model: Option<String>,
    pub passengers: Option<i64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<i64>,
    pub length: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VehiclePatch {
    pub name: Option<String>,
    pub model: Option<String>,
    pub passengers: Option<i64>,
    pub cost_in_credits: Option<i64>,
    pub crew: Option<i64>,
    pub length: Option<i64>,
}

impl Vehicle {
    pub fn apply(&mut self, patch: VehiclePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(model) = patch.model {
            self.model = Some(model);
        }
        if let Some(passengers) = patch.passengers {
            self.passengers = Some(passengers);
        }
        if let Some(cost) = patch.cost_in_credits {
            self.cost_in_credits = Some(cost);
        }
        if let Some(crew) = patch.crew {
            self.crew = Some(crew);
        }
        if let Some(length) = patch.length {
            self.length = Some(length);
        }
    }
}
