use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Aggregate;

/// A named exercise definition in a user's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl Exercise {
    pub fn new(name: String, owner_id: Uuid, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            description,
        }
    }

    /// Full replace of the mutable fields; identity and owner are kept.
    pub fn replace_details(&mut self, name: String, description: Option<String>) {
        self.name = name;
        self.description = description;
    }
}

impl Aggregate for Exercise {
    const NAME: &'static str = "Exercise";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: String,
    pub description: Option<String>,
}

pub type UpdateExerciseRequest = CreateExerciseRequest;
