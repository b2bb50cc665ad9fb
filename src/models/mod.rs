// Aggregates and their pure mutation rules

pub mod exercise;
pub mod ordering;
pub mod workout;
pub mod workout_schedule;
pub mod workout_template;

pub use exercise::*;
pub use workout::*;
pub use workout_schedule::*;
pub use workout_template::*;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A top-level entity with its own identity, owner and repository.
pub trait Aggregate: Clone + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// Human-readable name used in `NotFound` errors.
    const NAME: &'static str;

    fn id(&self) -> Uuid;
    fn owner_id(&self) -> Uuid;
}
