//! Storage abstraction, one repository per aggregate.
//!
//! Services only see [`AggregateRepository`] trait objects. Two backings
//! exist: [`InMemoryRepository`] for tests and local runs, and
//! [`PgRepository`] storing each aggregate as a JSONB document.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Aggregate, Exercise, Workout, WorkoutSchedule, WorkoutTemplate};

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait AggregateRepository<A: Aggregate>: Send + Sync {
    /// Returns the aggregate only when it exists and belongs to `owner_id`.
    async fn get(&self, id: Uuid, owner_id: Uuid) -> Result<Option<A>, RepositoryError>;

    /// Upsert keyed by the aggregate id.
    async fn save(&self, aggregate: &A) -> Result<(), RepositoryError>;

    /// No-op when the aggregate is absent or owned by someone else.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), RepositoryError>;

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<A>, RepositoryError>;
}

pub type ExerciseRepository = Arc<dyn AggregateRepository<Exercise>>;
pub type WorkoutTemplateRepository = Arc<dyn AggregateRepository<WorkoutTemplate>>;
pub type WorkoutRepository = Arc<dyn AggregateRepository<Workout>>;
pub type WorkoutScheduleRepository = Arc<dyn AggregateRepository<WorkoutSchedule>>;

/// The full set of repositories the services are wired with.
#[derive(Clone)]
pub struct Repositories {
    pub exercises: ExerciseRepository,
    pub workout_templates: WorkoutTemplateRepository,
    pub workouts: WorkoutRepository,
    pub workout_schedules: WorkoutScheduleRepository,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            exercises: Arc::new(InMemoryRepository::<Exercise>::new()),
            workout_templates: Arc::new(InMemoryRepository::<WorkoutTemplate>::new()),
            workouts: Arc::new(InMemoryRepository::<Workout>::new()),
            workout_schedules: Arc::new(InMemoryRepository::<WorkoutSchedule>::new()),
        }
    }

    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            exercises: Arc::new(PgRepository::<Exercise>::new(pool.clone(), "exercises")),
            workout_templates: Arc::new(PgRepository::<WorkoutTemplate>::new(
                pool.clone(),
                "workout_templates",
            )),
            workouts: Arc::new(PgRepository::<Workout>::new(pool.clone(), "workouts")),
            workout_schedules: Arc::new(PgRepository::<WorkoutSchedule>::new(pool, "workout_schedules")),
        }
    }
}
