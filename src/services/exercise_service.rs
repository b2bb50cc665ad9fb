use tracing::{info, instrument};
use uuid::Uuid;

use super::aggregate_store::AggregateStore;
use crate::errors::AppResult;
use crate::models::Exercise;
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExerciseService {
    store: AggregateStore<Exercise>,
}

impl ExerciseService {
    pub fn new(repository: ExerciseRepository) -> Self {
        Self {
            store: AggregateStore::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: String, owner_id: Uuid, description: Option<String>) -> AppResult<Exercise> {
        let exercise = self.store.insert(Exercise::new(name, owner_id, description)).await?;
        info!(exercise_id = %exercise.id, "created exercise");
        Ok(exercise)
    }

    pub async fn get(&self, exercise_id: Uuid, owner_id: Uuid) -> AppResult<Exercise> {
        self.store.get(exercise_id, owner_id).await
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        exercise_id: Uuid,
        name: String,
        owner_id: Uuid,
        description: Option<String>,
    ) -> AppResult<Exercise> {
        self.store
            .modify(exercise_id, owner_id, |exercise| {
                exercise.replace_details(name, description);
                Ok(())
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, exercise_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        self.store.remove(exercise_id, owner_id).await?;
        info!(%exercise_id, "deleted exercise");
        Ok(())
    }
}
