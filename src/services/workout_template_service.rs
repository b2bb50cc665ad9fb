use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::aggregate_store::AggregateStore;
use super::exercise_service::ExerciseService;
use crate::errors::AppResult;
use crate::models::WorkoutTemplate;
use crate::repositories::WorkoutTemplateRepository;

#[derive(Clone)]
pub struct WorkoutTemplateService {
    store: AggregateStore<WorkoutTemplate>,
    exercises: ExerciseService,
}

impl WorkoutTemplateService {
    pub fn new(repository: WorkoutTemplateRepository, exercises: ExerciseService) -> Self {
        Self {
            store: AggregateStore::new(repository),
            exercises,
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: String, owner_id: Uuid) -> AppResult<WorkoutTemplate> {
        let template = self.store.insert(WorkoutTemplate::new(name, owner_id)).await?;
        info!(template_id = %template.id, "created workout template");
        Ok(template)
    }

    /// Appends an entry at the end of the template. The referenced exercise
    /// must belong to the same owner.
    #[instrument(skip(self))]
    pub async fn add_exercise(
        &self,
        exercise_id: Uuid,
        template_id: Uuid,
        owner_id: Uuid,
        set_count: u32,
        rest_period_seconds: u32,
    ) -> AppResult<WorkoutTemplate> {
        self.exercises.get(exercise_id, owner_id).await?;

        self.store
            .modify(template_id, owner_id, |template| {
                let entry = template.append_exercise(exercise_id, set_count, rest_period_seconds);
                debug!(order = entry.order, "appended template exercise");
                Ok(())
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_exercise(&self, template_id: Uuid, owner_id: Uuid, order: u32) -> AppResult<()> {
        self.store
            .modify(template_id, owner_id, |template| template.remove_exercise(order).map(|_| ()))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn replace_exercise(
        &self,
        template_id: Uuid,
        owner_id: Uuid,
        order: u32,
        exercise_id: Uuid,
        set_count: u32,
        rest_period_seconds: u32,
    ) -> AppResult<()> {
        self.exercises.get(exercise_id, owner_id).await?;

        self.store
            .modify(template_id, owner_id, |template| {
                template.replace_exercise(order, exercise_id, set_count, rest_period_seconds)
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_set_count(&self, set_count: u32, template_id: Uuid, owner_id: Uuid, order: u32) -> AppResult<()> {
        self.store
            .modify(template_id, owner_id, |template| template.set_set_count(order, set_count))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_rest_period(
        &self,
        rest_period_seconds: u32,
        template_id: Uuid,
        owner_id: Uuid,
        order: u32,
    ) -> AppResult<()> {
        self.store
            .modify(template_id, owner_id, |template| {
                template.set_rest_period(order, rest_period_seconds)
            })
            .await?;
        Ok(())
    }

    pub async fn get(&self, template_id: Uuid, owner_id: Uuid) -> AppResult<WorkoutTemplate> {
        self.store.get(template_id, owner_id).await
    }

    pub async fn get_all(&self, owner_id: Uuid) -> AppResult<Vec<WorkoutTemplate>> {
        self.store.list(owner_id).await
    }

    /// Deletes the template together with its entries.
    #[instrument(skip(self))]
    pub async fn delete(&self, template_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        self.store.remove(template_id, owner_id).await?;
        info!(%template_id, "deleted workout template");
        Ok(())
    }
}
