use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::aggregate_store::AggregateStore;
use super::exercise_service::ExerciseService;
use super::workout_template_service::WorkoutTemplateService;
use crate::errors::AppResult;
use crate::models::Workout;
use crate::repositories::WorkoutRepository;

/// Coordinates live workouts.
///
/// Structural edits (exercises, sets) and state edits (weights, completion)
/// are delegated to the `Workout` model, which rejects any change once the
/// workout is finished.
#[derive(Clone)]
pub struct WorkoutService {
    store: AggregateStore<Workout>,
    templates: WorkoutTemplateService,
    exercises: ExerciseService,
}

impl WorkoutService {
    pub fn new(repository: WorkoutRepository, templates: WorkoutTemplateService, exercises: ExerciseService) -> Self {
        Self {
            store: AggregateStore::new(repository),
            templates,
            exercises,
        }
    }

    /// Materializes the template into a new workout. A missing template
    /// fails the call before anything is stored.
    #[instrument(skip(self))]
    pub async fn start_from_template(
        &self,
        start_time: DateTime<Utc>,
        owner_id: Uuid,
        template_id: Uuid,
    ) -> AppResult<Workout> {
        let template = self.templates.get(template_id, owner_id).await?;
        let workout = self
            .store
            .insert(Workout::from_template(&template, start_time, owner_id))
            .await?;

        info!(workout_id = %workout.id, %template_id, exercises = workout.exercises.len(), "started workout from template");
        Ok(workout)
    }

    #[instrument(skip(self))]
    pub async fn start_empty(&self, start_time: DateTime<Utc>, owner_id: Uuid) -> AppResult<Workout> {
        let workout = self.store.insert(Workout::start_empty(start_time, owner_id)).await?;
        info!(workout_id = %workout.id, "started empty workout");
        Ok(workout)
    }

    #[instrument(skip(self))]
    pub async fn add_exercise(&self, owner_id: Uuid, workout_id: Uuid, exercise_id: Uuid) -> AppResult<()> {
        let exercise = self.exercises.get(exercise_id, owner_id).await?;

        self.store
            .modify(workout_id, owner_id, |workout| {
                let added = workout.append_exercise(exercise.id)?;
                debug!(order = added.order, "appended workout exercise");
                Ok(())
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_exercise(&self, owner_id: Uuid, workout_id: Uuid, exercise_order: u32) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout.remove_exercise(exercise_order).map(|_| ())
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn add_set(&self, owner_id: Uuid, workout_id: Uuid, exercise_order: u32) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                let added = workout.exercise_mut(exercise_order)?.append_set();
                debug!(set_order = added.order, "appended set");
                Ok(())
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_set(
        &self,
        owner_id: Uuid,
        workout_id: Uuid,
        exercise_order: u32,
        set_order: u32,
    ) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout.exercise_mut(exercise_order)?.remove_set(set_order).map(|_| ())
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn record_weight_and_reps(
        &self,
        owner_id: Uuid,
        workout_id: Uuid,
        exercise_order: u32,
        set_order: u32,
        weight: f64,
        reps: u32,
    ) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout
                    .exercise_mut(exercise_order)?
                    .record_weight_and_reps(set_order, weight, reps)
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn mark_set_completed(
        &self,
        owner_id: Uuid,
        workout_id: Uuid,
        exercise_order: u32,
        set_order: u32,
    ) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout.exercise_mut(exercise_order)?.complete_set(set_order)
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn mark_set_uncompleted(
        &self,
        owner_id: Uuid,
        workout_id: Uuid,
        exercise_order: u32,
        set_order: u32,
    ) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout.exercise_mut(exercise_order)?.uncomplete_set(set_order)
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn mark_exercise_completed(&self, owner_id: Uuid, workout_id: Uuid, exercise_order: u32) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout.exercise_mut(exercise_order)?.mark_completed();
                Ok(())
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn mark_exercise_uncompleted(
        &self,
        owner_id: Uuid,
        workout_id: Uuid,
        exercise_order: u32,
    ) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| {
                workout.exercise_mut(exercise_order)?.mark_uncompleted();
                Ok(())
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn finish(&self, owner_id: Uuid, workout_id: Uuid, end_time: DateTime<Utc>) -> AppResult<()> {
        self.store
            .modify(workout_id, owner_id, |workout| workout.finish(end_time))
            .await?;
        info!(%workout_id, "finished workout");
        Ok(())
    }

    pub async fn get(&self, workout_id: Uuid, owner_id: Uuid) -> AppResult<Workout> {
        self.store.get(workout_id, owner_id).await
    }
}
