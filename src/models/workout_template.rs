use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ordering::{self, Ordered};
use super::Aggregate;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplateExercise {
    pub exercise_id: Uuid,
    pub order: u32,
    pub set_count: u32,
    pub rest_period_seconds: u32,
}

impl Ordered for WorkoutTemplateExercise {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// A reusable exercise plan. Entries are kept in ascending `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub exercises: Vec<WorkoutTemplateExercise>,
}

impl WorkoutTemplate {
    pub fn new(name: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            exercises: Vec::new(),
        }
    }

    pub fn append_exercise(
        &mut self,
        exercise_id: Uuid,
        set_count: u32,
        rest_period_seconds: u32,
    ) -> &WorkoutTemplateExercise {
        let order = ordering::next_order(&self.exercises);
        self.exercises.push(WorkoutTemplateExercise {
            exercise_id,
            order,
            set_count,
            rest_period_seconds,
        });
        &self.exercises[self.exercises.len() - 1]
    }

    pub fn remove_exercise(&mut self, order: u32) -> AppResult<WorkoutTemplateExercise> {
        ordering::remove_and_shift(&mut self.exercises, order)
            .ok_or(AppError::NotFound("Workout template exercise"))
    }

    pub fn exercise_mut(&mut self, order: u32) -> AppResult<&mut WorkoutTemplateExercise> {
        ordering::find_by_order_mut(&mut self.exercises, order)
            .ok_or(AppError::NotFound("Workout template exercise"))
    }

    pub fn set_set_count(&mut self, order: u32, set_count: u32) -> AppResult<()> {
        self.exercise_mut(order)?.set_count = set_count;
        Ok(())
    }

    pub fn set_rest_period(&mut self, order: u32, rest_period_seconds: u32) -> AppResult<()> {
        self.exercise_mut(order)?.rest_period_seconds = rest_period_seconds;
        Ok(())
    }

    /// Overwrites the entry at `order` in place; its position is kept.
    pub fn replace_exercise(
        &mut self,
        order: u32,
        exercise_id: Uuid,
        set_count: u32,
        rest_period_seconds: u32,
    ) -> AppResult<()> {
        let entry = self.exercise_mut(order)?;
        entry.exercise_id = exercise_id;
        entry.set_count = set_count;
        entry.rest_period_seconds = rest_period_seconds;
        Ok(())
    }
}

impl Aggregate for WorkoutTemplate {
    const NAME: &'static str = "Workout template";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutTemplateRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateExerciseRequest {
    pub exercise_id: Uuid,
    pub set_count: u32,
    pub rest_period_seconds: u32,
}

#[derive(Debug, Deserialize)]
pub struct SetCountRequest {
    pub set_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct RestPeriodRequest {
    pub rest_period_seconds: u32,
}
