use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ordering::{self, Ordered};
use super::workout_template::{WorkoutTemplate, WorkoutTemplateExercise};
use super::Aggregate;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExerciseSet {
    pub order: u32,
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub is_completed: bool,
}

impl WorkoutExerciseSet {
    pub fn blank(order: u32) -> Self {
        Self {
            order,
            weight: None,
            reps: None,
            is_completed: false,
        }
    }
}

impl Ordered for WorkoutExerciseSet {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise_id: Uuid,
    pub order: u32,
    pub rest_period_seconds: Option<u32>,
    pub sets: Vec<WorkoutExerciseSet>,
    pub is_completed: bool,
}

impl Ordered for WorkoutExercise {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl WorkoutExercise {
    /// Copies a template entry: `set_count` blank sets, same order and rest.
    pub fn from_template_entry(entry: &WorkoutTemplateExercise) -> Self {
        Self {
            exercise_id: entry.exercise_id,
            order: entry.order,
            rest_period_seconds: Some(entry.rest_period_seconds),
            sets: (0..entry.set_count).map(WorkoutExerciseSet::blank).collect(),
            is_completed: false,
        }
    }

    /// An exercise added by hand starts with no sets and no rest.
    pub fn unplanned(exercise_id: Uuid, order: u32) -> Self {
        Self {
            exercise_id,
            order,
            rest_period_seconds: Some(0),
            sets: Vec::new(),
            is_completed: false,
        }
    }

    fn set_mut(&mut self, set_order: u32) -> AppResult<&mut WorkoutExerciseSet> {
        ordering::find_by_order_mut(&mut self.sets, set_order)
            .ok_or(AppError::NotFound("Workout exercise set"))
    }

    /// A new set is blank, so it invalidates any previous completion.
    pub fn append_set(&mut self) -> &WorkoutExerciseSet {
        let order = ordering::next_order(&self.sets);
        self.sets.push(WorkoutExerciseSet::blank(order));
        self.invalidate_completion();
        &self.sets[self.sets.len() - 1]
    }

    /// Removing a set recomputes completion from the sets that remain.
    pub fn remove_set(&mut self, set_order: u32) -> AppResult<WorkoutExerciseSet> {
        let removed = ordering::remove_and_shift(&mut self.sets, set_order)
            .ok_or(AppError::NotFound("Workout exercise set"))?;
        self.rederive_completion_after_removal();
        Ok(removed)
    }

    /// Overwrites both fields; earlier values are not kept.
    pub fn record_weight_and_reps(&mut self, set_order: u32, weight: f64, reps: u32) -> AppResult<()> {
        let set = self.set_mut(set_order)?;
        set.weight = Some(weight);
        set.reps = Some(reps);
        Ok(())
    }

    pub fn complete_set(&mut self, set_order: u32) -> AppResult<()> {
        self.set_mut(set_order)?.is_completed = true;
        self.derive_completion_from_sets();
        Ok(())
    }

    pub fn uncomplete_set(&mut self, set_order: u32) -> AppResult<()> {
        self.set_mut(set_order)?.is_completed = false;
        self.invalidate_completion();
        Ok(())
    }

    // Completing a set derives the exercise flag from all its sets.
    fn derive_completion_from_sets(&mut self) {
        self.is_completed = self.sets.iter().all(|set| set.is_completed);
    }

    // Any incomplete set makes the whole exercise incomplete, whatever the
    // state of its siblings.
    fn invalidate_completion(&mut self) {
        self.is_completed = false;
    }

    // An emptied exercise was not explicitly marked, so it reads as open.
    fn rederive_completion_after_removal(&mut self) {
        if self.sets.is_empty() {
            self.invalidate_completion();
        } else {
            self.derive_completion_from_sets();
        }
    }

    /// Manual override; sets are left as they are.
    pub fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    pub fn mark_uncompleted(&mut self) {
        self.is_completed = false;
    }
}

/// A live training session.
///
/// Once `end_time` is set the workout is finished and rejects every further
/// mutation with [`AppError::WorkoutFinished`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn start_empty(start_time: DateTime<Utc>, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            start_time,
            end_time: None,
            exercises: Vec::new(),
        }
    }

    /// Materializes a template into an independent workout. The template is
    /// only read; nothing in the result borrows from it.
    pub fn from_template(template: &WorkoutTemplate, start_time: DateTime<Utc>, owner_id: Uuid) -> Self {
        Self {
            exercises: template
                .exercises
                .iter()
                .map(WorkoutExercise::from_template_entry)
                .collect(),
            ..Self::start_empty(start_time, owner_id)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn ensure_in_progress(&self) -> AppResult<()> {
        if self.is_finished() {
            return Err(AppError::WorkoutFinished);
        }
        Ok(())
    }

    pub fn exercise_mut(&mut self, order: u32) -> AppResult<&mut WorkoutExercise> {
        self.ensure_in_progress()?;
        ordering::find_by_order_mut(&mut self.exercises, order)
            .ok_or(AppError::NotFound("Workout exercise"))
    }

    pub fn append_exercise(&mut self, exercise_id: Uuid) -> AppResult<&WorkoutExercise> {
        self.ensure_in_progress()?;
        let order = ordering::next_order(&self.exercises);
        self.exercises.push(WorkoutExercise::unplanned(exercise_id, order));
        Ok(&self.exercises[self.exercises.len() - 1])
    }

    pub fn remove_exercise(&mut self, order: u32) -> AppResult<WorkoutExercise> {
        self.ensure_in_progress()?;
        ordering::remove_and_shift(&mut self.exercises, order)
            .ok_or(AppError::NotFound("Workout exercise"))
    }

    pub fn finish(&mut self, end_time: DateTime<Utc>) -> AppResult<()> {
        self.ensure_in_progress()?;
        if end_time <= self.start_time {
            return Err(AppError::validation("end time must be after start time"));
        }
        self.end_time = Some(end_time);
        Ok(())
    }
}

impl Aggregate for Workout {
    const NAME: &'static str = "Workout";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

#[derive(Debug, Deserialize)]
pub struct StartWorkoutFromTemplateRequest {
    pub template_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddWorkoutExerciseRequest {
    pub exercise_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct WeightAndRepsRequest {
    pub weight: f64,
    pub reps: u32,
}
