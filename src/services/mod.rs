// Aggregate coordinators: load, check ownership, mutate, persist

pub mod aggregate_locks;
pub mod aggregate_store;
pub mod exercise_service;
pub mod workout_schedule_service;
pub mod workout_service;
pub mod workout_template_service;

pub use aggregate_locks::AggregateLocks;
pub use aggregate_store::AggregateStore;
pub use exercise_service::ExerciseService;
pub use workout_schedule_service::WorkoutScheduleService;
pub use workout_service::WorkoutService;
pub use workout_template_service::WorkoutTemplateService;

use crate::repositories::Repositories;

/// Every service, wired against one set of repositories.
#[derive(Clone)]
pub struct Services {
    pub exercises: ExerciseService,
    pub workout_templates: WorkoutTemplateService,
    pub workouts: WorkoutService,
    pub workout_schedules: WorkoutScheduleService,
}

impl Services {
    pub fn new(repositories: Repositories) -> Self {
        let exercises = ExerciseService::new(repositories.exercises);
        let workout_templates = WorkoutTemplateService::new(repositories.workout_templates, exercises.clone());
        let workouts = WorkoutService::new(repositories.workouts, workout_templates.clone(), exercises.clone());
        let workout_schedules = WorkoutScheduleService::new(repositories.workout_schedules, workout_templates.clone());

        Self {
            exercises,
            workout_templates,
            workouts,
            workout_schedules,
        }
    }
}
