use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use workout_tracker::errors::AppError;
use workout_tracker::models::{WorkoutExerciseSet, WorkoutTemplate};
use workout_tracker::services::Services;

use crate::common::in_memory_services;

#[cfg(test)]
mod workout_service_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn template_with_entries(services: &Services, owner: Uuid, entries: &[(u32, u32)]) -> WorkoutTemplate {
        let template = services.workout_templates.create("Session".to_string(), owner).await.unwrap();
        for (index, (set_count, rest)) in entries.iter().enumerate() {
            let exercise = services
                .exercises
                .create(format!("Exercise {}", index), owner, None)
                .await
                .unwrap();
            services
                .workout_templates
                .add_exercise(exercise.id, template.id, owner, *set_count, *rest)
                .await
                .unwrap();
        }
        services.workout_templates.get(template.id, owner).await.unwrap()
    }

    #[tokio::test]
    async fn test_start_from_template_materializes_blank_sets() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(3, 60)]).await;
        let start = Utc::now();

        let workout = services
            .workouts
            .start_from_template(start, owner, template.id)
            .await
            .unwrap();

        assert_eq!(workout.start_time, start);
        assert_eq!(workout.end_time, None);
        assert_eq!(workout.exercises.len(), 1);

        let exercise = &workout.exercises[0];
        assert_eq!(exercise.exercise_id, template.exercises[0].exercise_id);
        assert_eq!(exercise.order, 0);
        assert_eq!(exercise.rest_period_seconds, Some(60));
        assert!(!exercise.is_completed);
        assert_eq!(
            exercise.sets,
            vec![
                WorkoutExerciseSet::blank(0),
                WorkoutExerciseSet::blank(1),
                WorkoutExerciseSet::blank(2),
            ]
        );
    }

    #[tokio::test]
    async fn test_workout_is_independent_of_later_template_edits() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(3, 60), (2, 90)]).await;

        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services.workout_templates.set_set_count(8, template.id, owner, 0).await.unwrap();
        services.workout_templates.set_rest_period(5, template.id, owner, 1).await.unwrap();
        services.workout_templates.remove_exercise(template.id, owner, 0).await.unwrap();

        let reloaded = services.workouts.get(workout.id, owner).await.unwrap();
        assert_eq!(reloaded, workout);
        assert_eq!(reloaded.exercises[0].sets.len(), 3);
        assert_eq!(reloaded.exercises[1].rest_period_seconds, Some(90));
    }

    #[tokio::test]
    async fn test_start_from_missing_or_foreign_template_fails() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let foreign = template_with_entries(&services, stranger, &[(3, 60)]).await;

        assert_matches!(
            services.workouts.start_from_template(Utc::now(), owner, Uuid::new_v4()).await,
            Err(AppError::NotFound("Workout template"))
        );
        assert_matches!(
            services.workouts.start_from_template(Utc::now(), owner, foreign.id).await,
            Err(AppError::NotFound("Workout template"))
        );
    }

    #[tokio::test]
    async fn test_add_exercise_to_empty_workout() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let exercise = services.exercises.create("Dips".to_string(), owner, None).await.unwrap();
        let workout = services.workouts.start_empty(Utc::now(), owner).await.unwrap();

        services.workouts.add_exercise(owner, workout.id, exercise.id).await.unwrap();

        let workout = services.workouts.get(workout.id, owner).await.unwrap();
        assert_eq!(workout.exercises.len(), 1);
        assert_eq!(workout.exercises[0].order, 0);
        assert_eq!(workout.exercises[0].rest_period_seconds, Some(0));
        assert!(workout.exercises[0].sets.is_empty());
    }

    #[tokio::test]
    async fn test_add_exercise_rejects_foreign_exercise() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let foreign = services.exercises.create("Dips".to_string(), stranger, None).await.unwrap();
        let workout = services.workouts.start_empty(Utc::now(), owner).await.unwrap();

        assert_matches!(
            services.workouts.add_exercise(owner, workout.id, foreign.id).await,
            Err(AppError::NotFound("Exercise"))
        );
    }

    #[tokio::test]
    async fn test_remove_exercise_and_set_reindex() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(3, 60), (3, 60), (3, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services.workouts.remove_exercise(owner, workout.id, 0).await.unwrap();
        services.workouts.remove_set(owner, workout.id, 1, 0).await.unwrap();

        let workout = services.workouts.get(workout.id, owner).await.unwrap();
        let exercise_orders: Vec<(Uuid, u32)> = workout.exercises.iter().map(|e| (e.exercise_id, e.order)).collect();
        assert_eq!(
            exercise_orders,
            vec![
                (template.exercises[1].exercise_id, 0),
                (template.exercises[2].exercise_id, 1),
            ]
        );
        let set_orders: Vec<u32> = workout.exercises[1].sets.iter().map(|s| s.order).collect();
        assert_eq!(set_orders, vec![0, 1]);

        assert_matches!(
            services.workouts.remove_set(owner, workout.id, 0, 9).await,
            Err(AppError::NotFound("Workout exercise set"))
        );
        assert_matches!(
            services.workouts.remove_exercise(owner, workout.id, 5).await,
            Err(AppError::NotFound("Workout exercise"))
        );
    }

    #[tokio::test]
    async fn test_record_weight_and_reps_overwrites() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(2, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services
            .workouts
            .record_weight_and_reps(owner, workout.id, 0, 1, 60.0, 8)
            .await
            .unwrap();
        services
            .workouts
            .record_weight_and_reps(owner, workout.id, 0, 1, 62.5, 6)
            .await
            .unwrap();

        let workout = services.workouts.get(workout.id, owner).await.unwrap();
        let set = &workout.exercises[0].sets[1];
        assert_eq!(set.weight, Some(62.5));
        assert_eq!(set.reps, Some(6));
        assert_eq!(workout.exercises[0].sets[0].weight, None);
    }

    #[tokio::test]
    async fn test_completion_cascade() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(2, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services.workouts.mark_set_completed(owner, workout.id, 0, 0).await.unwrap();
        let partial = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(!partial.exercises[0].is_completed);

        services.workouts.mark_set_completed(owner, workout.id, 0, 1).await.unwrap();
        let complete = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(complete.exercises[0].is_completed);

        services.workouts.mark_set_uncompleted(owner, workout.id, 0, 0).await.unwrap();
        let reopened = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(!reopened.exercises[0].is_completed);
        assert!(!reopened.exercises[0].sets[0].is_completed);
        assert!(reopened.exercises[0].sets[1].is_completed);
    }

    #[tokio::test]
    async fn test_exercise_completion_override_leaves_sets() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(3, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services.workouts.mark_exercise_completed(owner, workout.id, 0).await.unwrap();
        let completed = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(completed.exercises[0].is_completed);
        assert!(completed.exercises[0].sets.iter().all(|s| !s.is_completed));

        services.workouts.mark_exercise_uncompleted(owner, workout.id, 0).await.unwrap();
        let reopened = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(!reopened.exercises[0].is_completed);
    }

    #[tokio::test]
    async fn test_adding_a_set_reopens_completed_exercise() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(1, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services.workouts.mark_set_completed(owner, workout.id, 0, 0).await.unwrap();
        services.workouts.add_set(owner, workout.id, 0).await.unwrap();

        let workout = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(!workout.exercises[0].is_completed);
        assert_eq!(workout.exercises[0].sets[1], WorkoutExerciseSet::blank(1));
    }

    #[tokio::test]
    async fn test_removing_sets_rederives_completion() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(2, 60), (1, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        services.workouts.mark_set_completed(owner, workout.id, 0, 0).await.unwrap();
        services.workouts.remove_set(owner, workout.id, 0, 1).await.unwrap();

        services.workouts.mark_set_completed(owner, workout.id, 1, 0).await.unwrap();
        services.workouts.remove_set(owner, workout.id, 1, 0).await.unwrap();

        let workout = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(workout.exercises[0].is_completed);
        assert!(workout.exercises[1].sets.is_empty());
        assert!(!workout.exercises[1].is_completed);
    }

    #[tokio::test]
    async fn test_finished_workout_rejects_mutations() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(2, 60)]).await;
        let exercise = services.exercises.create("Extra".to_string(), owner, None).await.unwrap();
        let start = Utc::now();
        let workout = services
            .workouts
            .start_from_template(start, owner, template.id)
            .await
            .unwrap();

        services
            .workouts
            .finish(owner, workout.id, start + Duration::minutes(45))
            .await
            .unwrap();

        let workouts = &services.workouts;
        assert_matches!(workouts.add_set(owner, workout.id, 0).await, Err(AppError::WorkoutFinished));
        assert_matches!(workouts.remove_set(owner, workout.id, 0, 0).await, Err(AppError::WorkoutFinished));
        assert_matches!(
            workouts.record_weight_and_reps(owner, workout.id, 0, 0, 50.0, 5).await,
            Err(AppError::WorkoutFinished)
        );
        assert_matches!(workouts.mark_set_completed(owner, workout.id, 0, 0).await, Err(AppError::WorkoutFinished));
        assert_matches!(workouts.mark_exercise_completed(owner, workout.id, 0).await, Err(AppError::WorkoutFinished));
        assert_matches!(workouts.add_exercise(owner, workout.id, exercise.id).await, Err(AppError::WorkoutFinished));
        assert_matches!(workouts.remove_exercise(owner, workout.id, 0).await, Err(AppError::WorkoutFinished));
        assert_matches!(
            workouts.finish(owner, workout.id, start + Duration::hours(2)).await,
            Err(AppError::WorkoutFinished)
        );

        let reloaded = workouts.get(workout.id, owner).await.unwrap();
        assert_eq!(reloaded.end_time, Some(start + Duration::minutes(45)));
        assert_eq!(reloaded.exercises, workout.exercises);
    }

    #[tokio::test]
    async fn test_finish_before_start_is_rejected() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let start = Utc::now();
        let workout = services.workouts.start_empty(start, owner).await.unwrap();

        assert_matches!(
            services.workouts.finish(owner, workout.id, start - Duration::minutes(1)).await,
            Err(AppError::Validation(_))
        );
        let reloaded = services.workouts.get(workout.id, owner).await.unwrap();
        assert!(!reloaded.is_finished());
    }

    #[tokio::test]
    async fn test_workouts_are_isolated_between_owners() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let template = template_with_entries(&services, owner, &[(3, 60)]).await;
        let workout = services
            .workouts
            .start_from_template(Utc::now(), owner, template.id)
            .await
            .unwrap();

        assert_matches!(services.workouts.get(workout.id, stranger).await, Err(AppError::NotFound("Workout")));
        assert_matches!(
            services.workouts.mark_set_completed(stranger, workout.id, 0, 0).await,
            Err(AppError::NotFound("Workout"))
        );
        assert_matches!(
            services.workouts.finish(stranger, workout.id, Utc::now()).await,
            Err(AppError::NotFound("Workout"))
        );

        let untouched = services.workouts.get(workout.id, owner).await.unwrap();
        assert_eq!(untouched, workout);
    }
}
