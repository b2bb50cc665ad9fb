use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use workout_tracker::errors::AppError;
use workout_tracker::models::BlockItemKind;

use crate::common::in_memory_services;

#[cfg(test)]
mod workout_schedule_service_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_new_schedule_is_inactive_and_empty() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();

        let schedule = services.workout_schedules.create("Spring block".to_string(), owner).await.unwrap();

        assert!(!schedule.is_active);
        assert!(schedule.block.is_empty());
        assert_eq!(services.workout_schedules.get(schedule.id, owner).await.unwrap(), schedule);
    }

    #[tokio::test]
    async fn test_remove_first_rest_renumbers_remaining() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let schedule = services.workout_schedules.create("Rest week".to_string(), owner).await.unwrap();

        let schedule = services.workout_schedules.add_rest_to_block(20, owner, schedule.id).await.unwrap();
        let schedule = services.workout_schedules.add_rest_to_block(25, owner, schedule.id).await.unwrap();
        let first = schedule.block[0].block_item_id;

        let schedule = services
            .workout_schedules
            .remove_block_item(owner, schedule.id, first)
            .await
            .unwrap();

        assert_eq!(schedule.block.len(), 1);
        assert_eq!(schedule.block[0].order, 0);
        assert_eq!(schedule.block[0].kind, BlockItemKind::Rest { period_seconds: 25 });
    }

    #[tokio::test]
    async fn test_template_items_reference_owned_templates() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let template = services.workout_templates.create("Push".to_string(), owner).await.unwrap();
        let foreign = services.workout_templates.create("Pull".to_string(), stranger).await.unwrap();
        let schedule = services.workout_schedules.create("Block".to_string(), owner).await.unwrap();

        let schedule = services
            .workout_schedules
            .add_template_to_block(template.id, owner, schedule.id)
            .await
            .unwrap();
        assert_eq!(schedule.block[0].kind, BlockItemKind::Template { template_id: template.id });

        assert_matches!(
            services.workout_schedules.add_template_to_block(foreign.id, owner, schedule.id).await,
            Err(AppError::NotFound("Workout template"))
        );
        assert_eq!(services.workout_schedules.get(schedule.id, owner).await.unwrap().block.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_schedule_and_missing_item_are_distinct() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let schedule = services.workout_schedules.create("Block".to_string(), owner).await.unwrap();

        assert_matches!(
            services.workout_schedules.remove_block_item(owner, Uuid::new_v4(), Uuid::new_v4()).await,
            Err(AppError::NotFound("Workout schedule"))
        );
        assert_matches!(
            services.workout_schedules.remove_block_item(owner, schedule.id, Uuid::new_v4()).await,
            Err(AppError::BlockItemNotFound)
        );
    }

    #[tokio::test]
    async fn test_activation_toggles() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let schedule = services.workout_schedules.create("Block".to_string(), owner).await.unwrap();

        let active = services.workout_schedules.set_active(schedule.id, owner).await.unwrap();
        assert!(active.is_active);
        let again = services.workout_schedules.set_active(schedule.id, owner).await.unwrap();
        assert!(again.is_active);
        let inactive = services.workout_schedules.set_inactive(schedule.id, owner).await.unwrap();
        assert!(!inactive.is_active);
    }

    #[tokio::test]
    async fn test_schedule_is_isolated_between_owners() {
        let services = in_memory_services();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let schedule = services.workout_schedules.create("Block".to_string(), owner).await.unwrap();

        assert_matches!(
            services.workout_schedules.set_active(schedule.id, stranger).await,
            Err(AppError::NotFound(_))
        );
        assert_matches!(
            services.workout_schedules.add_rest_to_block(30, stranger, schedule.id).await,
            Err(AppError::NotFound(_))
        );
        assert_matches!(services.workout_schedules.delete(schedule.id, stranger).await, Err(AppError::NotFound(_)));

        services.workout_schedules.delete(schedule.id, owner).await.unwrap();
        assert_matches!(services.workout_schedules.get(schedule.id, owner).await, Err(AppError::NotFound(_)));
    }
}
