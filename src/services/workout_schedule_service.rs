use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::aggregate_store::AggregateStore;
use super::workout_template_service::WorkoutTemplateService;
use crate::errors::AppResult;
use crate::models::{BlockItemKind, WorkoutSchedule};
use crate::repositories::WorkoutScheduleRepository;

#[derive(Clone)]
pub struct WorkoutScheduleService {
    store: AggregateStore<WorkoutSchedule>,
    templates: WorkoutTemplateService,
}

impl WorkoutScheduleService {
    pub fn new(repository: WorkoutScheduleRepository, templates: WorkoutTemplateService) -> Self {
        Self {
            store: AggregateStore::new(repository),
            templates,
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: String, owner_id: Uuid) -> AppResult<WorkoutSchedule> {
        let schedule = self.store.insert(WorkoutSchedule::new(name, owner_id)).await?;
        info!(schedule_id = %schedule.id, "created workout schedule");
        Ok(schedule)
    }

    pub async fn get(&self, schedule_id: Uuid, owner_id: Uuid) -> AppResult<WorkoutSchedule> {
        self.store.get(schedule_id, owner_id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, schedule_id: Uuid, owner_id: Uuid) -> AppResult<()> {
        self.store.remove(schedule_id, owner_id).await?;
        info!(%schedule_id, "deleted workout schedule");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn add_template_to_block(
        &self,
        template_id: Uuid,
        owner_id: Uuid,
        schedule_id: Uuid,
    ) -> AppResult<WorkoutSchedule> {
        self.templates.get(template_id, owner_id).await?;
        self.append(schedule_id, owner_id, BlockItemKind::Template { template_id }).await
    }

    #[instrument(skip(self))]
    pub async fn add_rest_to_block(
        &self,
        period_seconds: u32,
        owner_id: Uuid,
        schedule_id: Uuid,
    ) -> AppResult<WorkoutSchedule> {
        self.append(schedule_id, owner_id, BlockItemKind::Rest { period_seconds }).await
    }

    async fn append(&self, schedule_id: Uuid, owner_id: Uuid, kind: BlockItemKind) -> AppResult<WorkoutSchedule> {
        self.store
            .modify(schedule_id, owner_id, |schedule| {
                let item = schedule.append_item(kind);
                debug!(block_item_id = %item.block_item_id, order = item.order, "appended block item");
                Ok(())
            })
            .await
    }

    /// Fails with `NotFound` for a missing schedule and `BlockItemNotFound`
    /// for a missing item inside an existing one.
    #[instrument(skip(self))]
    pub async fn remove_block_item(
        &self,
        owner_id: Uuid,
        schedule_id: Uuid,
        block_item_id: Uuid,
    ) -> AppResult<WorkoutSchedule> {
        self.store
            .modify(schedule_id, owner_id, |schedule| {
                schedule.remove_item(block_item_id).map(|_| ())
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_active(&self, schedule_id: Uuid, owner_id: Uuid) -> AppResult<WorkoutSchedule> {
        self.store
            .modify(schedule_id, owner_id, |schedule| {
                schedule.activate();
                Ok(())
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_inactive(&self, schedule_id: Uuid, owner_id: Uuid) -> AppResult<WorkoutSchedule> {
        self.store
            .modify(schedule_id, owner_id, |schedule| {
                schedule.deactivate();
                Ok(())
            })
            .await
    }
}
