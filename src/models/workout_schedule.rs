use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ordering::{self, Ordered};
use super::Aggregate;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockItemKind {
    Template { template_id: Uuid },
    Rest { period_seconds: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutScheduleBlockItem {
    pub block_item_id: Uuid,
    pub order: u32,
    #[serde(flatten)]
    pub kind: BlockItemKind,
}

impl Ordered for WorkoutScheduleBlockItem {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// A recurring plan of templates and rest periods.
///
/// `is_active` is independent of the block: an empty schedule can be active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSchedule {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub block: Vec<WorkoutScheduleBlockItem>,
}

impl WorkoutSchedule {
    pub fn new(name: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            is_active: false,
            block: Vec::new(),
        }
    }

    pub fn append_item(&mut self, kind: BlockItemKind) -> &WorkoutScheduleBlockItem {
        let order = ordering::next_order(&self.block);
        self.block.push(WorkoutScheduleBlockItem {
            block_item_id: Uuid::new_v4(),
            order,
            kind,
        });
        &self.block[self.block.len() - 1]
    }

    /// Block items are addressed by id, so survivors are resequenced rather
    /// than shifted.
    pub fn remove_item(&mut self, block_item_id: Uuid) -> AppResult<WorkoutScheduleBlockItem> {
        let index = self
            .block
            .iter()
            .position(|item| item.block_item_id == block_item_id)
            .ok_or(AppError::BlockItemNotFound)?;

        let removed = self.block.remove(index);
        ordering::resequence(&mut self.block);
        Ok(removed)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Aggregate for WorkoutSchedule {
    const NAME: &'static str = "Workout schedule";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkoutScheduleRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTemplateToBlockRequest {
    pub template_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddRestToBlockRequest {
    pub period_seconds: u32,
}
