use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AggregateRepository, RepositoryError};
use crate::models::Aggregate;

/// Keyed in-memory store. Reads and writes clone, so no caller ever holds a
/// reference into stored state.
#[derive(Debug)]
pub struct InMemoryRepository<A> {
    items: RwLock<HashMap<Uuid, A>>,
}

impl<A> InMemoryRepository<A> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl<A> Default for InMemoryRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<A: Aggregate> AggregateRepository<A> for InMemoryRepository<A> {
    async fn get(&self, id: Uuid, owner_id: Uuid) -> Result<Option<A>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items
            .get(&id)
            .filter(|item| item.owner_id() == owner_id)
            .cloned())
    }

    async fn save(&self, aggregate: &A) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        items.insert(aggregate.id(), aggregate.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        if items.get(&id).is_some_and(|item| item.owner_id() == owner_id) {
            items.remove(&id);
        }
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<A>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.owner_id() == owner_id)
            .cloned()
            .collect())
    }
}
