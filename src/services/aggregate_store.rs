use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use super::aggregate_locks::AggregateLocks;
use crate::errors::{AppError, AppResult};
use crate::models::Aggregate;
use crate::repositories::AggregateRepository;

/// Load / mutate / save plumbing shared by the aggregate services.
///
/// `modify` runs the whole cycle under the aggregate's lock. The mutation
/// works on a loaded copy, so a failing mutation persists nothing.
pub struct AggregateStore<A: Aggregate> {
    repository: Arc<dyn AggregateRepository<A>>,
    locks: AggregateLocks,
}

impl<A: Aggregate> Clone for AggregateStore<A> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            locks: self.locks.clone(),
        }
    }
}

impl<A: Aggregate> AggregateStore<A> {
    pub fn new(repository: Arc<dyn AggregateRepository<A>>) -> Self {
        Self {
            repository,
            locks: AggregateLocks::new(),
        }
    }

    pub async fn get(&self, id: Uuid, owner_id: Uuid) -> AppResult<A> {
        match self.repository.get(id, owner_id).await? {
            Some(aggregate) => Ok(aggregate),
            None => {
                warn!(aggregate = A::NAME, %id, %owner_id, "aggregate not found for owner");
                Err(AppError::NotFound(A::NAME))
            }
        }
    }

    pub async fn list(&self, owner_id: Uuid) -> AppResult<Vec<A>> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    pub async fn insert(&self, aggregate: A) -> AppResult<A> {
        self.repository.save(&aggregate).await?;
        Ok(aggregate)
    }

    pub async fn modify<F>(&self, id: Uuid, owner_id: Uuid, mutate: F) -> AppResult<A>
    where
        F: FnOnce(&mut A) -> AppResult<()> + Send,
    {
        let _guard = self.locks.acquire(id).await;

        let mut aggregate = self.get(id, owner_id).await?;
        mutate(&mut aggregate)?;
        self.repository.save(&aggregate).await?;

        Ok(aggregate)
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        let _guard = self.locks.acquire(id).await;

        self.get(id, owner_id).await?;
        self.repository.delete(id, owner_id).await?;
        Ok(())
    }
}
