use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type LockMap = Arc<Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>>;

/// Per-aggregate-id mutual exclusion for read-modify-write cycles.
///
/// Holding the guard serializes every writer of one aggregate; writers of
/// different aggregates never contend. An entry lives only while some caller
/// holds or waits on its mutex.
#[derive(Debug, Clone, Default)]
pub struct AggregateLocks {
    locks: LockMap,
}

/// Exclusive access to one aggregate id. Dropping it releases the mutex and
/// prunes the registry entry once nobody else references it.
#[derive(Debug)]
pub struct AggregateGuard {
    id: Uuid,
    locks: LockMap,
    guard: Option<OwnedMutexGuard<()>>,
}

impl AggregateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, id: Uuid) -> AggregateGuard {
        // Cloned under the map lock, so pruning never races a new waiter.
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            locks.entry(id).or_default().clone()
        };

        AggregateGuard {
            id,
            locks: self.locks.clone(),
            guard: Some(lock.lock_owned().await),
        }
    }

    pub fn tracked(&self) -> usize {
        self.locks.lock().map(|locks| locks.len()).unwrap_or(0)
    }
}

impl Drop for AggregateGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if locks
            .get(&self.id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(&self.id);
        }
    }
}
