//! Mutex-guarded in-memory record store.
//!
//! Non-durable, O(1) access. Every operation takes the lock exactly once and
//! holds it for the whole check-then-write, so concurrent create/update/delete
//! on the same identifier cannot lose updates.

use std::collections::HashMap;

use async_trait::async_trait;
use shelfkeep_domain::Record;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{EntityStore, StoreError};

enum State<R> {
    Uninitialized,
    Ready(HashMap<String, R>),
    Closed,
}

/// In-memory implementation of [`EntityStore`] for one record kind.
pub struct InMemoryStore<R> {
    state: Mutex<State<R>>,
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Uninitialized),
        }
    }

    /// Number of stored records (tests only).
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        match &*self.state.lock().await {
            State::Ready(records) => records.len(),
            _ => 0,
        }
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn ready<'a, R>(
    state: &'a mut State<R>,
    operation: &'static str,
) -> Result<&'a mut HashMap<String, R>, StoreError> {
    match state {
        State::Ready(records) => Ok(records),
        State::Uninitialized => Err(StoreError::unavailable(operation, "store not initialized")),
        State::Closed => Err(StoreError::unavailable(operation, "store is shut down")),
    }
}

#[async_trait]
impl<R: Record> EntityStore<R> for InMemoryStore<R> {
    async fn initialize(&self) -> Result<(), StoreError> {
        let mut guard = self.state.lock().await;
        if matches!(*guard, State::Closed) {
            return Err(StoreError::unavailable("initialize", "store is shut down"));
        }
        if matches!(*guard, State::Uninitialized) {
            *guard = State::Ready(HashMap::new());
            tracing::debug!(entity_type = R::KIND, "In-memory store initialized");
        }
        Ok(())
    }

    async fn save(&self, record: &R) -> Result<(), StoreError> {
        let mut guard = self.state.lock().await;
        let records = ready(&mut guard, "save")?;
        if records.contains_key(record.id()) {
            return Err(StoreError::duplicate(R::KIND, record.id()));
        }
        records.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<R, StoreError> {
        let mut guard = self.state.lock().await;
        let records = ready(&mut guard, "find_by_id")?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self.state.lock().await;
        let records = ready(&mut guard, "exists")?;
        Ok(records.contains_key(id))
    }

    async fn update(&self, record: &R) -> Result<(), StoreError> {
        let mut guard = self.state.lock().await;
        let records = ready(&mut guard, "update")?;
        let slot = records
            .get_mut(record.id())
            .ok_or_else(|| StoreError::not_found(R::KIND, record.id()))?;
        *slot = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.state.lock().await;
        let records = ready(&mut guard, "delete")?;
        match records.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(R::KIND, id)),
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.state.lock().await;
        let records = ready(&mut guard, "clear")?;
        records.clear();
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), StoreError> {
        *self.state.lock().await = State::Closed;
        tracing::debug!(entity_type = R::KIND, "In-memory store shut down");
        Ok(())
    }
}
