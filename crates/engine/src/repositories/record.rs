//! Record store wrapper used by the use cases.

use std::sync::Arc;

use shelfkeep_domain::Record;

use crate::infrastructure::ports::{EntityStore, StoreError};

/// Domain service over one record kind's store.
pub struct RecordRepository<R: Record> {
    store: Arc<dyn EntityStore<R>>,
}

impl<R: Record> RecordRepository<R> {
    pub fn new(store: Arc<dyn EntityStore<R>>) -> Self {
        Self { store }
    }

    pub async fn save(&self, record: &R) -> Result<(), StoreError> {
        self.store.save(record).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<R, StoreError> {
        self.store.find_by_id(id).await
    }

    pub async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        self.store.exists(id).await
    }

    /// `Ok(None)` when the store has no such record; other store failures
    /// stay errors.
    pub async fn lookup(&self, id: &str) -> Result<Option<R>, StoreError> {
        match self.store.find_by_id(id).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn update(&self, record: &R) -> Result<(), StoreError> {
        self.store.update(record).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use shelfkeep_domain::Entity;

    use super::*;
    use crate::infrastructure::ports::MockEntityStore;

    #[tokio::test]
    async fn lookup_turns_not_found_into_none() {
        let mut store = MockEntityStore::<Entity>::new();
        store
            .expect_find_by_id()
            .withf(|id| id == "missing")
            .returning(|id| Err(StoreError::not_found("Entity", id)));

        let repo = RecordRepository::new(Arc::new(store));
        assert_eq!(repo.lookup("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn lookup_keeps_store_failures() {
        let mut store = MockEntityStore::<Entity>::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(StoreError::unavailable("find_by_id", "disk gone")));

        let repo = RecordRepository::new(Arc::new(store));
        let err = repo.lookup("1").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn lookup_returns_found_record() {
        let mut store = MockEntityStore::<Entity>::new();
        store
            .expect_find_by_id()
            .returning(|id| Ok(Entity::new(id, "Found")));

        let repo = RecordRepository::new(Arc::new(store));
        let found = repo.lookup("7").await.unwrap();
        assert_eq!(found, Some(Entity::new("7", "Found")));
    }
}
