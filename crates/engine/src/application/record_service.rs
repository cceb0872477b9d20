//! Application service for record kinds exposed as-is (entities, books).

use std::sync::Arc;

use shelfkeep_domain::Record;

use crate::use_cases::RecordUseCase;

use super::error::ServiceError;
use super::permission::{Action, PermissionPolicy};
use super::update_mode::UpdateMode;

/// Takes and returns domain values; adds the permission gate and one log
/// event per call.
pub struct RecordService<R: Record> {
    use_case: RecordUseCase<R>,
    permissions: Arc<dyn PermissionPolicy>,
    update_mode: UpdateMode,
}

impl<R: Record> RecordService<R> {
    pub fn new(
        use_case: RecordUseCase<R>,
        permissions: Arc<dyn PermissionPolicy>,
        update_mode: UpdateMode,
    ) -> Self {
        Self {
            use_case,
            permissions,
            update_mode,
        }
    }

    pub async fn execute_find(&self, id: &str) -> Result<R, ServiceError> {
        let result = self.find(id).await;
        log_outcome(Action::Read, R::KIND, id, &result);
        result
    }

    pub async fn execute_create(&self, record: R) -> Result<(), ServiceError> {
        let result = self.create(&record).await;
        log_outcome(Action::Create, R::KIND, record.id(), &result);
        result
    }

    /// `record.id()` must already carry the target identifier.
    pub async fn execute_update(&self, record: R) -> Result<(), ServiceError> {
        let id = record.id().to_string();
        let result = self.update(record).await;
        log_outcome(Action::Update, R::KIND, &id, &result);
        result
    }

    pub async fn execute_delete(&self, id: &str) -> Result<(), ServiceError> {
        let result = self.delete(id).await;
        log_outcome(Action::Delete, R::KIND, id, &result);
        result
    }

    async fn find(&self, id: &str) -> Result<R, ServiceError> {
        authorize(self.permissions.as_ref(), Action::Read, R::KIND)?;
        Ok(self.use_case.find_by_id(id).await?)
    }

    async fn create(&self, record: &R) -> Result<(), ServiceError> {
        authorize(self.permissions.as_ref(), Action::Create, R::KIND)?;
        Ok(self.use_case.create(record).await?)
    }

    async fn update(&self, record: R) -> Result<(), ServiceError> {
        authorize(self.permissions.as_ref(), Action::Update, R::KIND)?;
        let record = match self.update_mode {
            UpdateMode::Replace => record,
            UpdateMode::Merge => {
                let current = self.use_case.find_by_id(record.id()).await?;
                current.merged_with(record)
            }
        };
        Ok(self.use_case.update(&record).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        authorize(self.permissions.as_ref(), Action::Delete, R::KIND)?;
        Ok(self.use_case.delete(id).await?)
    }
}

pub(crate) fn authorize(
    permissions: &dyn PermissionPolicy,
    action: Action,
    entity_type: &'static str,
) -> Result<(), ServiceError> {
    if permissions.allows(action, entity_type) {
        Ok(())
    } else {
        Err(ServiceError::PermissionDenied {
            action,
            entity_type,
        })
    }
}

pub(crate) fn log_outcome<T>(
    action: Action,
    entity_type: &'static str,
    id: &str,
    result: &Result<T, ServiceError>,
) {
    match result {
        Ok(_) => tracing::info!(%action, entity_type, id, "Request succeeded"),
        Err(e) => tracing::warn!(%action, entity_type, id, error = %e, "Request failed"),
    }
}

#[cfg(test)]
mod tests {
    use shelfkeep_domain::Book;

    use super::*;
    use crate::application::permission::{AllowAll, MockPermissionPolicy};
    use crate::infrastructure::memory::InMemoryStore;
    use crate::infrastructure::ports::{EntityStore, MockEntityStore};
    use crate::repositories::RecordRepository;
    use crate::use_cases::{UseCaseConfig, UseCaseError};

    fn service_over(
        store: impl EntityStore<Book> + 'static,
        permissions: impl PermissionPolicy + 'static,
        update_mode: UpdateMode,
    ) -> RecordService<Book> {
        let repo = Arc::new(RecordRepository::new(Arc::new(store)));
        RecordService::new(
            RecordUseCase::new(repo, UseCaseConfig::default()),
            Arc::new(permissions),
            update_mode,
        )
    }

    async fn memory_service(update_mode: UpdateMode) -> RecordService<Book> {
        let store = InMemoryStore::<Book>::new();
        store.initialize().await.unwrap();
        service_over(store, AllowAll, update_mode)
    }

    #[tokio::test]
    async fn denied_action_never_reaches_the_store() {
        let mut store = MockEntityStore::<Book>::new();
        store.expect_exists().times(0);
        store.expect_save().times(0);
        let mut permissions = MockPermissionPolicy::new();
        permissions
            .expect_allows()
            .withf(|action, kind| *action == Action::Create && kind == "Book")
            .return_const(false);

        let books = service_over(store, permissions, UpdateMode::Replace);
        let err = books
            .execute_create(Book::new("1", "T", "A"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::PermissionDenied {
                action: Action::Create,
                entity_type: "Book"
            }
        ));
        assert_eq!(err.to_string(), "Permission denied: cannot create Book");
    }

    #[tokio::test]
    async fn use_case_errors_pass_through_unchanged() {
        let books = memory_service(UpdateMode::Replace).await;
        let err = books.execute_find("1").await.unwrap_err();
        assert!(matches!(err, ServiceError::UseCase(UseCaseError::NotFound { .. })));
        assert_eq!(err.to_string(), "Book not found: 1");
    }

    #[tokio::test]
    async fn replace_mode_rejects_partial_bodies() {
        let books = memory_service(UpdateMode::Replace).await;
        books
            .execute_create(Book::new("1", "Test Book", "Test Author"))
            .await
            .unwrap();

        let err = books
            .execute_update(Book::new("1", "New Title", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::UseCase(UseCaseError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn merge_mode_keeps_fields_left_empty() {
        let books = memory_service(UpdateMode::Merge).await;
        books
            .execute_create(Book::new("1", "Test Book", "Test Author"))
            .await
            .unwrap();

        books
            .execute_update(Book::new("1", "New Title", ""))
            .await
            .unwrap();
        assert_eq!(
            books.execute_find("1").await.unwrap(),
            Book::new("1", "New Title", "Test Author")
        );
    }
}
