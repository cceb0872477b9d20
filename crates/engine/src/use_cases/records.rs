//! Record lifecycle use cases: find, create, update, delete.
//!
//! One [`RecordUseCase`] per record kind. Identifier policy and field
//! validation run before any store call; existence pre/post conditions are
//! checked through the repository.

use std::sync::Arc;

use shelfkeep_domain::{DomainError, IdPolicy, Record};

use crate::infrastructure::ports::StoreError;
use crate::repositories::RecordRepository;

/// Error type for record use cases.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists { entity_type: &'static str, id: String },
    #[error("{entity_type} cannot be deleted: {id}")]
    Undeletable { entity_type: &'static str, id: String },
    #[error("{entity_type} is inactive: {id}")]
    InactiveEntity { entity_type: &'static str, id: String },
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<DomainError> for UseCaseError {
    fn from(err: DomainError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<StoreError> for UseCaseError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            StoreError::DuplicateKey { entity_type, id } => Self::AlreadyExists { entity_type, id },
            other => Self::Store(other),
        }
    }
}

/// What `delete` does when the identifier is not stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingDeletePolicy {
    /// Report `NotFound`.
    #[default]
    Reject,
    /// Succeed without touching the store.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseCaseConfig {
    pub id_policy: IdPolicy,
    pub missing_delete: MissingDeletePolicy,
}

pub struct RecordUseCase<R: Record> {
    repo: Arc<RecordRepository<R>>,
    config: UseCaseConfig,
}

impl<R: Record> RecordUseCase<R> {
    pub fn new(repo: Arc<RecordRepository<R>>, config: UseCaseConfig) -> Self {
        Self { repo, config }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<R, UseCaseError> {
        self.config.id_policy.check(id)?;
        let record = self.require(id).await?;
        if !record.is_active() {
            return Err(UseCaseError::InactiveEntity {
                entity_type: R::KIND,
                id: id.to_string(),
            });
        }
        Ok(record)
    }

    pub async fn create(&self, record: &R) -> Result<(), UseCaseError> {
        self.config.id_policy.check(record.id())?;
        record.validate()?;
        if self.repo.exists(record.id()).await? {
            return Err(UseCaseError::AlreadyExists {
                entity_type: R::KIND,
                id: record.id().to_string(),
            });
        }
        // A create racing past the check still hits the store's DuplicateKey.
        self.repo.save(record).await?;
        Ok(())
    }

    /// Replace the stored record. Validation runs before the existence check,
    /// so an invalid payload for an absent id reports `InvalidArgument`.
    pub async fn update(&self, record: &R) -> Result<(), UseCaseError> {
        self.config.id_policy.check(record.id())?;
        record.validate()?;
        self.require(record.id()).await?;
        self.repo.update(record).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), UseCaseError> {
        self.config.id_policy.check(id)?;
        let Some(record) = self.repo.lookup(id).await? else {
            return match self.config.missing_delete {
                MissingDeletePolicy::Reject => Err(UseCaseError::NotFound {
                    entity_type: R::KIND,
                    id: id.to_string(),
                }),
                MissingDeletePolicy::Ignore => Ok(()),
            };
        };
        if !record.can_be_deleted() {
            return Err(UseCaseError::Undeletable {
                entity_type: R::KIND,
                id: id.to_string(),
            });
        }
        match self.repo.delete(id).await {
            // Removed by a concurrent delete after the lookup.
            Err(e) if e.is_not_found()
                && self.config.missing_delete == MissingDeletePolicy::Ignore =>
            {
                Ok(())
            }
            result => Ok(result?),
        }
    }

    async fn require(&self, id: &str) -> Result<R, UseCaseError> {
        self.repo
            .lookup(id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                entity_type: R::KIND,
                id: id.to_string(),
            })
    }
}
