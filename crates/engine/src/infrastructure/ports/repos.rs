//! Record store port.

use async_trait::async_trait;
use shelfkeep_domain::Record;

use super::error::StoreError;

// =============================================================================
// Record Storage (one instance per record kind)
// =============================================================================

/// Persistence contract shared by every backing strategy.
///
/// Implementations must behave identically from the caller's side:
/// - `save` rejects an existing identifier with `DuplicateKey` and leaves
///   prior state untouched.
/// - `find_by_id`, `update` and `delete` report an absent identifier as
///   `NotFound`, never as a default value.
/// - Every call before `initialize` or after `shutdown` fails with
///   `Unavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore<R: Record>: Send + Sync {
    /// Idempotently create the backing structure.
    async fn initialize(&self) -> Result<(), StoreError>;

    async fn save(&self, record: &R) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<R, StoreError>;
    async fn exists(&self, id: &str) -> Result<bool, StoreError>;

    /// Replace every field of the record stored under `record.id()`.
    async fn update(&self, record: &R) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Remove every record of this kind.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Release the underlying handle.
    async fn shutdown(&self) -> Result<(), StoreError>;
}
