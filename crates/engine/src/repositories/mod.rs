//! Repository modules - Data access wrappers around the store port.
//!
//! Each repository wraps an [`EntityStore`](crate::infrastructure::ports::EntityStore)
//! and is the only way use cases reach persisted records.

pub mod record;

pub use record::RecordRepository;
