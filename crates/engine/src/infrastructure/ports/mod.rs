//! Port traits for infrastructure boundaries.
//!
//! The record store is the only abstraction in the engine; everything above
//! it is concrete and generic over the record kind.

mod error;
mod repos;

pub use error::StoreError;
pub use repos::EntityStore;

// =============================================================================
// Test-Only Mock Stores (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockEntityStore;
