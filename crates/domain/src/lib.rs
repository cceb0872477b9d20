//! Shelfkeep domain layer.
//!
//! Record models, the [`Record`] capability every store and use case is
//! generic over, identifier policy, and field validation. No I/O lives here.

pub mod entities;
pub mod error;
pub mod record;

pub use entities::{Book, Entity, User};
pub use error::DomainError;
pub use record::{IdPolicy, Record};
