//! Use cases - business rules around single store operations.
//!
//! Use cases only see records through [`crate::repositories`]; they never
//! name a concrete store adapter.

pub mod records;

pub use records::{MissingDeletePolicy, RecordUseCase, UseCaseConfig, UseCaseError};
