//! Application layer - boundary-facing services.
//!
//! Services sit between the HTTP handlers and the use cases. Permission checks
//! and request logging happen here, never below.

pub mod assembler;
pub mod error;
pub mod permission;
pub mod record_service;
pub mod update_mode;
pub mod user_service;

pub use assembler::UserAssembler;
pub use error::ServiceError;
pub use permission::{Action, AllowAll, PermissionPolicy};
pub use record_service::RecordService;
pub use update_mode::UpdateMode;
pub use user_service::UserService;
