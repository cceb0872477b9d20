//! Application service errors.

use crate::use_cases::UseCaseError;

use super::permission::Action;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Permission denied: cannot {action} {entity_type}")]
    PermissionDenied {
        action: Action,
        entity_type: &'static str,
    },
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}
