//! HTTP error mapping.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shelfkeep_shared::ErrorResponse;

use crate::application::ServiceError;
use crate::use_cases::UseCaseError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(m)
            | ApiError::Forbidden(m)
            | ApiError::NotFound(m)
            | ApiError::Conflict(m)
            | ApiError::Internal(m) => m,
        };
        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed with a store error");
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::PermissionDenied { .. } => ApiError::Forbidden(message),
            ServiceError::UseCase(inner) => match inner {
                UseCaseError::InvalidArgument(_) => ApiError::BadRequest(message),
                UseCaseError::NotFound { .. } => ApiError::NotFound(message),
                UseCaseError::AlreadyExists { .. }
                | UseCaseError::Undeletable { .. }
                | UseCaseError::InactiveEntity { .. } => ApiError::Conflict(message),
                UseCaseError::Store(_) => ApiError::Internal(message),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Action;
    use crate::infrastructure::ports::StoreError;

    fn status_of(err: impl Into<ServiceError>) -> StatusCode {
        ApiError::from(err.into()).status()
    }

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(
            status_of(UseCaseError::InvalidArgument("id".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(UseCaseError::NotFound {
                entity_type: "Book",
                id: "1".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(UseCaseError::Undeletable {
                entity_type: "Book",
                id: "1".into()
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(UseCaseError::Store(StoreError::unavailable("save", "closed"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ServiceError::PermissionDenied {
                action: Action::Delete,
                entity_type: "User"
            }),
            StatusCode::FORBIDDEN
        );
    }
}
