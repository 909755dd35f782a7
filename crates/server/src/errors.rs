use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::warn;

pub const MSG_MALFORMED_BODY: &str = "Unable to fill new User with request body data";
pub const MSG_STORAGE_OPEN: &str = "Unable to open storage file";
pub const MSG_STORAGE_CORRUPT: &str = "Unable to parse storage file";
pub const MSG_DUPLICATE_ID: &str = "Already have user with same ID";
pub const MSG_NOT_FOUND: &str = "Unable to find User with selected ID";
pub const MSG_MARSHAL: &str = "Unable to marshal data in JSON";
pub const MSG_WRITE: &str = "Unable to write JSON in file";

/// Error response: a status plus a bare JSON string body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub const fn malformed_body() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, MSG_MALFORMED_BODY)
    }

    pub const fn not_found() -> Self {
        Self::new(StatusCode::BAD_REQUEST, MSG_NOT_FOUND)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let (status, message) = match &e {
            ServiceError::StorageOpen(_) => (StatusCode::UNPROCESSABLE_ENTITY, MSG_STORAGE_OPEN),
            ServiceError::StorageCorrupt(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, MSG_STORAGE_CORRUPT)
            }
            ServiceError::Serialize(_) => (StatusCode::UNPROCESSABLE_ENTITY, MSG_MARSHAL),
            ServiceError::Write(_) => (StatusCode::UNPROCESSABLE_ENTITY, MSG_WRITE),
            ServiceError::AlreadyExists(_) => (StatusCode::BAD_REQUEST, MSG_DUPLICATE_ID),
            ServiceError::NotFound(_) => (StatusCode::BAD_REQUEST, MSG_NOT_FOUND),
        };
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            warn!(error = %e, "storage operation failed");
        }
        Self::new(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status_and_message() {
        let unprocessable = StatusCode::UNPROCESSABLE_ENTITY;
        let cases = [
            (ServiceError::StorageOpen("x".into()), unprocessable, MSG_STORAGE_OPEN),
            (ServiceError::StorageCorrupt("x".into()), unprocessable, MSG_STORAGE_CORRUPT),
            (ServiceError::Serialize("x".into()), unprocessable, MSG_MARSHAL),
            (ServiceError::Write("x".into()), unprocessable, MSG_WRITE),
            (ServiceError::already_exists("user", "1"), StatusCode::BAD_REQUEST, MSG_DUPLICATE_ID),
            (ServiceError::not_found("user", "1"), StatusCode::BAD_REQUEST, MSG_NOT_FOUND),
        ];
        for (err, status, message) in cases {
            assert_eq!(ApiError::from(err), ApiError::new(status, message));
        }
    }

    #[test]
    fn response_carries_status() {
        let resp = ApiError::malformed_body().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
