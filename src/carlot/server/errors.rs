//! API error type mapped to HTTP status codes.
//!
//! Every error response carries a JSON body `{"message": "..."}`.

use crate::error::{CarlotError, ErrorKind};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error that implements `IntoResponse`.
///
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Conflict` → 409
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_message(self) -> String {
        match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<CarlotError> for ApiError {
    fn from(err: CarlotError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Conflict => ApiError::Conflict(message),
            ErrorKind::InvalidArgument => ApiError::BadRequest(message),
            ErrorKind::Persistence | ErrorKind::Corrupt | ErrorKind::Internal => {
                tracing::error!("request failed: {}", message);
                ApiError::Internal(message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = axum::Json(json!({ "message": self.into_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let cases = [
            (CarlotError::CarNotFound("C1".into()), StatusCode::NOT_FOUND),
            (CarlotError::CarRented("C1".into()), StatusCode::CONFLICT),
            (CarlotError::AlreadyRented("C1".into()), StatusCode::CONFLICT),
            (CarlotError::InvalidDays(0), StatusCode::BAD_REQUEST),
            (CarlotError::MissingCustomer, StatusCode::BAD_REQUEST),
            (
                CarlotError::InvalidInput("Invalid price".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CarlotError::Persistence {
                    path: "cars.txt".into(),
                    source: std::io::Error::other("disk full"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn message_is_kept() {
        let err = ApiError::from(CarlotError::MissingCustomer);
        assert_eq!(err.into_message(), "Customer name required");
    }
}
