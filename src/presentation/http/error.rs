use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::use_cases::users::UserOpError;
use crate::domain::users::validation::FieldErrors;

/// Fixed 404 body text. Malformed ids and absent rows produce the same
/// literal; nothing about the cause is leaked.
pub const NOT_FOUND: &str = "Not found";
const INTERNAL_ERROR: &str = "Internal server error";

/// Failures a handler can surface. Everything serializes under a
/// top-level `errors` key.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Unprocessable(FieldErrors),
    Internal(anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    errors: T,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { errors: NOT_FOUND })).into_response()
            }
            ApiError::Unprocessable(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { errors })).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        errors: INTERNAL_ERROR,
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<UserOpError> for ApiError {
    fn from(err: UserOpError) -> Self {
        match err {
            UserOpError::Invalid(errors) => ApiError::Unprocessable(errors),
            UserOpError::NotFound => ApiError::NotFound,
            UserOpError::Internal(e) => ApiError::Internal(e),
        }
    }
}
