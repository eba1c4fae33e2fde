use std::error::Error as StdError;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use streakwise_core::errors::{DatabaseError, Error as CoreError, FieldError};
use thiserror::Error;

type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Invalid request body")]
    InvalidBody(Vec<FieldError>),
}

impl ApiError {
    pub fn goal_not_found() -> Self {
        ApiError::NotFound("Goal not found".to_string())
    }

    /// Maps a body that is valid JSON but does not fit the target type to the
    /// offending field. Syntax errors carry no field.
    pub fn from_json_error(err: JsonPathError) -> Self {
        match err.inner().classify() {
            serde_json::error::Category::Data => ApiError::InvalidBody(vec![field_error(&err)]),
            _ => ApiError::BadRequest(format!("Invalid JSON body: {}", err.inner())),
        }
    }
}

fn field_error(err: &JsonPathError) -> FieldError {
    let inner = err.inner().to_string();
    let message = inner.split(" at line ").next().unwrap_or_default().to_string();

    // A missing field is reported against its parent object.
    let path = err.path().to_string();
    let field = if path == "." {
        missing_field_name(&message).unwrap_or("body").to_string()
    } else {
        path
    };
    FieldError::new(field, message)
}

fn missing_field_name(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}

fn find_json_path_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a JsonPathError> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(found) = e.downcast_ref::<JsonPathError>() {
            return Some(found);
        }
        current = e.source();
    }
    None
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    /// Field-level details, set on 400 responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match &self {
            ApiError::Core(CoreError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string(), Some(e.field_errors()))
            }
            ApiError::Core(CoreError::Database(DatabaseError::NotFound(_))) => {
                (StatusCode::NOT_FOUND, "Not found".to_string(), None)
            }
            ApiError::Core(e) => {
                tracing::error!("Request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                    None,
                )
            }
            ApiError::NotFound(reason) => (StatusCode::NOT_FOUND, reason.clone(), None),
            ApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, reason.clone(), Some(Vec::new()))
            }
            ApiError::InvalidBody(fields) => (
                StatusCode::BAD_REQUEST,
                self.to_string(),
                Some(fields.clone()),
            ),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
            errors,
        });
        (status, body).into_response()
    }
}

// Extractor rejections are client mistakes; always report them as 400.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if let JsonRejection::JsonDataError(data) = &rejection {
            if let Some(err) = find_json_path_error(data) {
                return ApiError::InvalidBody(vec![field_error(err)]);
            }
        }
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
