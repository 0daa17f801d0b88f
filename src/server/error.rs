use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::bank::QueryError;

pub type ApiResponse<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error("method not allowed on this route")]
    MethodNotAllowed,
}

impl ApiError {
    /// Storage failures on writes are reported as 422, except for a missing
    /// row which stays a 404.
    pub fn unprocessable_write(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::Database(error),
            other => {
                tracing::warn!("write rejected by storage: {other}");
                Self::Query(QueryError::unprocessable(other.to_string()))
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Query(QueryError::InvalidInput(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Query(QueryError::NotFound(_)) | Self::Database(sqlx::Error::RowNotFound) => {
                StatusCode::NOT_FOUND
            }
            Self::Query(QueryError::Unprocessable(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Query(e) => Some(e.detail().to_owned()),
            Self::BadRequest(detail) => Some(detail.clone()),
            Self::Database(sqlx::Error::RowNotFound) => Some("no such record".to_owned()),
            Self::MethodNotAllowed => None,
            // storage internals stay in the logs
            Self::Database(_) => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Resource Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        _ => "Internal server error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        } else {
            tracing::debug!("request rejected: {self}");
        }
        let body = ErrorBody {
            success: false,
            message: message_for(status),
            status_code: status.as_u16(),
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
