//! HTTP-facing error type.
//!
//! Every variant is answered locally with a plain-text body terminated by a
//! newline; nothing is retried or turned into a second response.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid json")]
    InvalidJson,

    #[error("title required")]
    TitleRequired,

    /// Unknown route, unparsable id, or missing record.
    #[error("404 page not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::TitleRequired => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<todo_core::Error> for ApiError {
    fn from(err: todo_core::Error) -> Self {
        match err {
            todo_core::Error::InvalidJson => ApiError::InvalidJson,
            todo_core::Error::TitleRequired => ApiError::TitleRequired,
            todo_core::Error::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            format!("{self}\n"),
        )
            .into_response()
    }
}
