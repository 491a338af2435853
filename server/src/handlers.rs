//! Request handlers, one per endpoint group.
//!
//! Each handler dispatches on the method itself so that the order of checks
//! on the item route is fixed: id, then existence, then method, then body.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use todo_core::{codec, TodoId};

use crate::error::ApiError;
use crate::SharedStore;

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Encode `value` as a JSON response body.
fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    match codec::encode(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("failed to encode response: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `/health`, any method.
pub async fn health() -> Response {
    json(StatusCode::OK, &Health { status: "ok" })
}

/// `/todos`: GET lists, POST creates.
pub async fn collection(
    State(store): State<SharedStore>,
    method: Method,
    body: Bytes,
) -> Result<Response, ApiError> {
    match method {
        Method::GET => {
            let todos = store.list().await;
            Ok(json(StatusCode::OK, &todos))
        }
        Method::POST => {
            let input = codec::decode_create(&body)?;
            let title = input.into_title()?;
            let todo = store.create(title).await;
            tracing::debug!("created todo {}", todo.id);
            Ok(json(StatusCode::CREATED, &todo))
        }
        _ => Err(ApiError::MethodNotAllowed),
    }
}

/// `/todos/{id}`: GET, PUT and DELETE, all under one write-lock acquisition.
pub async fn item(
    State(store): State<SharedStore>,
    method: Method,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::NotFound)?;
    let id: TodoId = raw.parse().map_err(|_| ApiError::NotFound)?;

    let entry = store.entry(id).await.ok_or(ApiError::NotFound)?;

    match method {
        Method::GET => Ok(json(StatusCode::OK, entry.todo())),
        Method::PUT => {
            let patch = codec::decode_update(&body)?;
            if patch.has_blank_title() {
                tracing::warn!("todo {id} updated with a blank title");
            }
            let todo = entry.apply(patch);
            tracing::debug!("updated todo {id}");
            Ok(json(StatusCode::OK, &todo))
        }
        Method::DELETE => {
            entry.remove();
            tracing::debug!("deleted todo {id}");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        _ => Err(ApiError::MethodNotAllowed),
    }
}

/// Anything that matched no route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
