//! HTTP surface of the todo service.
//!
//! # Design
//! The store is created by whoever builds the router and shared with the
//! handlers as axum state. `app` builds a router over a fresh, empty store;
//! `router` takes an existing one, which lets tests inspect state directly.
//!
//! Routing is by path only. The collection path matches `/todos` exactly;
//! everything below `/todos/` with a single segment goes to the item
//! handler, and any other path is a 404. Method checks happen inside the
//! handlers. Request bodies are not size-capped.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use todo_core::TodoStore;

pub use config::ServerConfig;
pub use error::ApiError;

pub type SharedStore = Arc<TodoStore>;

pub fn app() -> Router {
    router(Arc::new(TodoStore::new()))
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", any(handlers::health))
        .route("/todos", any(handlers::collection))
        .route("/todos/{id}", any(handlers::item))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::disable())
        .with_state(store)
}

/// Serve a fresh store on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
