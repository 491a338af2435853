//! Error types for the todo domain.
//!
//! # Design
//! These are the failures a request can hit before or while touching the
//! store. Mapping them to HTTP status codes and bodies is the server's job;
//! the `Display` strings here are the short reasons clients see.

use thiserror::Error;

use crate::types::TodoId;

#[derive(Debug, Error)]
pub enum Error {
    /// The request body is not a JSON object of the expected shape.
    #[error("invalid json")]
    InvalidJson,

    /// A todo was created without a non-blank title.
    #[error("title required")]
    TitleRequired,

    #[error("todo {0} not found")]
    NotFound(TodoId),
}

pub type Result<T> = std::result::Result<T, Error>;
