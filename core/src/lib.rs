//! Domain core for the todo service.
//!
//! # Overview
//! Holds everything that does not touch the network: the `Todo` model and
//! its request payloads, the JSON codec, and the in-memory `TodoStore`.
//!
//! # Design
//! - `TodoStore` is a plain value; whoever hosts the service owns it and
//!   shares it with request handlers. There is no global instance.
//! - One reader/writer lock guards the whole store, so every operation is
//!   linearizable.
//! - Decoding is lenient about missing and `null` fields and strict about
//!   the root being an object; validation of titles happens afterwards.

pub mod codec;
pub mod error;
pub mod store;
pub mod types;

pub use error::Error;
pub use store::{TodoEntry, TodoStore};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
