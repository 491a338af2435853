//! In-memory entity store for todos.
//!
//! # Design
//! The id→record map and the id counter live behind one `tokio::sync::RwLock`.
//! Readers share it; every writer excludes all other access, which makes each
//! operation linearizable.
//!
//! `entry` hands out a write guard scoped to one existing record so a caller
//! can look a record up, decide what to do with it, and commit the change
//! without releasing the lock in between. The item endpoints use it for
//! GET, PUT and DELETE alike.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::types::{Todo, TodoId, UpdateTodo};

#[derive(Debug)]
struct StoreState {
    todos: HashMap<TodoId, Todo>,
    /// Strictly greater than every id handed out so far.
    next_id: i64,
}

/// Thread-safe custody of all todos plus the id generator.
#[derive(Debug)]
pub struct TodoStore {
    state: RwLock<StoreState>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                todos: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every current record, in no particular order.
    pub async fn list(&self) -> Vec<Todo> {
        let state = self.state.read().await;
        state.todos.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.todos.is_empty()
    }

    /// Insert a new, incomplete todo. The title is stored as given; callers
    /// reject blank titles before getting here.
    pub async fn create(&self, title: String) -> Todo {
        let mut state = self.state.write().await;
        let id = TodoId(state.next_id);
        state.next_id += 1;

        let todo = Todo {
            id,
            title,
            completed: false,
            created_at: Utc::now(),
        };
        state.todos.insert(id, todo.clone());
        todo
    }

    pub async fn get(&self, id: TodoId) -> Result<Todo> {
        let state = self.state.read().await;
        state.todos.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    /// Acquire the write lock and return a handle on record `id`, or `None`
    /// if it does not exist. The lock is held until the handle is dropped or
    /// consumed.
    pub async fn entry(&self, id: TodoId) -> Option<TodoEntry<'_>> {
        let guard = self.state.write().await;
        let todo = guard.todos.get(&id).cloned()?;
        Some(TodoEntry { guard, todo })
    }

    pub async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo> {
        let entry = self.entry(id).await.ok_or(Error::NotFound(id))?;
        Ok(entry.apply(patch))
    }

    pub async fn delete(&self, id: TodoId) -> Result<()> {
        let entry = self.entry(id).await.ok_or(Error::NotFound(id))?;
        entry.remove();
        Ok(())
    }
}

/// Exclusive handle on one existing record.
///
/// Holds a working copy of the record; `apply` writes it back under the same
/// id and `remove` deletes it.
pub struct TodoEntry<'a> {
    guard: RwLockWriteGuard<'a, StoreState>,
    todo: Todo,
}

impl TodoEntry<'_> {
    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn apply(mut self, patch: UpdateTodo) -> Todo {
        self.todo.apply(patch);
        self.guard.todos.insert(self.todo.id, self.todo.clone());
        self.todo
    }

    pub fn remove(mut self) -> Todo {
        self.guard.todos.remove(&self.todo.id);
        self.todo
    }
}
