//! Guest Backend
//!
//! Keeps the whole todo collection as one JSON blob in local storage.
//! Missing or corrupt data reads as the empty collection; every mutation
//! rewrites the full blob in a single synchronous write.

use async_trait::async_trait;

use super::TodoBackend;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateTodoData, Todo, UpdateTodoData};
use crate::storage::{self, StorageBackend, TODOS_KEY};

/// Guest-mode store over any key-value storage
#[derive(Clone)]
pub struct LocalBackend<S: StorageBackend> {
    storage: S,
    clock: fn() -> String,
}

impl<S: StorageBackend> LocalBackend<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            clock: now_iso,
        }
    }

    #[cfg(test)]
    pub fn with_clock(storage: S, clock: fn() -> String) -> Self {
        Self { storage, clock }
    }

    fn read(&self) -> Vec<Todo> {
        storage::load_json(&self.storage, TODOS_KEY).unwrap_or_default()
    }

    fn persist(&self, todos: &[Todo]) {
        storage::save_json(&self.storage, TODOS_KEY, &todos);
    }
}

#[async_trait(?Send)]
impl<S: StorageBackend> TodoBackend for LocalBackend<S> {
    async fn load(&self) -> ApiResult<Vec<Todo>> {
        Ok(self.read())
    }

    async fn create(&self, data: &CreateTodoData) -> ApiResult<Todo> {
        let mut todos = self.read();
        let todo = guest::create(&mut todos, data, &(self.clock)());
        self.persist(&todos);
        Ok(todo)
    }

    async fn update(&self, id: u32, data: &UpdateTodoData) -> ApiResult<Todo> {
        let mut todos = self.read();
        match guest::update(&mut todos, id, data, &(self.clock)()) {
            Some(todo) => {
                self.persist(&todos);
                Ok(todo)
            }
            None => Err(ApiError::not_found(format!("Todo {id} not found"))),
        }
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let mut todos = self.read();
        guest::delete(&mut todos, id);
        self.persist(&todos);
        Ok(())
    }

    async fn clear_completed(&self, _completed_ids: &[u32]) -> ApiResult<()> {
        let mut todos = self.read();
        guest::clear_completed(&mut todos);
        self.persist(&todos);
        Ok(())
    }
}

/// Current time as an ISO-8601 string, from the browser clock
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Pure guest collection operations
pub(crate) mod guest {
    use super::*;

    /// Synthesize a new todo and put it at the front (the API lists
    /// newest-first). Ids are assigned as `len + 1`, matching the upstream
    /// behavior; after a delete this can collide with a surviving id.
    pub fn create(todos: &mut Vec<Todo>, data: &CreateTodoData, now: &str) -> Todo {
        let todo = Todo {
            id: todos.len() as u32 + 1,
            title: data.title.clone(),
            description: data.description.clone(),
            completed: false,
            created_at: now.to_string(),
            updated_at: now.to_string(),
            is_overdue: false,
        };
        todos.insert(0, todo.clone());
        todo
    }

    /// Merge partial fields into the first todo with the given id
    pub fn update(todos: &mut [Todo], id: u32, data: &UpdateTodoData, now: &str) -> Option<Todo> {
        let todo = todos.iter_mut().find(|t| t.id == id)?;
        if let Some(title) = &data.title {
            todo.title = title.clone();
        }
        if let Some(description) = &data.description {
            todo.description = Some(description.clone());
        }
        if let Some(completed) = data.completed {
            todo.completed = completed;
        }
        todo.updated_at = now.to_string();
        Some(todo.clone())
    }

    pub fn delete(todos: &mut Vec<Todo>, id: u32) {
        todos.retain(|t| t.id != id);
    }

    pub fn clear_completed(todos: &mut Vec<Todo>) {
        todos.retain(|t| !t.completed);
    }
}
