//! Todo Facade
//!
//! One CRUD + derived-stats surface over two interchangeable backends:
//! the REST API when a session token is present, local storage otherwise.
//! Which backend handles a call is decided fresh at the start of every
//! call, so a mid-session login or logout redirects the next operation
//! without a reload.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateTodoData, Todo, UpdateTodoData};
use crate::session::Session;
use crate::storage::BrowserStorage;

/// Persistence backend for the todo collection
///
/// `?Send` because WASM futures run on the single browser thread.
#[async_trait(?Send)]
pub trait TodoBackend {
    async fn load(&self) -> ApiResult<Vec<Todo>>;
    async fn create(&self, data: &CreateTodoData) -> ApiResult<Todo>;
    async fn update(&self, id: u32, data: &UpdateTodoData) -> ApiResult<Todo>;
    async fn delete(&self, id: u32) -> ApiResult<()>;
    async fn clear_completed(&self, completed_ids: &[u32]) -> ApiResult<()>;
}

/// Which backend is authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

/// Pure selection function: authenticated → remote, guest → local
pub fn select_backend(is_authenticated: bool) -> BackendKind {
    if is_authenticated {
        BackendKind::Remote
    } else {
        BackendKind::Local
    }
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Reactive todo store used by the UI
///
/// Constructed from explicit context objects (session, API client); the
/// session is only ever read, never mutated from here.
#[derive(Clone)]
pub struct TodoStore {
    session: Session,
    remote: RemoteBackend,
    local: LocalBackend<BrowserStorage>,
    todos: RwSignal<Vec<Todo>>,
    is_loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl TodoStore {
    pub fn new(session: Session, api: ApiClient) -> Self {
        Self {
            session,
            remote: RemoteBackend::new(api),
            local: LocalBackend::new(BrowserStorage::new()),
            todos: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn backend(&self) -> &dyn TodoBackend {
        match select_backend(self.session.is_authenticated()) {
            BackendKind::Remote => &self.remote,
            BackendKind::Local => &self.local,
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn todos(&self) -> ReadSignal<Vec<Todo>> {
        self.todos.read_only()
    }

    pub fn is_loading(&self) -> ReadSignal<bool> {
        self.is_loading.read_only()
    }

    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    // Derived stats, computed from the current collection on every read

    pub fn total_count(&self) -> usize {
        self.todos.read().len()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.read().iter().filter(|t| t.completed).count()
    }

    pub fn active_count(&self) -> usize {
        self.todos.read().iter().filter(|t| !t.completed).count()
    }

    // ========================
    // Operations
    // ========================

    /// Fetch the active collection into the store
    pub async fn load(&self) {
        self.is_loading.set(true);
        self.error.set(None);
        match self.backend().load().await {
            Ok(todos) => self.todos.set(todos),
            Err(err) => self.fail(&err, "Failed to load todos"),
        }
        self.is_loading.set(false);
    }

    /// Create a todo and put it at the front of the collection
    pub async fn create(&self, data: CreateTodoData) -> ApiResult<Todo> {
        self.error.set(None);
        match self.backend().create(&data).await {
            Ok(todo) => {
                self.todos.update(|todos| todos.insert(0, todo.clone()));
                Ok(todo)
            }
            Err(err) => {
                self.fail(&err, "Failed to create todo");
                Err(err)
            }
        }
    }

    /// Patch a todo and replace it in the collection
    pub async fn update(&self, id: u32, data: UpdateTodoData) -> ApiResult<Todo> {
        self.error.set(None);
        match self.backend().update(id, &data).await {
            Ok(updated) => {
                self.todos.update(|todos| {
                    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                        *todo = updated.clone();
                    }
                });
                Ok(updated)
            }
            Err(err) => {
                self.fail(&err, "Failed to update todo");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: u32) -> ApiResult<()> {
        self.error.set(None);
        match self.backend().delete(id).await {
            Ok(()) => {
                self.todos.update(|todos| todos.retain(|t| t.id != id));
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to delete todo");
                Err(err)
            }
        }
    }

    /// Flip `completed`; applying twice restores the original value
    pub async fn toggle_complete(&self, id: u32) -> ApiResult<()> {
        let Some(completed) = self
            .todos
            .read_untracked()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
        else {
            web_sys::console::error_1(&format!("Todo not found with id {id}").into());
            return Ok(());
        };
        let data = UpdateTodoData {
            completed: Some(!completed),
            ..Default::default()
        };
        self.update(id, data).await.map(|_| ())
    }

    /// Delete every completed todo
    pub async fn clear_completed(&self) -> ApiResult<()> {
        let completed_ids: Vec<u32> = self
            .todos
            .read_untracked()
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect();

        self.error.set(None);
        match self.backend().clear_completed(&completed_ids).await {
            Ok(()) => {
                self.todos.update(|todos| todos.retain(|t| !t.completed));
                Ok(())
            }
            Err(err) => {
                self.fail(&err, "Failed to clear completed todos");
                Err(err)
            }
        }
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    fn fail(&self, err: &ApiError, fallback: &str) {
        web_sys::console::error_1(&format!("{fallback}: {err}").into());
        self.error.set(Some(surface_message(err, fallback)));
    }
}

/// Message shown for a failed operation: the server's `detail` when the
/// response carried one, the fixed fallback text otherwise.
fn surface_message(err: &ApiError, fallback: &str) -> String {
    err.detail
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{self, MemoryStorage, StorageBackend, TODOS_KEY};
    use futures::executor::block_on;

    fn fixed_now() -> String {
        "2026-01-01T00:00:00.000Z".to_string()
    }

    fn backend() -> LocalBackend<MemoryStorage> {
        LocalBackend::with_clock(MemoryStorage::new(), fixed_now)
    }

    fn stored(storage: &MemoryStorage) -> Vec<Todo> {
        storage::load_json(storage, TODOS_KEY).unwrap_or_default()
    }

    fn new_todo(title: &str) -> CreateTodoData {
        CreateTodoData {
            title: title.to_string(),
            description: None,
        }
    }

    #[test]
    fn surfaced_message_prefers_server_detail_over_fallback() {
        let err = ApiError::with_detail(400, "Title cannot be empty.");
        assert_eq!(
            surface_message(&err, "Failed to update todo"),
            "Title cannot be empty."
        );

        // Detail-less HTTP error: the synthesized transport message never
        // reaches the UI, the fixed fallback does.
        let err = ApiError::new(Some(400), "Request failed with status 400");
        assert_eq!(
            surface_message(&err, "Failed to update todo"),
            "Failed to update todo"
        );

        let err = ApiError::network("Network error");
        assert_eq!(
            surface_message(&err, "Failed to load todos"),
            "Failed to load todos"
        );
    }

    #[test]
    fn selection_follows_authentication() {
        assert_eq!(select_backend(false), BackendKind::Local);
        assert_eq!(select_backend(true), BackendKind::Remote);
    }

    #[test]
    fn guest_create_assigns_sequential_ids() {
        let backend = backend();
        let a = block_on(backend.create(&new_todo("A"))).unwrap();
        let b = block_on(backend.create(&new_todo("B"))).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(!a.completed);
        assert_eq!(a.created_at, fixed_now());

        let todos = block_on(backend.load()).unwrap();
        assert_eq!(todos[0].title, "B"); // newest first
        assert_eq!(todos[1].title, "A");
    }

    #[test]
    fn guest_id_collides_after_delete_then_create() {
        // Documented upstream behavior: ids are len + 1, so deleting an
        // item and creating another reuses a live id.
        let backend = backend();
        block_on(backend.create(&new_todo("A"))).unwrap();
        block_on(backend.create(&new_todo("B"))).unwrap();
        block_on(backend.delete(1)).unwrap();

        let c = block_on(backend.create(&new_todo("C"))).unwrap();
        assert_eq!(c.id, 2);

        let todos = block_on(backend.load()).unwrap();
        let twos: Vec<_> = todos.iter().filter(|t| t.id == 2).collect();
        assert_eq!(twos.len(), 2);
    }

    #[test]
    fn guest_storage_matches_memory_after_each_operation() {
        let storage = MemoryStorage::new();
        let backend = LocalBackend::with_clock(storage.clone(), fixed_now);

        block_on(backend.create(&new_todo("A"))).unwrap();
        assert_eq!(stored(&storage), block_on(backend.load()).unwrap());

        block_on(backend.update(
            1,
            &UpdateTodoData {
                completed: Some(true),
                ..Default::default()
            },
        ))
        .unwrap();
        assert_eq!(stored(&storage), block_on(backend.load()).unwrap());

        block_on(backend.delete(1)).unwrap();
        assert_eq!(stored(&storage), block_on(backend.load()).unwrap());
        assert!(stored(&storage).is_empty());
    }

    #[test]
    fn guest_update_merges_partial_fields() {
        let backend = backend();
        block_on(backend.create(&CreateTodoData {
            title: "A".to_string(),
            description: Some("first".to_string()),
        }))
        .unwrap();

        let updated = block_on(backend.update(
            1,
            &UpdateTodoData {
                title: Some("A2".to_string()),
                ..Default::default()
            },
        ))
        .unwrap();

        assert_eq!(updated.title, "A2");
        assert_eq!(updated.description.as_deref(), Some("first"));
        assert!(!updated.completed);
    }

    #[test]
    fn guest_update_missing_id_is_not_found() {
        let backend = backend();
        let err = block_on(backend.update(99, &UpdateTodoData::default())).unwrap_err();
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn guest_toggle_twice_restores_flag() {
        let backend = backend();
        let created = block_on(backend.create(&new_todo("A"))).unwrap();

        let flip = |completed: bool| UpdateTodoData {
            completed: Some(completed),
            ..Default::default()
        };
        let once = block_on(backend.update(created.id, &flip(!created.completed))).unwrap();
        assert!(once.completed);
        let twice = block_on(backend.update(created.id, &flip(!once.completed))).unwrap();
        assert_eq!(twice.completed, created.completed);
    }

    #[test]
    fn guest_clear_completed_leaves_no_completed_items() {
        let backend = backend();
        for title in ["A", "B", "C"] {
            block_on(backend.create(&new_todo(title))).unwrap();
        }
        for id in [1, 3] {
            block_on(backend.update(
                id,
                &UpdateTodoData {
                    completed: Some(true),
                    ..Default::default()
                },
            ))
            .unwrap();
        }

        block_on(backend.clear_completed(&[1, 3])).unwrap();

        let todos = block_on(backend.load()).unwrap();
        assert_eq!(todos.len(), 1);
        assert!(todos.iter().all(|t| !t.completed));
        assert_eq!(todos[0].title, "B");
    }

    #[test]
    fn corrupt_blob_loads_as_empty_collection() {
        let storage = MemoryStorage::new();
        storage.set(TODOS_KEY, "][ not json");
        let backend = LocalBackend::with_clock(storage, fixed_now);
        assert_eq!(block_on(backend.load()).unwrap(), Vec::new());
    }
}
