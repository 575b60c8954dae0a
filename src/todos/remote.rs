//! Remote Backend
//!
//! Delegates every operation to the REST API; the server owns ids and
//! timestamps. Errors propagate to the facade untouched.

use async_trait::async_trait;
use futures::future::join_all;

use super::TodoBackend;
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{CreateTodoData, Todo, UpdateTodoData};

#[derive(Clone)]
pub struct RemoteBackend {
    api: ApiClient,
}

impl RemoteBackend {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl TodoBackend for RemoteBackend {
    async fn load(&self) -> ApiResult<Vec<Todo>> {
        Ok(self.api.list_todos().await?.results)
    }

    async fn create(&self, data: &CreateTodoData) -> ApiResult<Todo> {
        self.api.create_todo(data).await
    }

    async fn update(&self, id: u32, data: &UpdateTodoData) -> ApiResult<Todo> {
        self.api.update_todo(id, data).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.api.delete_todo(id).await
    }

    /// One DELETE per completed id, issued concurrently. A failure is
    /// reported after all requests settle; already-deleted items stay
    /// deleted upstream (no rollback).
    async fn clear_completed(&self, completed_ids: &[u32]) -> ApiResult<()> {
        let results = join_all(completed_ids.iter().map(|id| self.api.delete_todo(*id))).await;
        results.into_iter().collect()
    }
}
