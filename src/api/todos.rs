//! Todo Endpoints

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{CreateTodoData, Paginated, Todo, UpdateTodoData};

const ENDPOINT: &str = "/todos/";

impl ApiClient {
    pub async fn list_todos(&self) -> ApiResult<Paginated<Todo>> {
        self.request_json("GET", ENDPOINT, None::<&()>).await
    }

    pub async fn create_todo(&self, data: &CreateTodoData) -> ApiResult<Todo> {
        self.request_json("POST", ENDPOINT, Some(data)).await
    }

    pub async fn update_todo(&self, id: u32, data: &UpdateTodoData) -> ApiResult<Todo> {
        self.request_json("PATCH", &format!("{ENDPOINT}{id}/"), Some(data))
            .await
    }

    pub async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        self.request_no_content("DELETE", &format!("{ENDPOINT}{id}/"), None::<&()>)
            .await
    }
}
