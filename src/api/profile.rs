//! Profile Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::User;

const ENDPOINT: &str = "/auth/profile";

/// Partial profile update; only supplied fields are patched
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ApiClient {
    pub async fn get_profile(&self, id: u32) -> ApiResult<User> {
        self.request_json("GET", &format!("{ENDPOINT}/{id}/"), None::<&()>)
            .await
    }

    pub async fn update_profile(&self, id: u32, data: &ProfileUpdate) -> ApiResult<User> {
        self.request_json("PATCH", &format!("{ENDPOINT}/{id}/"), Some(data))
            .await
    }
}
