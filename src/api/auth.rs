//! Auth Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::AuthResponse;

const ENDPOINT: &str = "/auth";

/// Sign-up payload; field names match the API contract
#[derive(Debug, Clone, Serialize)]
pub struct SignUpData {
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

impl ApiClient {
    pub async fn sign_up(&self, data: &SignUpData) -> ApiResult<AuthResponse> {
        self.request_json("POST", &format!("{ENDPOINT}/sign-up/"), Some(data))
            .await
    }

    pub async fn sign_in(&self, data: &SignInData) -> ApiResult<AuthResponse> {
        self.request_json("POST", &format!("{ENDPOINT}/sign-in/"), Some(data))
            .await
    }

    /// Invalidate the server-side token; the caller clears the session
    /// locally whether or not this succeeds.
    pub async fn log_out(&self) -> ApiResult<()> {
        self.request_no_content("POST", &format!("{ENDPOINT}/log-out/"), None::<&()>)
            .await
    }
}
