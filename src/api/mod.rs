//! REST API Bindings
//!
//! Thin async wrappers over the browser fetch API, organized by domain.

mod auth;
mod profile;
mod todos;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::{ApiError, ApiResult};
use crate::error_bus::ErrorBus;
use crate::session::Session;

pub use auth::{SignInData, SignUpData};
pub use profile::ProfileUpdate;

/// Base path of the REST API
const BASE_URL: &str = "/api";

/// Shared HTTP client state: base URL, session (for the token header) and
/// the bus that 5xx responses are broadcast on.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
    bus: ErrorBus,
}

impl ApiClient {
    pub fn new(session: Session, bus: ErrorBus) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            session,
            bus,
        }
    }

    /// Request expecting a JSON body back
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let response = self.send(method, path, body).await?;
        let promise = response
            .json()
            .map_err(|_| ApiError::network("Invalid response body"))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|_| ApiError::network("Invalid response body"))?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ApiError::network(format!("Unexpected response shape: {e}")))
    }

    /// Request where the response body is ignored (DELETE, log-out)
    pub(crate) async fn request_no_content(
        &self,
        method: &str,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<()> {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<Response> {
        let url = format!("{}{}", self.base_url, path);

        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = body {
            let json = serde_json::to_string(body)
                .map_err(|e| ApiError::network(format!("Failed to encode request: {e}")))?;
            opts.set_body(&JsValue::from_str(&json));
        }

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|_| ApiError::network("Failed to build request"))?;
        let headers = request.headers();
        let _ = headers.set("Content-Type", "application/json");
        let token = self.session.token();
        if !token.is_empty() {
            let _ = headers.set("Authorization", &format!("Token {token}"));
        }

        let window = web_sys::window().ok_or_else(|| ApiError::network("No window"))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|_| ApiError::network("Network error"))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ApiError::network("Network error"))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let error = match error_detail(&response).await {
            Some(detail) => ApiError::with_detail(status, detail),
            None => ApiError::new(Some(status), format!("Request failed with status {status}")),
        };
        if error.is_server_error() {
            self.bus.emit(&error);
        }
        Err(error)
    }
}

/// Pull the DRF `detail` message out of an error body, if there is one
async fn error_detail(response: &Response) -> Option<String> {
    let text = JsFuture::from(response.text().ok()?).await.ok()?;
    let text = text.as_string()?;
    let value: serde_json::Value = serde_json::from_str(&text).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}
