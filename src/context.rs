//! Application Context
//!
//! Shared state provided via the Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::error_bus::ErrorBus;
use crate::session::Session;
use crate::theme::ThemeController;

/// Top-level views the app can show (no router; plain state switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Todos,
    SignIn,
    SignUp,
    Profile,
}

/// App-wide context handed to every component
#[derive(Clone)]
pub struct AppContext {
    pub session: Session,
    pub api: ApiClient,
    pub error_bus: ErrorBus,
    pub theme: ThemeController,
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        session: Session,
        api: ApiClient,
        error_bus: ErrorBus,
        theme: ThemeController,
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            session,
            api,
            error_bus,
            theme,
            page: page.0,
            set_page: page.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
