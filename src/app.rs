//! Todo App
//!
//! Main application component: context wiring and page switching.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{
    ProfileEditor, SignInForm, SignUpForm, ThemeToggle, Toast, TodoForm, TodoList, TodoStats,
};
use crate::context::{AppContext, Page};
use crate::error_bus::ErrorBus;
use crate::session::Session;
use crate::storage::BrowserStorage;
use crate::theme::ThemeController;
use crate::todos::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let storage = BrowserStorage::new();
    let session = Session::restore(storage);
    let error_bus = ErrorBus::new();
    let api = ApiClient::new(session, error_bus.clone());
    let theme = ThemeController::init(storage);
    let (page, set_page) = signal(Page::Todos);

    let ctx = AppContext::new(session, api.clone(), error_bus, theme, (page, set_page));
    provide_context(ctx.clone());

    let store = TodoStore::new(session, api);
    provide_context(store.clone());

    // Load the active collection at startup and again whenever the token
    // changes, so login/logout swaps the visible collection.
    let token = session.token_signal();
    let load_store = store.clone();
    Effect::new(move |_| {
        let _ = token();
        let store = load_store.clone();
        spawn_local(async move {
            store.load().await;
        });
    });

    let logout_ctx = ctx.clone();
    let logout = move |_| {
        let ctx = logout_ctx.clone();
        spawn_local(async move {
            // Best effort server-side; the local session goes regardless
            let _ = ctx.api.log_out().await;
            ctx.session.clear();
            ctx.navigate(Page::Todos);
        });
    };

    let go_to = {
        let ctx = ctx.clone();
        move |target: Page| {
            let ctx = ctx.clone();
            move |_| ctx.navigate(target)
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="brand" on:click=go_to(Page::Todos)>"Todos"</h1>
                <nav class="app-nav">
                    <Show
                        when=move || session.is_authenticated()
                        fallback={
                            let go_to = go_to.clone();
                            move || view! {
                                <button on:click=go_to(Page::SignIn)>"Sign in"</button>
                                <button on:click=go_to(Page::SignUp)>"Sign up"</button>
                            }
                        }
                    >
                        <span class="welcome">{move || session.user().username}</span>
                        <button on:click=go_to(Page::Profile)>"Profile"</button>
                        <button on:click=logout.clone()>"Log out"</button>
                    </Show>
                    <ThemeToggle />
                </nav>
            </header>

            <main class="main-content">
                {move || match page.get() {
                    Page::Todos => view! {
                        <TodoForm />
                        <TodoList />
                        <TodoStats />
                        <Show when=move || !session.is_authenticated()>
                            <p class="guest-hint">
                                "You are browsing as a guest; todos are stored in this browser only."
                            </p>
                        </Show>
                    }
                    .into_any(),
                    Page::SignIn => view! { <SignInForm /> }.into_any(),
                    Page::SignUp => view! { <SignUpForm /> }.into_any(),
                    Page::Profile => view! { <ProfileEditor /> }.into_any(),
                }}
            </main>

            <Toast />
        </div>
    }
}
