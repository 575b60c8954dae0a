//! Todo Stats Bar Component
//!
//! Derived counters plus the bulk "clear completed" action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::todos::use_todo_store;

#[component]
pub fn TodoStats() -> impl IntoView {
    let store = use_todo_store();

    let counts = {
        let store = store.clone();
        move || {
            format!(
                "{} total, {} active, {} completed",
                store.total_count(),
                store.active_count(),
                store.completed_count()
            )
        }
    };

    let any_completed = {
        let store = store.clone();
        move || store.completed_count() > 0
    };

    let clear_store = store.clone();
    let clear_completed = move |_| {
        let store = clear_store.clone();
        spawn_local(async move {
            let _ = store.clear_completed().await;
        });
    };

    view! {
        <div class="todo-stats">
            <span class="todo-counts">{counts}</span>
            <Show when=any_completed>
                <button class="clear-completed-btn" on:click=clear_completed.clone()>
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}
