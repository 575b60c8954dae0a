//! Todo List Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::models::Todo;
use crate::todos::use_todo_store;

use super::DeleteConfirmButton;

/// List of todos with toggle and delete actions
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let todos = store.todos();
    let is_loading = store.is_loading();

    view! {
        <div class="todo-list">
            <Show when=move || is_loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <Show when=move || !is_loading.get() && todos.get().is_empty()>
                <p class="empty-state">"Nothing to do yet."</p>
            </Show>
            <ul>
                <For
                    each=move || todos.get()
                    key=|todo| (todo.id, todo.updated_at.clone())
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </ul>
        </div>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();
    let id = todo.id;
    let completed = todo.completed;

    let toggle_store = store.clone();
    let toggle = move |_| {
        let store = toggle_store.clone();
        spawn_local(async move {
            let _ = store.toggle_complete(id).await;
        });
    };

    let delete_store = store.clone();
    let delete = move |_| {
        let store = delete_store.clone();
        spawn_local(async move {
            let _ = store.delete(id).await;
        });
    };

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <input type="checkbox" prop:checked=completed on:change=toggle />
            <div class="todo-body">
                <span class="todo-title">{todo.title.clone()}</span>
                {todo.description.clone().map(|desc| view! {
                    <span class="todo-description">{desc}</span>
                })}
                <span class="todo-date">{format_date(&todo.created_at)}</span>
            </div>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=Callback::new(move |_| delete(())) />
        </li>
    }
}

/// Locale-formatted date, or a dash when the value is unparsable
fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return "—".to_string();
    }
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return "—".to_string();
    }
    format!(
        "{} {}",
        String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED)),
        String::from(date.to_locale_time_string("en-US"))
    )
}
