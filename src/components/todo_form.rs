//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::CreateTodoData;
use crate::todos::use_todo_store;

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        let desc = description.get();
        let store = store.clone();
        spawn_local(async move {
            let data = CreateTodoData {
                title: text.trim().to_string(),
                description: if desc.trim().is_empty() {
                    None
                } else {
                    Some(desc.trim().to_string())
                },
            };
            if store.create(data).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <input
                type="text"
                class="todo-form-description"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
        </form>
    }
}
