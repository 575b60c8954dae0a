//! Profile Editor Component
//!
//! Two independent forms: general info and password change. Both PATCH
//! the profile endpoint; the session user is refreshed on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ProfileUpdate;
use crate::context::use_app_context;
use crate::schemas::{self, FieldError, ProfileGeneralsForm};

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.trim().to_string())
    }
}

#[component]
pub fn ProfileEditor() -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.session.user();

    let (username, set_username) = signal(user.username.clone());
    let (first_name, set_first_name) = signal(user.first_name.clone());
    let (last_name, set_last_name) = signal(user.last_name.clone());
    let (email, set_email) = signal(user.email.clone());
    let (generals_errors, set_generals_errors) = signal(Vec::<FieldError>::new());
    let (generals_status, set_generals_status) = signal::<Option<String>>(None);

    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_errors, set_password_errors) = signal(Vec::<FieldError>::new());
    let (password_status, set_password_status) = signal::<Option<String>>(None);

    // Refresh from the server once; local state may be stale
    let refresh_ctx = ctx.clone();
    Effect::new(move |_| {
        let ctx = refresh_ctx.clone();
        spawn_local(async move {
            let id = ctx.session.user().id;
            if let Ok(user) = ctx.api.get_profile(id).await {
                set_username.set(user.username.clone());
                set_first_name.set(user.first_name.clone());
                set_last_name.set(user.last_name.clone());
                set_email.set(user.email.clone());
                ctx.session.set_user(user);
            }
        });
    });

    let generals_ctx = ctx.clone();
    let submit_generals = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_generals_status.set(None);

        let form = ProfileGeneralsForm {
            username: non_empty(username.get()),
            first_name: non_empty(first_name.get()),
            last_name: non_empty(last_name.get()),
            email: non_empty(email.get()),
        };
        if let Err(errors) = schemas::validate_profile_generals(&form) {
            set_generals_errors.set(errors);
            return;
        }
        set_generals_errors.set(Vec::new());

        let ctx = generals_ctx.clone();
        spawn_local(async move {
            let data = ProfileUpdate {
                username: form.username,
                first_name: form.first_name,
                last_name: form.last_name,
                email: form.email,
                password: None,
            };
            let id = ctx.session.user().id;
            match ctx.api.update_profile(id, &data).await {
                Ok(updated) => {
                    ctx.session.set_user(updated);
                    set_generals_status.set(Some("Profile updated".to_string()));
                }
                Err(err) => set_generals_status.set(Some(err.message)),
            }
        });
    };

    let password_ctx = ctx.clone();
    let submit_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_password_status.set(None);

        let new_password = password.get();
        if let Err(errors) = schemas::validate_profile_password(&new_password, &confirm_password.get()) {
            set_password_errors.set(errors);
            return;
        }
        set_password_errors.set(Vec::new());

        let ctx = password_ctx.clone();
        spawn_local(async move {
            let data = ProfileUpdate {
                password: Some(new_password),
                ..Default::default()
            };
            let id = ctx.session.user().id;
            match ctx.api.update_profile(id, &data).await {
                Ok(_) => {
                    set_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_password_status.set(Some("Password changed".to_string()));
                }
                Err(err) => set_password_status.set(Some(err.message)),
            }
        });
    };

    let generals_error_for = move |field: &'static str| {
        generals_errors.with(|errors| {
            schemas::field_message(errors, field).map(|message| view! {
                <span class="field-error">{message.to_string()}</span>
            })
        })
    };
    let password_error_for = move |field: &'static str| {
        password_errors.with(|errors| {
            schemas::field_message(errors, field).map(|message| view! {
                <span class="field-error">{message.to_string()}</span>
            })
        })
    };

    view! {
        <div class="profile-editor">
            <form class="profile-form" on:submit=submit_generals>
                <h2>"Profile"</h2>
                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    {move || generals_error_for("username")}
                </label>
                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    />
                    {move || generals_error_for("firstName")}
                </label>
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    />
                    {move || generals_error_for("lastName")}
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || generals_error_for("email")}
                </label>
                {move || generals_status.get().map(|message| view! {
                    <p class="form-status">{message}</p>
                })}
                <button type="submit">"Save changes"</button>
            </form>

            <form class="profile-form" on:submit=submit_password>
                <h2>"Change password"</h2>
                <label>
                    "New password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || password_error_for("password")}
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />
                    {move || password_error_for("confirmPassword")}
                </label>
                {move || password_status.get().map(|message| view! {
                    <p class="form-status">{message}</p>
                })}
                <button type="submit">"Change password"</button>
            </form>
        </div>
    }
}
