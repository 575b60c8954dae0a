//! Sign-In Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SignInData;
use crate::context::{use_app_context, Page};
use crate::schemas::{self, FieldError};

#[component]
pub fn SignInForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submit_error.set(None);

        let email = email.get();
        let password = password.get();
        if let Err(errors) = schemas::validate_sign_in(&email, &password) {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());

        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.api.sign_in(&SignInData { email, password }).await {
                Ok(auth) => {
                    ctx.session.set_auth(auth);
                    ctx.navigate(Page::Todos);
                }
                Err(err) => set_submit_error.set(Some(err.message)),
            }
        });
    };

    let error_for = move |field: &'static str| {
        field_errors.with(|errors| {
            schemas::field_message(errors, field).map(|message| view! {
                <span class="field-error">{message.to_string()}</span>
            })
        })
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Sign in"</h2>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                {move || error_for("email")}
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error_for("password")}
            </label>
            {move || submit_error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
            <button type="submit">"Sign in"</button>
        </form>
    }
}
