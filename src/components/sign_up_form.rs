//! Sign-Up Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SignUpData;
use crate::context::{use_app_context, Page};
use crate::schemas::{self, FieldError, SignUpForm as SignUpValues};

#[component]
pub fn SignUpForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submit_error.set(None);

        let values = SignUpValues {
            username: username.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        if let Err(errors) = schemas::validate_sign_up(&values) {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(Vec::new());

        let ctx = ctx.clone();
        spawn_local(async move {
            let data = SignUpData {
                username: values.username,
                first_name: values.first_name,
                last_name: values.last_name,
                email: values.email,
                password: values.password,
            };
            match ctx.api.sign_up(&data).await {
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
            <h2>"Sign up"</h2>
            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                {move || error_for("username")}
            </label>
            <label>
                "First name"
                <input
                    type="text"
                    prop:value=move || first_name.get()
                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                />
                {move || error_for("firstName")}
            </label>
            <label>
                "Last name"
                <input
                    type="text"
                    prop:value=move || last_name.get()
                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                />
                {move || error_for("lastName")}
            </label>
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
            <label>
                "Confirm password"
                <input
                    type="password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />
                {move || error_for("confirmPassword")}
            </label>
            {move || submit_error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}
            <button type="submit">"Create account"</button>
        </form>
    }
}
