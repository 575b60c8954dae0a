//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Theme;

/// Button flipping between light and dark theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let theme = ctx.theme;

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || match theme.theme() {
                Theme::Light => "🌙",
                Theme::Dark => "☀",
            }}
        </button>
    }
}
