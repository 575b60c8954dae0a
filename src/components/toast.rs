//! Toast Component
//!
//! Bottom-right notification fed by the error bus. Server errors show up
//! here no matter which call triggered them.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// How long a toast stays up, in milliseconds
const TOAST_TIMEOUT_MS: u32 = 5000;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();
    let (message, set_message) = signal::<Option<(u32, String)>>(None);

    // Messages are tagged with a generation so a stale timer cannot
    // dismiss a newer message that replaced the one it was started for.
    let generation = Arc::new(AtomicU32::new(0));
    ctx.error_bus.subscribe(move |err| {
        let gen = generation.fetch_add(1, Ordering::Relaxed) + 1;
        set_message.set(Some((gen, err.to_string())));
    });

    Effect::new(move |_| {
        if let Some((gen, _)) = message.get() {
            spawn_local(async move {
                TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                set_message.update(|current| {
                    if timer_owns_message(current, gen) {
                        *current = None;
                    }
                });
            });
        }
    });

    view! {
        {move || message.get().map(|(_, text)| view! {
            <div class="toast toast-error" on:click=move |_| set_message.set(None)>
                {text}
            </div>
        })}
    }
}

/// A timer may only clear the message it was started for
fn timer_owns_message(current: &Option<(u32, String)>, timer_generation: u32) -> bool {
    current
        .as_ref()
        .is_some_and(|(gen, _)| *gen == timer_generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_does_not_dismiss_newer_message() {
        let current = Some((2, "second".to_string()));
        assert!(!timer_owns_message(&current, 1));
        assert!(timer_owns_message(&current, 2));
        assert!(!timer_owns_message(&None, 1));
    }
}
