//! Theme Toggle
//!
//! Light/dark theme, persisted and seeded from the system preference.
//! While the user has not picked a theme, system preference changes are
//! followed live.

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::models::Theme;
use crate::storage::{BrowserStorage, StorageBackend, THEME_KEY};

/// Theme state provided via context
#[derive(Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
    storage: BrowserStorage,
}

impl ThemeController {
    /// Resolve the initial theme (saved value, else system preference),
    /// apply it to the document, and start following system changes.
    pub fn init(storage: BrowserStorage) -> Self {
        let initial = initial_theme(storage.get(THEME_KEY).as_deref(), system_prefers_dark());
        apply_to_document(initial);
        let theme = RwSignal::new(initial);
        watch_system_theme(storage, theme);
        Self { theme, storage }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        apply_to_document(theme);
        self.storage.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&self) {
        self.set(self.theme.get_untracked().toggled());
    }
}

/// Saved theme wins; otherwise the system preference decides
fn initial_theme(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved {
        Some(saved) => Theme::from_str(saved),
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// What a system preference change should switch to, if anything; a saved
/// theme means the user has chosen and the change is ignored.
fn system_change_target(saved: Option<&str>, prefers_dark: bool) -> Option<Theme> {
    if saved.is_some() {
        return None;
    }
    Some(if prefers_dark { Theme::Dark } else { Theme::Light })
}

fn system_prefers_dark() -> bool {
    media_query().map(|mq| mq.matches()).unwrap_or(false)
}

fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

/// Follow `prefers-color-scheme` changes while no theme is saved
fn watch_system_theme(storage: BrowserStorage, theme: RwSignal<Theme>) {
    let Some(mq) = media_query() else {
        return;
    };
    let handler = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |ev: web_sys::MediaQueryListEvent| {
            if let Some(next) = system_change_target(storage.get(THEME_KEY).as_deref(), ev.matches())
            {
                theme.set(next);
                apply_to_document(next);
                storage.set(THEME_KEY, next.as_str());
            }
        },
    );
    let _ = mq.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
    // Listener lives for the lifetime of the app
    handler.forget();
}

/// Toggle the `dark` class on `<html>`
fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let result = match theme {
        Theme::Dark => root.class_list().add_1("dark"),
        Theme::Light => root.class_list().remove_1("dark"),
    };
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_theme_prefers_saved_value() {
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn system_changes_only_followed_without_saved_theme() {
        assert_eq!(system_change_target(None, true), Some(Theme::Dark));
        assert_eq!(system_change_target(None, false), Some(Theme::Light));
        assert_eq!(system_change_target(Some("light"), true), None);
        assert_eq!(system_change_target(Some("dark"), false), None);
    }
}
