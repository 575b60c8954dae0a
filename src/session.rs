//! Auth Session State
//!
//! Token and user identity for the signed-in user, held in a reactive
//! store and persisted to local storage so a reload keeps the session.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::{AuthResponse, User};
use crate::storage::{self, BrowserStorage, StorageBackend, SESSION_KEY};

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store, Serialize, Deserialize)]
pub struct SessionState {
    pub token: String,
    pub user: User,
}

impl SessionState {
    /// Authenticated iff a token is present
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Session context object
///
/// Created once at startup from persisted storage and passed explicitly to
/// whoever needs it (the todo facade reads it to pick a backend).
#[derive(Clone, Copy)]
pub struct Session {
    state: Store<SessionState>,
    storage: BrowserStorage,
}

impl Session {
    /// Restore the persisted session, or start as guest
    pub fn restore(storage: BrowserStorage) -> Self {
        let state: SessionState = storage::load_json(&storage, SESSION_KEY).unwrap_or_default();
        Self {
            state: Store::new(state),
            storage,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.state.token().read().is_empty()
    }

    pub fn token(&self) -> String {
        self.state.token().get()
    }

    pub fn user(&self) -> User {
        self.state.user().get()
    }

    /// Reactive read of the token, for effects that re-run on login/logout
    pub fn token_signal(&self) -> impl Fn() -> String + Copy {
        let state = self.state;
        move || state.token().get()
    }

    /// Install a fresh token + user after sign-in or sign-up
    pub fn set_auth(&self, auth: AuthResponse) {
        self.state.token().set(auth.token.clone());
        self.state.user().set(auth.user.clone());
        storage::save_json(
            &self.storage,
            SESSION_KEY,
            &SessionState {
                token: auth.token,
                user: auth.user,
            },
        );
    }

    /// Replace the user record (profile edits), keeping the token
    pub fn set_user(&self, user: User) {
        self.state.user().set(user.clone());
        let token = self.state.token().get();
        storage::save_json(&self.storage, SESSION_KEY, &SessionState { token, user });
    }

    /// Drop the session and its persisted copy
    pub fn clear(&self) {
        self.state.token().set(String::new());
        self.state.user().set(User::default());
        self.storage.remove(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_iff_token_non_empty() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());

        let state = SessionState {
            token: "abc123".to_string(),
            user: User::default(),
        };
        assert!(state.is_authenticated());
    }
}
