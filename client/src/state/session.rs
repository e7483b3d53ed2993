//! Session token persistence and the reactive session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` owns the single credential token and reads/writes it through
//! an injectable [`TokenStorage`]. `Session` wraps the store with a signal and
//! is provided through Leptos context, so route guards and views react to
//! sign-in/sign-out without touching browser globals directly.
//!
//! The token is never validated here; its presence alone decides
//! [`SessionPhase::Authenticated`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::form::AuthOutcome;

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Key/value backend for the session token.
pub trait TokenStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Browser `localStorage`. Every call is a no-op outside the hydrated client.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = browser_storage() else {
                leptos::logging::warn!("localStorage unavailable; session will not persist");
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                leptos::logging::warn!("localStorage write failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Owner of the persisted session token.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// `localStorage` in the hydrated client, memory during server rendering.
    pub fn for_target() -> Self {
        if cfg!(feature = "hydrate") { Self::browser() } else { Self::in_memory() }
    }

    pub fn set(&self, token: &str) {
        self.storage.set_item(TOKEN_KEY, token);
    }

    /// Current token. An empty stored value counts as absent.
    pub fn get(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

/// Navigation-relevant view of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Browser storage has not been read yet (SSR and first hydration pass).
    Restoring,
    Unauthenticated,
    Authenticated,
}

/// Snapshot held in the session signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub restored: bool,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match (self.restored, self.token.is_some()) {
            (false, _) => SessionPhase::Restoring,
            (true, false) => SessionPhase::Unauthenticated,
            (true, true) => SessionPhase::Authenticated,
        }
    }
}

/// Reactive session context shared by the router and views.
///
/// `Copy`, so event handlers and view closures can capture it freely.
#[derive(Clone, Copy)]
pub struct Session {
    store: StoredValue<SessionStore>,
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new(store: SessionStore) -> Self {
        Self { store: StoredValue::new(store), state: RwSignal::new(SessionState::default()) }
    }

    /// Load the persisted token and leave the `Restoring` phase.
    pub fn restore(&self) {
        let token = self.store.with_value(SessionStore::get);
        self.state.set(SessionState { token, restored: true });
    }

    pub fn sign_in(&self, token: String) {
        self.store.with_value(|s| s.set(&token));
        self.state.set(SessionState { token: Some(token), restored: true });
    }

    pub fn sign_out(&self) {
        self.store.with_value(SessionStore::clear);
        self.state.set(SessionState { token: None, restored: true });
    }

    /// Sign in when a login/register attempt produced a token. Returns whether
    /// the session changed.
    pub fn accept(&self, outcome: &AuthOutcome) -> bool {
        match outcome {
            AuthOutcome::SignedIn(token) => {
                self.sign_in(token.clone());
                true
            }
            AuthOutcome::Failed(_) => false,
        }
    }

    /// Drop the session when the API rejected its token.
    pub fn end_if_unauthorized<T>(&self, result: &Result<T, ApiError>) {
        if result.as_ref().is_err_and(ApiError::is_unauthorized) {
            leptos::logging::log!("session token rejected; signing out");
            self.sign_out();
        }
    }

    /// Tracked read of the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.with(SessionState::phase)
    }

    /// Untracked token read for building requests.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }
}
