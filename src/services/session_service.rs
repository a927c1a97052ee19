use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bindings::{self, AuthSession, AuthUser};

/// Session state shared with every component that cares who is signed in
#[derive(Clone)]
pub struct SessionState {
    pub user: RwSignal<Option<AuthUser>>,
    /// True until the initial session fetch settles
    pub is_loading: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            is_loading: RwSignal::new(true),
        }
    }

    /// Reactive check used by nav and route guards
    pub fn is_signed_in(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn apply_session(&self, session: Option<AuthSession>) {
        self.user.set(session.map(|s| s.user));
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session_state() {
    provide_context(SessionState::new());
}

pub fn use_session_state() -> SessionState {
    expect_context::<SessionState>()
}

/// Restore the provider-persisted session once at startup
pub fn load_session(state: &SessionState) {
    let user = state.user;
    let is_loading = state.is_loading;
    spawn_local(async move {
        match bindings::current_session().await {
            Ok(session) => {
                if session.is_some() {
                    log::info!("Restored existing session");
                }
                user.set(session.map(|s| s.user));
            }
            Err(e) => {
                log::warn!("Failed to restore session: {}", e);
            }
        }
        is_loading.set(false);
    });
}

/// End the provider session and clear local state
pub async fn sign_out(state: SessionState) -> Result<(), String> {
    bindings::sign_out().await?;
    state.user.set(None);
    Ok(())
}
