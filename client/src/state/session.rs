//! Signal-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `RwSignal<SessionState>` via context. Pages wrap it in
//! `SignalStore` to run `cerebrum::actions` against it; every dispatch goes
//! through the pure reducer and notifies subscribers once.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use cerebrum::store::{Action, Dispatch, SessionState};

#[derive(Clone, Copy, Debug)]
pub struct SignalStore {
    state: RwSignal<SessionState>,
}

impl SignalStore {
    pub fn new(state: RwSignal<SessionState>) -> Self {
        Self { state }
    }

    /// Store over the session signal provided by `App`.
    pub fn from_context() -> Self {
        Self::new(expect_context::<RwSignal<SessionState>>())
    }
}

impl Dispatch for SignalStore {
    fn dispatch(&self, action: Action) {
        self.state.update(|state| *state = state.reduce(&action));
    }

    fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }
}
