//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component applies the same guard: render nothing while the
//! shell boots, then either render or navigate to the guard's target.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use cerebrum::guard::{Resolution, Route};
use cerebrum::shell::Shell;
use cerebrum::store::SessionState;

/// Where `route` must send the user instead of rendering, if anywhere.
pub fn redirect_target(shell: Shell, route: Route, state: &SessionState) -> Option<Route> {
    match shell.resolve(route, state) {
        Some(Resolution::Redirect(target)) => Some(target),
        Some(Resolution::Render(_)) | None => None,
    }
}

/// `route` may render its content right now.
pub fn should_render(shell: Shell, route: Route, state: &SessionState) -> bool {
    matches!(shell.resolve(route, state), Some(Resolution::Render(_)))
}

/// Navigate away whenever the guard says `route` must redirect.
pub fn install_route_guard<F>(route: Route, shell: RwSignal<Shell>, session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(shell.get(), route, &session.get()) {
            navigate(target.path(), NavigateOptions::default());
        }
    });
}
