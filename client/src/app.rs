//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use cerebrum::shell::Shell;
use cerebrum::store::SessionState;

use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage};
use crate::util::config::client_config;

/// Root application component.
///
/// Owns the session store and shell, starts the boot fetch, and sets up
/// client-side routing. Pages render nothing until the shell settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = client_config();
    let session = RwSignal::new(SessionState::default());
    let shell = RwSignal::new(Shell::new());

    provide_context(config.clone());
    provide_context(session);
    provide_context(shell);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::BrowserAuthApi::new(config);
        let store = crate::state::session::SignalStore::new(session);
        let mut booted = shell.get_untracked();
        booted.boot(&store, &api).await;
        shell.set(booted);
    });
    #[cfg(not(feature = "csr"))]
    let _ = config;

    view! {
        <Title text="Cerebrum"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
