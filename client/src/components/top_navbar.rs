//! Top navigation bar with route links and the logout control.

#[cfg(test)]
#[path = "top_navbar_test.rs"]
mod top_navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use cerebrum::guard::{Route, is_authenticated};
use cerebrum::store::SessionState;

use crate::state::session::SignalStore;

fn link_class(link: Route, active: Route) -> &'static str {
    if link == active { "nav-link active" } else { "nav-link" }
}

#[component]
pub fn TopNavbar(active: Route) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = SignalStore::from_context();

    // Protected pages react to the cleared session and redirect to login.
    let on_logout = move |_| cerebrum::actions::logout(&store);

    view! {
        <nav class="navbar">
            <A href=Route::Home.path() attr:class="navbar-brand">"Cerebrum"</A>
            <A href=Route::Home.path() attr:class=link_class(Route::Home, active)>"Home"</A>
            <A href=Route::Profile.path() attr:class=link_class(Route::Profile, active)>"Profile"</A>
            <Show
                when=move || is_authenticated(&session.get())
                fallback=move || view! {
                    <A href=Route::Login.path() attr:class=link_class(Route::Login, active)>"Login"</A>
                }
            >
                <button class="nav-link" on:click=on_logout>"Log out"</button>
            </Show>
        </nav>
    }
}
