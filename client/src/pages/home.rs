//! Home page: the authenticated landing route.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use cerebrum::guard::Route;
use cerebrum::shell::Shell;
use cerebrum::store::SessionState;

use crate::components::top_navbar::TopNavbar;
use crate::util::auth::{install_route_guard, should_render};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let shell = expect_context::<RwSignal<Shell>>();
    install_route_guard(Route::Home, shell, session, use_navigate());

    view! {
        <Title text="Home"/>
        <Show when=move || should_render(shell.get(), Route::Home, &session.get())>
            <TopNavbar active=Route::Home/>
            <div class="home-page">
                <h1>"Logged In!"</h1>
                <div class="card">
                    <h2>"Hello World!"</h2>
                    <p>"Congratulations on logging in."</p>
                </div>
            </div>
        </Show>
    }
}
