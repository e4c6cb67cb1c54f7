//! Profile page: the fields fetched from the current-user endpoint.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use cerebrum::guard::Route;
use cerebrum::shell::Shell;
use cerebrum::store::{SessionState, UserRecord, selectors};

use crate::components::top_navbar::TopNavbar;
use crate::util::auth::{install_route_guard, should_render};

fn profile_lines(user: &UserRecord) -> Vec<String> {
    let field = |value: Option<String>| value.unwrap_or_else(|| "unknown".to_owned());
    vec![
        format!("User id: {}", field(user.id_display())),
        format!("User username: {}", field(user.username().map(str::to_owned))),
        format!("User Email: {}", field(user.email().map(str::to_owned))),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let shell = expect_context::<RwSignal<Shell>>();
    install_route_guard(Route::Profile, shell, session, use_navigate());

    let lines = move || profile_lines(selectors::user(&session.get()));

    view! {
        <Title text="Profile"/>
        <Show when=move || should_render(shell.get(), Route::Profile, &session.get())>
            <TopNavbar active=Route::Profile/>
            <div class="profile-page">
                <h1>"Your Data"</h1>
                <p>"Information gathered from the API request to /me:"</p>
                <ul class="profile-fields">
                    {move || lines().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </div>
        </Show>
    }
}
