//! Login page: username/password form backed by `cerebrum::actions::sign_in`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use cerebrum::guard::Route;
use cerebrum::shell::Shell;
use cerebrum::store::SessionState;

use crate::components::top_navbar::TopNavbar;
use crate::util::auth::{install_route_guard, should_render};

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Serialized error payload of the last failed login, if any.
fn login_error_message(state: &SessionState) -> Option<String> {
    state.authentication.error.as_ref().map(|e| format!("error = {}", e.display_payload()))
}

/// Login page. An authenticated session is sent on to `/`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let shell = expect_context::<RwSignal<Shell>>();
    install_route_guard(Route::Login, shell, session, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<cerebrum::config::ClientConfig>());

    let busy = move || session.get().authentication.is_fetching || session.get().current_user.is_fetching;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (username_value, password_value) = match validate_credentials(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::BrowserAuthApi::new(config.get_value());
            let store = crate::state::session::SignalStore::new(session);
            cerebrum::actions::sign_in(&store, &api, &username_value, &password_value).await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (username_value, password_value);
    };

    view! {
        <Title text="Login Page"/>
        <TopNavbar active=Route::Login/>
        <div class="login-page">
            <h1>"Login"</h1>
            <Show when=move || login_error_message(&session.get()).is_some()>
                <p class="login-message login-message--error">
                    {move || login_error_message(&session.get()).unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || should_render(shell.get(), Route::Login, &session.get())>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        "Submit"
                    </button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
