use super::*;
use cerebrum::api::{ApiError, LoginResponse};
use cerebrum::store::{AuthenticationAction, CurrentUserAction};
use serde_json::{Value, json};

fn authenticated() -> SessionState {
    SessionState::default()
        .reduce(&AuthenticationAction::LoginSuccess(LoginResponse::with_token("tok")).into())
        .reduce(&CurrentUserAction::FetchMeSuccess(json!({"id": 1})).into())
}

fn rejected() -> SessionState {
    SessionState::default().reduce(&CurrentUserAction::FetchMeError(ApiError::from_status(401, Value::Null)).into())
}

// =============================================================
// While booting
// =============================================================

#[test]
fn booting_shell_neither_renders_nor_redirects() {
    let shell = Shell::new();
    for route in Route::ALL {
        assert!(!should_render(shell, route, &SessionState::default()));
        assert_eq!(redirect_target(shell, route, &SessionState::default()), None);
    }
}

// =============================================================
// After boot
// =============================================================

#[test]
fn unauthenticated_protected_routes_redirect_to_login() {
    let shell = Shell::settled();
    assert_eq!(redirect_target(shell, Route::Home, &rejected()), Some(Route::Login));
    assert_eq!(redirect_target(shell, Route::Profile, &rejected()), Some(Route::Login));
    assert!(should_render(shell, Route::Login, &rejected()));
}

#[test]
fn authenticated_login_redirects_home() {
    let shell = Shell::settled();
    assert_eq!(redirect_target(shell, Route::Login, &authenticated()), Some(Route::Home));
    assert!(should_render(shell, Route::Home, &authenticated()));
    assert!(should_render(shell, Route::Profile, &authenticated()));
}
