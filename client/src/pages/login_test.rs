use super::*;
use cerebrum::api::ApiError;
use cerebrum::store::AuthenticationAction;
use serde_json::json;

#[test]
fn validate_credentials_trims_username() {
    assert_eq!(validate_credentials("  admin ", "pw"), Ok(("admin".to_owned(), "pw".to_owned())));
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    assert_eq!(validate_credentials("admin", " pw "), Ok(("admin".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("admin", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn login_error_message_absent_without_error() {
    assert_eq!(login_error_message(&SessionState::default()), None);
}

#[test]
fn login_error_message_serializes_response_body() {
    let error = ApiError::from_status(401, json!({"message": "Username or password does not exist"}));
    let state = SessionState::default().reduce(&AuthenticationAction::LoginError(error).into());
    assert_eq!(
        login_error_message(&state).as_deref(),
        Some(r#"error = {"message":"Username or password does not exist"}"#)
    );
}
