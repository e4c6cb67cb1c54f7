use super::*;
use serde_json::json;

#[test]
fn profile_lines_show_normalized_fields() {
    let user = UserRecord::from_payload(&json!({"id": 1, "username": "admin", "email": "johndoe@mail.com"}));
    assert_eq!(
        profile_lines(&user),
        vec!["User id: 1", "User username: admin", "User Email: johndoe@mail.com"]
    );
}

#[test]
fn profile_lines_mark_missing_fields() {
    let user = UserRecord::from_payload(&json!({"id": "abc"}));
    assert_eq!(
        profile_lines(&user),
        vec!["User id: abc", "User username: unknown", "User Email: unknown"]
    );
}
