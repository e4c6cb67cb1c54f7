use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn urls_resolve_against_config() {
    let api = BrowserAuthApi::new(ClientConfig::new("http://localhost:8080").unwrap());
    assert_eq!(api.login_url(), "http://localhost:8080/login");
    assert_eq!(api.me_url(), "http://localhost:8080/me");
}

