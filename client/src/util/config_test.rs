use super::*;

#[test]
fn config_for_none_uses_default_base_url() {
    assert_eq!(config_for(None), ClientConfig::default());
}

#[test]
fn config_for_valid_url_is_used() {
    let config = config_for(Some("https://api.cerebrum.test"));
    assert_eq!(config.base_url, "https://api.cerebrum.test/");
}

#[test]
fn config_for_invalid_url_falls_back() {
    assert_eq!(config_for(Some("not a url")), ClientConfig::default());
}
