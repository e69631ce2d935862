use super::*;

#[test]
fn defaults_when_nothing_set() {
    assert_eq!(ClientConfig::from_values(None, None, None), ClientConfig::default());
}

#[test]
fn api_url_is_normalized() {
    let config = ClientConfig::from_values(Some(" https://api.gobarber.dev/ "), None, None);
    assert_eq!(config.api_base_url, "https://api.gobarber.dev");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_values(Some("  "), Some(""), Some(" "));
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.storage_namespace, DEFAULT_STORAGE_NAMESPACE);
    assert_eq!(config.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
}

#[test]
fn custom_namespace_and_timeout() {
    let config = ClientConfig::from_values(None, Some("@Staging"), Some("5000"));
    assert_eq!(config.storage_namespace, "@Staging");
    assert_eq!(config.toast_timeout_ms, 5000);
}

#[test]
fn unparsable_timeout_uses_default() {
    let config = ClientConfig::from_values(None, None, Some("soon"));
    assert_eq!(config.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
}

#[test]
fn normalize_base_url_strips_every_trailing_slash() {
    assert_eq!(normalize_base_url("http://localhost:3333//"), "http://localhost:3333");
}
