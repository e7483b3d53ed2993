use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.api.base_url(), DEFAULT_API_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn reads_overrides_and_trims_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("POSTWATCH_API_URL", "http://localhost:8000/"),
        ("PORT", "8080"),
    ]))
    .unwrap();
    assert_eq!(cfg.api.base_url(), "http://localhost:8000");
    assert_eq!(cfg.port, 8080);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("POSTWATCH_API_URL", "  "), ("PORT", "")])).unwrap();
    assert_eq!(cfg.api.base_url(), DEFAULT_API_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn rejects_non_http_api_url() {
    let err = ServerConfig::from_lookup(lookup(&[("POSTWATCH_API_URL", "ftp://api")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl("ftp://api".to_owned()));
}

#[test]
fn rejects_unparsable_api_url() {
    for raw in ["http://[", "http://", "https://a b"] {
        let err = ServerConfig::from_lookup(lookup(&[("POSTWATCH_API_URL", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidApiUrl(raw.to_owned()));
    }
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "99999")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("99999".to_owned()));
}
