use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.graphql_upstream, DEFAULT_GRAPHQL_UPSTREAM);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("GRAPHQL_UPSTREAM", "http://localhost:4000/"),
        ("UPSTREAM_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.graphql_upstream, "http://localhost:4000");
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
}

#[test]
fn from_lookup_blank_values_use_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", ""), ("GRAPHQL_UPSTREAM", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.graphql_upstream, DEFAULT_GRAPHQL_UPSTREAM);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn from_lookup_invalid_timeout_errors() {
    let err = HostConfig::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_non_http_upstream() {
    let err = HostConfig::from_lookup(lookup_from(&[("GRAPHQL_UPSTREAM", "ftp://example.test")])).unwrap_err();
    assert_eq!(err, ConfigError::UpstreamScheme("ftp://example.test".into()));
}

#[test]
fn graphql_url_appends_path() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("GRAPHQL_UPSTREAM", "https://api.example.test///")])).unwrap();
    assert_eq!(cfg.graphql_url(), "https://api.example.test/graphql");
}

