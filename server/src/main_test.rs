use super::*;

#[test]
fn leptos_error_is_not_prefixed_twice() {
    let err = ServerError::Leptos("leptos configuration: missing site root".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing site root");
}

#[test]
fn config_error_passes_through() {
    let err = ServerError::from(config::ConfigError::Invalid { var: "PORT", value: "x".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"x\"");
}
