//! Build-time client configuration.
//!
//! The API base URL is baked into the bundle when it is compiled, read from
//! the `API_BASE_URL` environment variable of the build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend address used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://backend:5001/api";

/// Base URL of the campaign backend for this build.
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("API_BASE_URL"))
}

fn resolve_api_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
