//! Backend address resolution.

/// Default backend base URL when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Environment variable consulted for the backend base URL.
pub const BACKEND_URL_ENV: &str = "SLEEP_BACKEND_URL";

/// Resolves the backend base URL: explicit flag value wins, then the
/// environment variable, then the loopback default.
pub fn resolve_backend_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(BACKEND_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
