//! Client configuration baked in at compile time.
//!
//! Variables (read with `option_env!` when the WASM bundle is built):
//! - `GOBARBER_API_URL`: backend base URL, default `http://localhost:3333`
//! - `GOBARBER_STORAGE_NAMESPACE`: localStorage key prefix, default `@GoBarber`
//! - `GOBARBER_TOAST_TIMEOUT_MS`: toast auto-dismiss delay, default 3000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_NAMESPACE: &str = "@GoBarber";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_namespace: String,
    pub toast_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_owned(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GOBARBER_API_URL"),
            option_env!("GOBARBER_STORAGE_NAMESPACE"),
            option_env!("GOBARBER_TOAST_TIMEOUT_MS"),
        )
    }

    /// Build config from raw optional values, falling back to defaults for
    /// anything absent, blank or unparsable.
    #[must_use]
    pub fn from_values(api_url: Option<&str>, namespace: Option<&str>, toast_timeout_ms: Option<&str>) -> Self {
        let api_base_url = non_blank(api_url).map_or_else(|| DEFAULT_API_URL.to_owned(), normalize_base_url);
        let storage_namespace = non_blank(namespace).unwrap_or(DEFAULT_STORAGE_NAMESPACE).to_owned();
        let toast_timeout_ms = toast_timeout_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS);
        Self { api_base_url, storage_namespace, toast_timeout_ms }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Strip trailing slashes so paths can be appended with a single `/`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
