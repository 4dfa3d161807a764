//! Client Configuration
//!
//! Settings read from browser local storage at start-up.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// Default API base: same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "activity_board_api_url";
const LOG_LEVEL_KEY: &str = "activity_board_log_level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Load overrides from local storage, falling back to defaults
    pub fn load() -> Self {
        let api_base = read_storage(API_URL_KEY)
            .map(|url| normalize_base(&url))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let log_level = read_storage(LOG_LEVEL_KEY)
            .and_then(|level| parse_level(&level))
            .unwrap_or(LevelFilter::Info);
        Self { api_base, log_level }
    }
}

/// Persist an API base override. Exposed to the devtools console; takes
/// effect on the next page load.
#[wasm_bindgen(js_name = setActivityBoardApiUrl)]
pub fn set_api_base(url: &str) {
    write_storage(API_URL_KEY, &normalize_base(url));
}

/// Persist a log level override and apply it immediately.
/// Returns false for an unknown level.
#[wasm_bindgen(js_name = setActivityBoardLogLevel)]
pub fn set_log_level(level: &str) -> bool {
    match parse_level(level) {
        Some(filter) => {
            write_storage(LOG_LEVEL_KEY, &filter.to_string().to_lowercase());
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}

/// Trim whitespace and trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn write_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base("  https://api.example.org//  "), "https://api.example.org");
        assert_eq!(normalize_base("/"), "");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_default_is_same_origin() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
