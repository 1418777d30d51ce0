//! # Console configuration: `console.toml`
//!
//! The web binary embeds `console.toml` at build time and parses it with
//! [`ConsoleConfig::from_toml`]. Build-time environment variables then
//! override single fields through [`ConsoleConfig::apply_overrides`].
//!
//! ## Structure
//!
//! ```toml
//! [app]
//! name = "Exam Console"
//! log_level = "info"
//!
//! [api]
//! gateway_url = "http://localhost:5000"
//! iam_path = "/iam"
//! course_path = "/course"
//! timeout_ms = 30000
//!
//! [storage]
//! token_key = "auth_token"
//! refresh_token_key = "refresh_token"
//! session_key = "auth-store"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level document. |
//! | [`AppConfig`] | Display name and log level. |
//! | [`ApiConfig`] | Gateway URL, per-backend path prefixes, request timeout. |
//! | [`StorageConfig`] | `localStorage` keys for tokens and the session. |
//!
//! Every field has a default, so a missing or empty file is the default
//! configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variables that override configuration fields.
pub const ENV_OVERRIDES: [&str; 7] = [
    "EXAM_CONSOLE_API_GATEWAY_URL",
    "EXAM_CONSOLE_IAM_PATH",
    "EXAM_CONSOLE_COURSE_PATH",
    "EXAM_CONSOLE_TIMEOUT_MS",
    "EXAM_CONSOLE_TOKEN_KEY",
    "EXAM_CONSOLE_REFRESH_TOKEN_KEY",
    "EXAM_CONSOLE_LOG_LEVEL",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    /// Path prefix of the identity backend behind the gateway.
    #[serde(default = "default_iam_path")]
    pub iam_path: String,
    /// Path prefix of the course backend behind the gateway.
    #[serde(default = "default_course_path")]
    pub course_path: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_refresh_token_key")]
    pub refresh_token_key: String,
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_app_name() -> String {
    "Exam Console".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_gateway_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_iam_path() -> String {
    "/iam".to_string()
}

fn default_course_path() -> String {
    "/course".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_token_key() -> String {
    "auth_token".to_string()
}

fn default_refresh_token_key() -> String {
    "refresh_token".to_string()
}

fn default_session_key() -> String {
    "auth-store".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            iam_path: default_iam_path(),
            course_path: default_course_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            refresh_token_key: default_refresh_token_key(),
            session_key: default_session_key(),
        }
    }
}

impl ApiConfig {
    /// Base URL of the identity backend.
    pub fn iam_base_url(&self) -> String {
        join_url(&self.gateway_url, &self.iam_path)
    }

    /// Base URL of the course backend.
    pub fn course_base_url(&self) -> String {
        join_url(&self.gateway_url, &self.course_path)
    }

    /// Token refresh endpoint. Always served by the identity backend.
    pub fn refresh_url(&self) -> String {
        join_url(&self.iam_base_url(), "/api/auth/refresh")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ConsoleConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "console.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply overrides looked up by variable name (see [`ENV_OVERRIDES`]).
    /// Empty values and unparsable timeouts are ignored.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("EXAM_CONSOLE_API_GATEWAY_URL") {
            self.api.gateway_url = v;
        }
        if let Some(v) = get("EXAM_CONSOLE_IAM_PATH") {
            self.api.iam_path = v;
        }
        if let Some(v) = get("EXAM_CONSOLE_COURSE_PATH") {
            self.api.course_path = v;
        }
        if let Some(ms) = get("EXAM_CONSOLE_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
            self.api.timeout_ms = ms;
        }
        if let Some(v) = get("EXAM_CONSOLE_TOKEN_KEY") {
            self.storage.token_key = v;
        }
        if let Some(v) = get("EXAM_CONSOLE_REFRESH_TOKEN_KEY") {
            self.storage.refresh_token_key = v;
        }
        if let Some(v) = get("EXAM_CONSOLE_LOG_LEVEL") {
            self.app.log_level = v;
        }
        self
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.storage.token_key, "auth_token");
        assert_eq!(config.storage.refresh_token_key, "refresh_token");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_document() {
        let config = ConsoleConfig::from_toml(
            r#"
            [api]
            gateway_url = "https://gateway.uni.edu/"
            iam_path = "iam"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.iam_base_url(), "https://gateway.uni.edu/iam");
        assert_eq!(config.api.course_base_url(), "https://gateway.uni.edu/course");
        assert_eq!(
            config.api.refresh_url(),
            "https://gateway.uni.edu/iam/api/auth/refresh"
        );
        assert_eq!(config.app.name, "Exam Console");
    }

    #[test]
    fn test_overrides() {
        let config = ConsoleConfig::default().apply_overrides(|name| match name {
            "EXAM_CONSOLE_API_GATEWAY_URL" => Some("http://10.0.0.2:8000".to_string()),
            "EXAM_CONSOLE_TIMEOUT_MS" => Some("not-a-number".to_string()),
            "EXAM_CONSOLE_TOKEN_KEY" => Some("".to_string()),
            "EXAM_CONSOLE_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.api.gateway_url, "http://10.0.0.2:8000");
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.storage.token_key, "auth_token");
        assert_eq!(config.app.log_level, "debug");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ConsoleConfig::default();
        config.api.course_path = "/courses".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(ConsoleConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://a/", "/b"), "http://a/b");
        assert_eq!(join_url("http://a", "b/c"), "http://a/b/c");
        assert_eq!(join_url("http://a/", ""), "http://a");
    }
}
