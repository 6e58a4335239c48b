//! Configuration types for PDMS

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Client configuration (config.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Base URL of the REST backend
    pub api_base_url: String,

    /// Timeout applied to backend requests
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Where the session entries are persisted; defaults to
    /// `.pdms/session.json` in the working directory
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: default_timeout_secs(),
            session_file: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolved session file path
    pub fn session_file(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(".pdms/session.json"))
    }
}

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn info(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn warn(&self, message: &str, meta: Option<&HashMap<String, String>>);
    fn error(&self, message: &str, meta: Option<&HashMap<String, String>>);
}

/// Simple console logger implementation
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[DEBUG] {}", message);
    }

    fn info(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[INFO] {}", message);
    }

    fn warn(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[WARN] {}", message);
    }

    fn error(&self, message: &str, _meta: Option<&HashMap<String, String>>) {
        eprintln!("[ERROR] {}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn info(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn warn(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
    fn error(&self, _message: &str, _meta: Option<&HashMap<String, String>>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "apiBaseUrl": "https://pdms.mcc.in/api",
            "requestTimeoutSecs": 10
        }"#;

        let config: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_base_url, "https://pdms.mcc.in/api");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.session_file(), PathBuf::from(".pdms/session.json"));
    }

    #[test]
    fn test_config_defaults() {
        let json = r#"{ "apiBaseUrl": "http://localhost:8000" }"#;
        let config: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_explicit_session_file_wins() {
        let config = DashboardConfig {
            session_file: Some(PathBuf::from("/tmp/session.json")),
            ..Default::default()
        };
        assert_eq!(config.session_file(), PathBuf::from("/tmp/session.json"));
    }
}
