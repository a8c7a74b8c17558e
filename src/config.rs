//! Configuration types for report-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Login credentials
///
/// Provided once at startup and never persisted by the library. The `Debug`
/// impl redacts the password so credentials can appear in log lines safely.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email, submitted as the `user[email]` form field
    pub email: String,
    /// Account password, submitted as the `user[password]` form field
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Main configuration for [`BatchRunner`](crate::batch::BatchRunner)
///
/// All fields except `credentials` have sensible defaults pointing at the
/// Fulcrum production endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Login page URL (default: Fulcrum sign-in)
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Report-generation endpoint, parameterized per record via
    /// `?report[record_id]=<id>` (default: Fulcrum report generator)
    #[serde(default = "default_reports_url")]
    pub reports_url: String,

    /// Parent directory the per-run output directory is created under
    /// (default: ".")
    #[serde(default = "default_output_parent")]
    pub output_parent: PathBuf,

    /// Maximum concurrent downloads (None = unbounded fan-out)
    ///
    /// The original behavior launches every job at once, bounded only by the
    /// transport's connection pool. Set this to cap simultaneous connections
    /// for very large record lists.
    #[serde(default)]
    pub max_concurrent_downloads: Option<usize>,

    /// Per-request timeout (None = transport default)
    #[serde(default)]
    pub request_timeout: Option<Duration>,

    /// Login credentials
    pub credentials: Credentials,
}

impl Config {
    /// Build a config with defaults for everything but the credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            login_url: default_login_url(),
            reports_url: default_reports_url(),
            output_parent: default_output_parent(),
            max_concurrent_downloads: None,
            request_timeout: None,
            credentials,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks that both endpoint URLs parse and that the concurrency cap,
    /// when set, is nonzero.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.login_url).map_err(|e| Error::Config {
            message: format!("invalid login URL '{}': {}", self.login_url, e),
            key: Some("login_url".to_string()),
        })?;
        url::Url::parse(&self.reports_url).map_err(|e| Error::Config {
            message: format!("invalid reports URL '{}': {}", self.reports_url, e),
            key: Some("reports_url".to_string()),
        })?;
        if self.max_concurrent_downloads == Some(0) {
            return Err(Error::Config {
                message: "max_concurrent_downloads must be at least 1 when set".to_string(),
                key: Some("max_concurrent_downloads".to_string()),
            });
        }
        Ok(())
    }
}

fn default_login_url() -> String {
    "https://web.fulcrumapp.com/users/sign_in".to_string()
}

fn default_reports_url() -> String {
    "https://web.fulcrumapp.com/reports/generate".to_string()
}

fn default_output_parent() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::new(Credentials::new("user@example.com", "hunter2"))
    }

    #[test]
    fn test_defaults() {
        let config = test_config();
        assert_eq!(config.login_url, "https://web.fulcrumapp.com/users/sign_in");
        assert_eq!(
            config.reports_url,
            "https://web.fulcrumapp.com/reports/generate"
        );
        assert_eq!(config.output_parent, PathBuf::from("."));
        assert!(config.max_concurrent_downloads.is_none());
        assert!(config.request_timeout.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", test_config().credentials);
        assert!(debug.contains("user@example.com"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = test_config();
        config.login_url = "not a url".to_string();
        let err = config.validate().unwrap_err();
        match err {
            crate::error::Error::Config { key, .. } => {
                assert_eq!(key.as_deref(), Some("login_url"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let mut config = test_config();
        config.max_concurrent_downloads = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "login_url": "https://example.com/users/sign_in",
                "credentials": {"email": "a@b.com", "password": "pw"}
            }"#,
        )
        .unwrap();

        let config = Config::from_json_file(&path).unwrap();
        assert_eq!(config.login_url, "https://example.com/users/sign_in");
        // Unspecified fields fall back to defaults
        assert_eq!(
            config.reports_url,
            "https://web.fulcrumapp.com/reports/generate"
        );
        assert_eq!(config.credentials.email, "a@b.com");
    }
}
