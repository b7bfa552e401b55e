use agentops_types::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable overriding the default API URL.
pub const API_URL_ENV: &str = "AGENTOPS_API_URL";

/// Environment variable holding the API key for the direct CLI commands.
pub const API_KEY_ENV: &str = "AGENTOPS_API_KEY";

/// HTTP timeout applied when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional TOML config file. Every key may be omitted.
///
/// ```toml
/// api_url = "http://localhost:8000"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Effective settings for talking to the AgentOps API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_url: String,
    /// `0` disables the timeout.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Resolve settings from command-line values, the environment and an
    /// optional config file.
    pub fn resolve(
        explicit_url: Option<&str>,
        explicit_timeout: Option<u64>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::default(),
        };
        let env_url = std::env::var(API_URL_ENV).ok();

        Ok(Self::merge(
            explicit_url,
            env_url.as_deref(),
            explicit_timeout,
            file,
        ))
    }

    /// API URL priority:
    /// 1. Explicit value (command line)
    /// 2. AGENTOPS_API_URL environment variable
    /// 3. Config file
    /// 4. Production endpoint
    ///
    /// Blank values are skipped.
    pub fn merge(
        explicit_url: Option<&str>,
        env_url: Option<&str>,
        explicit_timeout: Option<u64>,
        file: ConfigFile,
    ) -> Self {
        let api_url = [explicit_url, env_url, file.api_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let timeout_secs = explicit_timeout
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_merge_priority() {
        let file = ConfigFile {
            api_url: Some("http://from-file".to_string()),
            timeout_secs: Some(5),
        };

        let config = ApiConfig::merge(
            Some("http://explicit"),
            Some("http://env"),
            None,
            file.clone(),
        );
        assert_eq!(config.api_url, "http://explicit");
        assert_eq!(config.timeout_secs, 5);

        let config = ApiConfig::merge(None, Some("http://env"), Some(0), file.clone());
        assert_eq!(config.api_url, "http://env");
        assert_eq!(config.timeout(), None);

        let config = ApiConfig::merge(None, Some("  "), None, file);
        assert_eq!(config.api_url, "http://from-file");

        let config = ApiConfig::merge(None, None, None, ConfigFile::default());
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_url = \"http://localhost:8000\"\ntimeout_secs = 10").unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.timeout_secs, Some(10));
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"soon\"").unwrap();

        let err = ConfigFile::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let missing = ConfigFile::load_from(Path::new("/nonexistent/agentops.toml"));
        assert!(matches!(missing, Err(Error::Config(_))));
    }
}
