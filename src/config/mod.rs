//! Configuration for pinpost.
//!
//! Configuration is an explicit value threaded into the components that
//! need it, never ambient lookups scattered through the call path. Sources,
//! in precedence order:
//!
//! 1. Environment variables (`PINBOARD_API_TOKEN`, `ANTHROPIC_API_KEY`,
//!    `PINPOST_MODEL`, `PINPOST_MAX_TOKENS`, `PINPOST_ANTHROPIC_BASE_URL`,
//!    `PINPOST_PINBOARD_BASE_URL`)
//! 2. `~/.pinpost/config.yaml` (optional)
//! 3. Built-in defaults
//!
//! A `.env` file in the working directory, or `~/.pinpost/.env`, is loaded
//! into the environment first, so the file contents participate in step 1.
//!
//! Credentials are validated at the point of use: `add --dry-run` needs
//! only the Anthropic key, a real `add` needs both, and `config` needs
//! neither.

use crate::error::{PinpostError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_model() -> String {
    "claude-sonnet-4-0".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_pinboard_base_url() -> String {
    "https://api.pinboard.in/v1".to_string()
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pinboard API token, `username:hexstring`.
    pub pinboard_api_token: Option<String>,

    /// Anthropic API key.
    pub anthropic_api_key: Option<String>,

    /// Model id sent to the Messages API.
    pub model: String,

    /// Output-token ceiling for the extraction call.
    pub max_tokens: u32,

    /// Anthropic endpoint; overridable so tests can point at a stub server.
    pub anthropic_base_url: String,

    /// Pinboard endpoint; overridable for the same reason.
    pub pinboard_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pinboard_api_token: None,
            anthropic_api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            anthropic_base_url: default_anthropic_base_url(),
            pinboard_base_url: default_pinboard_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from the `.env` file, the YAML config file, and
    /// the process environment.
    pub fn load() -> Result<Self> {
        load_env_file();

        let mut config = match config_file_path() {
            Some(path) => Self::load_file(&path)?.unwrap_or_default(),
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read a YAML config file.
    ///
    /// Returns `Ok(None)` if the file does not exist; a file that exists but
    /// cannot be parsed is an error.
    pub fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PinpostError::User(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Some(Self::from_yaml(&content)?))
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PinpostError::User(format!("failed to parse config.yaml: {}", e)))
    }

    /// Apply environment overrides through an injectable lookup, so tests
    /// never have to mutate process environment.
    pub fn apply_env_overrides<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = get("PINBOARD_API_TOKEN") {
            self.pinboard_api_token = Some(token);
        }
        if let Some(key) = get("ANTHROPIC_API_KEY") {
            self.anthropic_api_key = Some(key);
        }
        if let Some(model) = get("PINPOST_MODEL") {
            self.model = model;
        }
        if let Some(max_tokens) = get("PINPOST_MAX_TOKENS")
            && let Ok(parsed) = max_tokens.parse()
        {
            self.max_tokens = parsed;
        }
        if let Some(url) = get("PINPOST_ANTHROPIC_BASE_URL") {
            self.anthropic_base_url = url;
        }
        if let Some(url) = get("PINPOST_PINBOARD_BASE_URL") {
            self.pinboard_base_url = url;
        }
    }

    /// The Pinboard token, or a user error explaining how to set it.
    pub fn require_pinboard_token(&self) -> Result<&str> {
        self.pinboard_api_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                PinpostError::User(
                    "PINBOARD_API_TOKEN not set.\n\
                     Fix: export PINBOARD_API_TOKEN=your_username:your_token, or add\n\
                     pinboard_api_token to ~/.pinpost/config.yaml."
                        .to_string(),
                )
            })
    }

    /// The Anthropic key, or a user error explaining how to set it.
    pub fn require_anthropic_key(&self) -> Result<&str> {
        self.anthropic_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PinpostError::User(
                    "ANTHROPIC_API_KEY not set.\n\
                     Fix: export ANTHROPIC_API_KEY=sk-ant-..., or add\n\
                     anthropic_api_key to ~/.pinpost/config.yaml."
                        .to_string(),
                )
            })
    }

    /// The username half of the Pinboard token, for display.
    pub fn pinboard_user(&self) -> Option<&str> {
        self.pinboard_api_token
            .as_deref()
            .map(|t| t.split(':').next().unwrap_or(t))
    }
}

/// Load `.env` from the working directory, falling back to `~/.pinpost/.env`.
/// Best-effort: a missing or unreadable file is simply skipped.
fn load_env_file() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    if let Some(path) = pinpost_dir().map(|d| d.join(".env")) {
        let _ = dotenvy::from_path(&path);
    }
}

/// `~/.pinpost`, the directory holding config, `.env`, and the event log.
pub fn pinpost_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".pinpost"))
}

/// Path of the optional YAML config file.
pub fn config_file_path() -> Option<PathBuf> {
    pinpost_dir().map(|d| d.join("config.yaml"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Mask a secret for display, keeping only a short prefix.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 6 {
        "*".repeat(count)
    } else {
        let prefix: String = secret.chars().take(6).collect();
        format!("{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.model, "claude-sonnet-4-0");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.anthropic_base_url, "https://api.anthropic.com");
        assert_eq!(config.pinboard_base_url, "https://api.pinboard.in/v1");
        assert!(config.pinboard_api_token.is_none());
    }

    #[test]
    fn yaml_fields_are_read() {
        let config = Config::from_yaml(
            "pinboard_api_token: alice:abc123\nmodel: claude-3-haiku\nmax_tokens: 2048\n",
        )
        .unwrap();
        assert_eq!(config.pinboard_api_token.as_deref(), Some("alice:abc123"));
        assert_eq!(config.model, "claude-3-haiku");
        assert_eq!(config.max_tokens, 2048);
    }

    #[test]
    fn malformed_yaml_is_a_user_error() {
        let err = Config::from_yaml("model: [unterminated").unwrap_err();
        assert!(matches!(err, PinpostError::User(_)));
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let mut config = Config::from_yaml("model: from-file\n").unwrap();
        let env: HashMap<&str, &str> = HashMap::from([
            ("PINPOST_MODEL", "from-env"),
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("PINPOST_MAX_TOKENS", "4096"),
        ]);
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.model, "from-env");
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-ant-test"));
        assert_eq!(config.max_tokens, 4096);
    }

    #[test]
    fn unset_env_leaves_file_values_alone() {
        let mut config = Config::from_yaml("model: from-file\n").unwrap();
        config.apply_env_overrides(|_| None);
        assert_eq!(config.model, "from-file");
    }

    #[test]
    fn unparseable_max_tokens_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| {
            (key == "PINPOST_MAX_TOKENS").then(|| "not-a-number".to_string())
        });
        assert_eq!(config.max_tokens, default_max_tokens());
    }

    #[test]
    fn missing_credentials_produce_actionable_errors() {
        let config = Config::default();

        let err = config.require_pinboard_token().unwrap_err();
        assert!(err.to_string().contains("PINBOARD_API_TOKEN"));

        let err = config.require_anthropic_key().unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let config = Config {
            pinboard_api_token: Some("   ".to_string()),
            ..Config::default()
        };
        assert!(config.require_pinboard_token().is_err());
    }

    #[test]
    fn pinboard_user_is_the_token_prefix() {
        let config = Config {
            pinboard_api_token: Some("alice:abc123".to_string()),
            ..Config::default()
        };
        assert_eq!(config.pinboard_user(), Some("alice"));
    }

    #[test]
    fn mask_secret_hides_the_tail() {
        assert_eq!(mask_secret("sk-ant-api03-abcdef"), "sk-ant...");
        assert_eq!(mask_secret("short"), "*****");
    }

    #[test]
    fn load_file_returns_none_for_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        assert!(Config::load_file(&path).unwrap().is_none());
    }

    #[test]
    fn load_file_reads_an_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "model: from-disk\n").unwrap();

        let config = Config::load_file(&path).unwrap().unwrap();
        assert_eq!(config.model, "from-disk");
    }

    #[test]
    #[serial]
    fn load_picks_up_process_environment() {
        // Touches real process environment, so it runs serialized.
        unsafe { std::env::set_var("PINPOST_MODEL", "env-model") };
        let config = Config::load().unwrap();
        unsafe { std::env::remove_var("PINPOST_MODEL") };

        assert_eq!(config.model, "env-model");
    }
}
