//
//  community-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Configuration comes in two layers:
//!
//! - [`Config`]: the persisted TOML file with general settings and one entry
//!   per community instance the user talks to
//! - [`ClientConfig`]: the explicit base URL and credential a
//!   [`CommunityClient`](crate::api::CommunityClient) is constructed with
//!
//! Library users can build a [`ClientConfig`] directly and never touch the
//! file. The `community` binary resolves one from command-line flags,
//! environment variables and the file, in that order of precedence.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/community/config.toml`
//! - **macOS**: `~/Library/Application Support/community/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\community\config.toml`
//!
//! `COMMUNITY_CONFIG` overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! default_host = "community.example.com"
//! output = "table"
//!
//! [hosts."community.example.com"]
//! url = "https://community.example.com"
//! username = "jdoe"
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `COMMUNITY_URL` | `hosts.<name>.url` |
//! | `COMMUNITY_USERNAME` | `hosts.<name>.username` |
//! | `COMMUNITY_PASSWORD` | `hosts.<name>.password` |

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::Credential;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "COMMUNITY_CONFIG";
/// Environment variable overriding the community URL.
pub const URL_ENV: &str = "COMMUNITY_URL";
/// Environment variable overriding the username.
pub const USERNAME_ENV: &str = "COMMUNITY_USERNAME";
/// Environment variable supplying the password.
pub const PASSWORD_ENV: &str = "COMMUNITY_PASSWORD";

/// Persisted configuration.
///
/// # Example
///
/// ```rust
/// use community_sdk::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.core.output, "table");
/// assert!(config.hosts.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub core: CoreConfig,

    /// Community instances keyed by host name.
    #[serde(default)]
    pub hosts: BTreeMap<String, HostConfig>,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Host used when no `--host` is given.
    #[serde(default)]
    pub default_host: Option<String>,

    /// Default output format: `table` or `json`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_host: None,
            output: default_output(),
        }
    }
}

/// Settings for one community instance.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    /// Site or REST API URL of the instance.
    pub url: String,

    /// Username to authenticate as.
    #[serde(default)]
    pub username: Option<String>,

    /// Password. Prefer `COMMUNITY_PASSWORD` over storing it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, defaulting when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        let dirs = ProjectDirs::from("", "", "community")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the configuration for a host, matching on normalized names.
    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(&normalize_host(host))
    }

    /// Adds or replaces a host entry, keyed by its normalized name.
    pub fn set_host(&mut self, host: &str, config: HostConfig) {
        self.hosts.insert(normalize_host(host), config);
    }

    /// Picks the host to use when none is named explicitly.
    ///
    /// The configured default wins; otherwise a sole configured host is used.
    pub fn default_host(&self) -> Option<&str> {
        if let Some(host) = &self.core.default_host {
            return Some(host);
        }
        if self.hosts.len() == 1 {
            return self.hosts.keys().next().map(String::as_str);
        }
        None
    }

    /// Reads a core setting by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_host" => self.core.default_host.clone(),
            "output" => Some(self.core.output.clone()),
            _ => None,
        }
    }

    /// Sets a core setting by key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "default_host" => {
                self.core.default_host = Some(normalize_host(&value));
                true
            }
            "output" => {
                self.core.output = value;
                true
            }
            _ => false,
        }
    }
}

/// Values supplied explicitly, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Everything a [`CommunityClient`](crate::api::CommunityClient) needs.
///
/// # Example
///
/// ```rust
/// use community_sdk::config::ClientConfig;
///
/// let config = ClientConfig::new("https://community.example.com", "jdoe", "s3cret");
/// assert_eq!(config.base_url, "https://community.example.com/api/core/v3");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// REST API base URL.
    pub base_url: String,
    /// Username to authenticate as.
    pub username: String,
    password: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    /// Creates a configuration; `url` may be the site root or the API base.
    pub fn new(url: &str, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: api_base_url(url),
            username: username.into(),
            password: password.into(),
        }
    }

    /// The credential described by this configuration.
    pub fn credential(&self) -> Credential {
        Credential::new(self.username.clone(), self.password.clone())
    }

    /// Resolves a configuration from overrides, the environment and `config`.
    pub fn resolve(config: &Config, overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(config, overrides, |name| std::env::var(name).ok())
    }

    /// Like [`resolve`](Self::resolve) with an explicit environment lookup.
    ///
    /// Precedence per setting: `overrides`, then `env`, then the host entry.
    pub fn resolve_with<F>(config: &Config, overrides: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| env(name).filter(|v| !v.is_empty());

        let host_name = overrides
            .host
            .clone()
            .or_else(|| config.default_host().map(str::to_string));
        let host = match &host_name {
            Some(name) => config.host_config(name),
            None => None,
        };

        if let (Some(name), None) = (&host_name, host) {
            if overrides.host.is_some() && overrides.url.is_none() && env(URL_ENV).is_none() {
                bail!("Host '{}' is not configured. Run 'community config set-host' first.", name);
            }
        }

        let url = overrides
            .url
            .clone()
            .or_else(|| env(URL_ENV))
            .or_else(|| host.map(|h| h.url.clone()).filter(|u| !u.is_empty()));
        let username = overrides
            .username
            .clone()
            .or_else(|| env(USERNAME_ENV))
            .or_else(|| host.and_then(|h| h.username.clone()));
        let password = overrides
            .password
            .clone()
            .or_else(|| env(PASSWORD_ENV))
            .or_else(|| host.and_then(|h| h.password.clone()));

        let Some(url) = url else {
            bail!("No community URL configured. Pass --url, set {} or run 'community config set-host'.", URL_ENV);
        };
        let Some(username) = username else {
            bail!("No username configured. Pass --username or set {}.", USERNAME_ENV);
        };
        let Some(password) = password else {
            bail!("No password configured. Set {}.", PASSWORD_ENV);
        };

        Ok(Self::new(&url, username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn sample_config() -> Config {
        let mut config = Config::default();
        config.set_host(
            "community.example.com",
            HostConfig {
                url: "https://community.example.com".to_string(),
                username: Some("jdoe".to_string()),
                password: Some("from-file".to_string()),
            },
        );
        config
    }

    #[test]
    fn test_resolve_from_sole_host() {
        let resolved =
            ClientConfig::resolve_with(&sample_config(), &Overrides::default(), no_env).unwrap();
        assert_eq!(resolved.base_url, "https://community.example.com/api/core/v3");
        assert_eq!(resolved.username, "jdoe");
        assert_eq!(resolved.credential(), Credential::new("jdoe", "from-file"));
    }

    #[test]
    fn test_env_beats_file_and_flags_beat_env() {
        let env = |name: &str| match name {
            PASSWORD_ENV => Some("from-env".to_string()),
            USERNAME_ENV => Some("env-user".to_string()),
            _ => None,
        };
        let overrides = Overrides {
            username: Some("flag-user".to_string()),
            ..Default::default()
        };
        let resolved = ClientConfig::resolve_with(&sample_config(), &overrides, env).unwrap();
        assert_eq!(resolved.username, "flag-user");
        assert_eq!(resolved.credential(), Credential::new("flag-user", "from-env"));
    }

    #[test]
    fn test_missing_password_is_an_error() {
        let mut config = sample_config();
        config.hosts.values_mut().for_each(|h| h.password = None);
        let error = ClientConfig::resolve_with(&config, &Overrides::default(), no_env).unwrap_err();
        assert!(error.to_string().contains(PASSWORD_ENV));
    }

    #[test]
    fn test_unknown_host_is_an_error() {
        let overrides = Overrides {
            host: Some("other.example.com".to_string()),
            ..Default::default()
        };
        let error = ClientConfig::resolve_with(&sample_config(), &overrides, no_env).unwrap_err();
        assert!(error.to_string().contains("other.example.com"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = sample_config();
        assert!(config.set("output", "json".to_string()));
        assert!(!config.set("colour", "never".to_string()));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.get("output").as_deref(), Some("json"));
        assert_eq!(
            loaded.host_config("HTTPS://Community.Example.com").map(|h| h.url.as_str()),
            Some("https://community.example.com")
        );
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let config = sample_config();
        assert!(!format!("{config:?}").contains("from-file"));
        let client = ClientConfig::new("https://x.example.com", "u", "secret");
        assert!(!format!("{client:?}").contains("secret"));
    }
}
