use crate::storage::{ensure_dir, write_json_atomic};
use crate::utils::error::{AppError, AppResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const KEY_USERNAME: &str = "username";
pub const KEY_AUTH_TOKEN: &str = "auth_token";
pub const KEY_TIME: &str = "time";
pub const KEY_COMMENT: &str = "comment";
pub const KEY_BASE_URL: &str = "base_url";
pub const KEY_TIMEOUT: &str = "timeout";

pub const DEFAULT_COMMENT: &str = "upload from beetimer";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Flat string settings persisted as a single JSON object.
#[derive(Debug, Clone, Default)]
pub struct Config {
    values: BTreeMap<String, String>,
    path: PathBuf,
}

/// Username and token used against the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub auth_token: String,
}

impl Config {
    /// Directory holding the config file and the timer files.
    pub fn default_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("BEETIMER_CONFIG_DIR")
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("beetimer")
    }

    pub fn load_from_dir(dir: &Path) -> AppResult<Self> {
        Self::load_custom(&dir.join(CONFIG_FILE_NAME))
    }

    /// Read the config at `config_path`, creating an empty one when missing.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                ensure_dir(parent)?;
            }
            let config = Config {
                values: BTreeMap::new(),
                path: config_path.to_path_buf(),
            };
            config.save()?;
            debug!(path = %config_path.display(), "created empty config");
            return Ok(config);
        }

        let content = std::fs::read_to_string(config_path).map_err(|e| {
            AppError::Storage(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let values = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content).map_err(|e| {
                AppError::Storage(format!(
                    "Failed to parse config file {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        };

        debug!(path = %config_path.display(), "config loaded");
        Ok(Config {
            values,
            path: config_path.to_path_buf(),
        })
    }

    pub fn save(&self) -> AppResult<()> {
        write_json_atomic(&self.path, &self.values)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge `pairs` into the settings and rewrite the file.
    pub fn set<I, K, V>(&mut self, pairs: I) -> AppResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.values.insert(key.into(), value.into());
        }
        self.save()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_all(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Default time format for new timers
    pub fn time_format(&self) -> Option<&str> {
        self.get(KEY_TIME).filter(|v| !v.is_empty())
    }

    pub fn comment(&self) -> &str {
        self.get(KEY_COMMENT).unwrap_or(DEFAULT_COMMENT)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.get(KEY_BASE_URL).filter(|v| !v.is_empty())
    }

    pub fn timeout(&self) -> AppResult<Duration> {
        match self.get(KEY_TIMEOUT) {
            None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    AppError::InvalidInput(format!("timeout '{}' is not a number of seconds", raw))
                }),
        }
    }

    /// Stored credentials. The token may come from `BEETIMER_AUTH_TOKEN`.
    pub fn credentials(&self) -> AppResult<Credentials> {
        let username = self
            .get(KEY_USERNAME)
            .filter(|v| !v.is_empty())
            .ok_or(AppError::ConfigMissingCredentials)?;

        let auth_token = self
            .get(KEY_AUTH_TOKEN)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .or_else(get_auth_token_env)
            .ok_or(AppError::ConfigMissingCredentials)?;

        Ok(Credentials {
            username: username.to_string(),
            auth_token,
        })
    }
}

pub fn get_auth_token_env() -> Option<String> {
    std::env::var("BEETIMER_AUTH_TOKEN")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Parse `k:v,k2:v2`. Each pair splits on its first `:`, so values may
/// themselves contain colons.
pub fn parse_pairs(input: &str) -> AppResult<Vec<(String, String)>> {
    input
        .split(',')
        .map(|pair| {
            let (key, value) = pair.split_once(':').ok_or_else(|| {
                AppError::InvalidInput(format!("'{}' is not a key:value pair", pair.trim()))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "'{}' has an empty key",
                    pair.trim()
                )));
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}
