//! Configuration loading: optional TOML file, then environment overrides.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::listview::schema::DEFAULT_PAGE_SIZE;

pub const DEFAULT_CONFIG_FILE: &str = "backoffice.toml";
pub const DEFAULT_API_URL: &str = "https://triptournow.com/api/V1";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://triptournow.com/public/images/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// On-disk shape. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub bind: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub image_base_url: Option<String>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
    #[serde(default)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub api_url: String,
    pub api_token: Option<String>,
    pub image_base_url: String,
    pub page_size: usize,
    pub workers: usize,
    pub http_timeout: Duration,
    pub log_filter: String,
}

/// Read `BACKOFFICE_CONFIG` (or `./backoffice.toml` if present) plus env vars.
pub fn load() -> Result<AppConfig, ConfigError> {
    let explicit = std::env::var_os("BACKOFFICE_CONFIG").map(PathBuf::from);
    let file = match explicit {
        Some(path) => Some(read_file(&path)?),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                Some(read_file(default)?)
            } else {
                None
            }
        }
    };

    resolve(file.unwrap_or_default(), |key| std::env::var(key).ok())
}

pub fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_env<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

/// Env wins over file, file wins over defaults.
pub fn resolve(
    file: ConfigFile,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let bind_raw = env("BACKOFFICE_BIND")
        .or(file.bind)
        .unwrap_or_else(|| "127.0.0.1:3000".to_string());
    let bind = bind_raw
        .parse::<SocketAddr>()
        .map_err(|_| ConfigError::InvalidValue {
            key: "bind",
            value: bind_raw.clone(),
        })?;

    let api_url = env("BACKOFFICE_API_URL")
        .or(file.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url::Url::parse(&api_url).map_err(|_| ConfigError::InvalidValue {
        key: "api_url",
        value: api_url.clone(),
    })?;

    let api_token = env("BACKOFFICE_API_TOKEN")
        .or(file.api_token)
        .filter(|t| !t.trim().is_empty());

    let image_base_url = env("BACKOFFICE_IMAGE_BASE_URL")
        .or(file.image_base_url)
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());
    url::Url::parse(&image_base_url).map_err(|_| ConfigError::InvalidValue {
        key: "image_base_url",
        value: image_base_url.clone(),
    })?;

    let page_size = parse_env("page_size", env("BACKOFFICE_PAGE_SIZE"))?
        .or(file.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err(ConfigError::InvalidValue {
            key: "page_size",
            value: "0".into(),
        });
    }

    let workers = parse_env("workers", env("BACKOFFICE_WORKERS"))?
        .or(file.workers)
        .unwrap_or(8)
        .max(1);

    let timeout_secs = parse_env("http_timeout_secs", env("BACKOFFICE_HTTP_TIMEOUT_SECS"))?
        .or(file.http_timeout_secs)
        .unwrap_or(15);

    let log_filter = file.log_filter.unwrap_or_else(|| "info".to_string());

    Ok(AppConfig {
        bind,
        api_url,
        api_token,
        image_base_url,
        page_size,
        workers,
        http_timeout: Duration::from_secs(timeout_secs),
        log_filter,
    })
}
