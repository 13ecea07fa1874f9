use log::{info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Built-in configuration. Files on disk only need to carry the keys they override.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

pub const CONFIG_ENV: &str = "CSR_CONFIG";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub database_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub root_dir: PathBuf,
    pub public_prefix: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}

/// Loads the configuration from `$CSR_CONFIG`, then `./config.toml`, then the built-in default.
pub fn load_config() -> Result<Config, ConfigError> {
    let explicit = std::env::var(CONFIG_ENV).ok().map(PathBuf::from);
    let path = explicit.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    if path.exists() {
        info!("Loading configuration from {}", path.display());
        return load_from_file(&path);
    }
    if explicit.is_some() {
        warn!("{} points to missing file {}", CONFIG_ENV, path.display());
    }
    info!("Using built-in default configuration");
    parse_config("")
}

fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Parses `overrides` on top of the built-in default, section by section.
pub fn parse_config(overrides: &str) -> Result<Config, ConfigError> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: toml::Table = toml::from_str(overrides)?;

    for (section, value) in overrides {
        match (merged.get_mut(&section), value) {
            (Some(toml::Value::Table(base)), toml::Value::Table(patch)) => {
                for (key, value) in patch {
                    base.insert(key, value);
                }
            }
            (_, value) => {
                merged.insert(section, value);
            }
        }
    }

    Ok(toml::Value::Table(merged).try_into()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn built_in_default_parses() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.open_browser);
        assert_eq!(config.storage.public_prefix, "/storage");
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_replace_single_keys() {
        let config = parse_config("[server]\nport = 9000\nopen_browser = false\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.open_browser);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store.database_path, PathBuf::from("data/csr.sqlite3"));
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(matches!(parse_config("[server]\nport = \"eighty\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nroot_dir = \"/srv/blobs\"\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.storage.root_dir, PathBuf::from("/srv/blobs"));
        assert_eq!(config.storage.public_prefix, "/storage");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
