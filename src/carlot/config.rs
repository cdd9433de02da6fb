use crate::error::{CarlotError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "carlot.json";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

pub const DATA_FILE_ENV: &str = "CARLOT_DATA";
pub const BIND_ENV: &str = "CARLOT_BIND";

/// Configuration for carlot, stored in `carlot.json` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarlotConfig {
    /// Path of the car file, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Address the HTTP server listens on
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for CarlotConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            bind: default_bind(),
        }
    }
}

/// Keys accepted by `carlot config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataFile,
    Bind,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::DataFile, ConfigKey::Bind];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DataFile => "data-file",
            ConfigKey::Bind => "bind",
        }
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = CarlotError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| CarlotError::Config(format!("Unknown config key: {}", s)))
    }
}

impl CarlotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CarlotError::Io)?;
        let config: CarlotConfig =
            serde_json::from_str(&content).map_err(CarlotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CarlotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CarlotError::Serialization)?;
        fs::write(config_path, content).map_err(CarlotError::Io)?;
        Ok(())
    }

    /// Apply `CARLOT_DATA` / `CARLOT_BIND` on top of the file values.
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var_os(DATA_FILE_ENV).map(PathBuf::from),
            std::env::var(BIND_ENV).ok(),
        )
    }

    /// Replace values that were given explicitly (CLI flags, environment).
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, bind: Option<String>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(bind) = bind {
            self.bind = bind;
        }
        self
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DataFile => self.data_file.display().to_string(),
            ConfigKey::Bind => self.bind.clone(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CarlotError::Config(format!(
                "{} cannot be empty",
                key.name()
            )));
        }
        match key {
            ConfigKey::DataFile => self.data_file = PathBuf::from(value),
            ConfigKey::Bind => {
                parse_bind(value)?;
                self.bind = value.to_string();
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        parse_bind(&self.bind)
    }
}

fn parse_bind(value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .map_err(|_| CarlotError::Config(format!("Invalid bind address: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CarlotConfig::default();
        assert_eq!(config.data_file, PathBuf::from("cars.txt"));
        assert_eq!(config.bind, "127.0.0.1:8080");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = CarlotConfig::load(dir.path()).unwrap();
        assert_eq!(config, CarlotConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = CarlotConfig::default();
        config.set(ConfigKey::DataFile, "fleet/cars.txt").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = CarlotConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("fleet/cars.txt"));
        assert_eq!(loaded.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"bind":"0.0.0.0:9000"}"#).unwrap();

        let config = CarlotConfig::load(dir.path()).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.data_file, PathBuf::from("cars.txt"));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = CarlotConfig::default().with_overrides(Some("other.txt".into()), None);
        assert_eq!(config.data_file, PathBuf::from("other.txt"));
        assert_eq!(config.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_bind_must_be_a_socket_address() {
        let mut config = CarlotConfig::default();
        assert!(config.set(ConfigKey::Bind, "localhost").is_err());
        config.set(ConfigKey::Bind, "0.0.0.0:3000").unwrap();
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_key_names() {
        assert_eq!("data-file".parse::<ConfigKey>().unwrap(), ConfigKey::DataFile);
        assert_eq!("bind".parse::<ConfigKey>().unwrap(), ConfigKey::Bind);
        assert!("file-ext".parse::<ConfigKey>().is_err());
    }
}
