use directories::UserDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

pub const APP_NAME: &str = "rss-reader";
const DEFAULT_USER_AGENT: &str = concat!("rss-reader/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub limit: Option<i64>,
    pub json: Option<bool>,
}

impl Config {
    pub fn from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if given. Otherwise the default location is tried and a
    /// missing file there means an empty config.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Config::from(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Config::from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().join(".config").join(APP_NAME))
}

pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}-{}", APP_NAME, std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_all_keys() {
        let path = write_temp(
            "full.toml",
            "user_agent = \"bot/1\"\ntimeout_secs = 5\nlimit = 3\njson = true\n",
        );
        let config = Config::from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.user_agent(), "bot/1");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.limit, Some(3));
        assert_eq!(config.json, Some(true));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let path = write_temp("empty.toml", "");
        let config = Config::from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("rss-reader-does-not-exist.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let path = write_temp("bad.toml", "limit = \"many\"\n");
        let result = Config::from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }
}
