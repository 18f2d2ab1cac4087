//! Optional RON configuration file for the gallery binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sources_core::DEFAULT_BASE_KEY;
use sources_engine::EngineConfig;
use thiserror::Error;

use super::logging::{LogDestination, LogLevel};

pub const DEFAULT_CONFIG_FILENAME: &str = "source_gallery.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding one JSON file per conversation scope.
    pub storage_dir: PathBuf,
    pub base_key: String,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".source_gallery"),
            base_key: DEFAULT_BASE_KEY.to_string(),
            log_destination: LogDestination::Terminal,
            log_level: LogLevel::Warn,
            log_file: PathBuf::from("source_gallery.log"),
        }
    }
}

impl AppConfig {
    /// Reads `path`, or the default file name when none is given.
    ///
    /// Only an explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
        };
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        Self::parse(&path, &content)
    }

    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            base_key: self.base_key.clone(),
            ..EngineConfig::with_directory(self.storage_dir.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sources_engine::StorageConfig;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let config = AppConfig::parse(
            Path::new("test.ron"),
            r#"(storage_dir: "/tmp/gallery", log_level: Debug)"#,
        )
        .unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/tmp/gallery"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.base_key, DEFAULT_BASE_KEY);
        assert_eq!(config.log_destination, LogDestination::Terminal);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = AppConfig::parse(Path::new("bad.ron"), "(storage_dir: 42").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_default_file_falls_back_but_explicit_one_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope.ron");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));

        let path = temp.path().join("gallery.ron");
        fs::write(&path, r#"(base_key: "custom")"#).unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.base_key, "custom");
        assert_eq!(
            config.engine_config().storage,
            StorageConfig::Directory(PathBuf::from(".source_gallery"))
        );
    }
}
