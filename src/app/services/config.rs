use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

/// Read-only startup configuration.
/// Article parameters are never stored here; they live only in memory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Text file to open instead of the bundled sample article
    #[serde(default)]
    pub article_path: Option<PathBuf>,

    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_window_width() -> i32 {
    1280
}

fn default_window_height() -> i32 {
    800
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            article_path: None,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Load the config from its default location.
    /// A missing or malformed file yields defaults; the error is returned
    /// alongside so the caller can log it once tracing is up.
    pub fn load() -> (Self, Option<AppError>) {
        let path = Self::get_config_path();
        if !path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(&path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(AppError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("article-reader");
        path.push("config.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 800);
        assert!(config.article_path.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_partial_config() {
        let file = write_config(r#"{"window_width": 900}"#);
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.window_width, 900);
        assert_eq!(config.window_height, 800);
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"{
                "window_width": 1000,
                "window_height": 700,
                "article_path": "/tmp/article.txt",
                "log_filter": "article_reader=debug"
            }"#,
        );
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.article_path, Some(PathBuf::from("/tmp/article.txt")));
        assert_eq!(config.log_filter.as_deref(), Some("article_reader=debug"));
    }

    #[test]
    fn test_malformed_config_is_json_error() {
        let file = write_config("{ not json");
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_non_positive_window_is_rejected() {
        let file = write_config(r#"{"window_height": 0}"#);
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_config_path_ends_with_app_dir() {
        let path = AppConfig::get_config_path();
        assert!(path.ends_with("article-reader/config.json"));
    }
}
