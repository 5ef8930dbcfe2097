//! Application configuration persistence.
//!
//! The viewer keeps a small JSON configuration file (`config.json`) naming
//! the two data directories: where chart PDFs live and where the catalog
//! text lives. Keys use the camelCase names the configuration file has
//! always used.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "chartsDirectory": "/data/efb/charts",
//!   "csvDirectory": "/data/efb/csv"
//! }
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "config.json";

/// The viewer's persisted configuration.
///
/// # Examples
///
/// ```
/// use chart_catalog_db::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.charts_directory, "charts");
/// assert_eq!(config.csv_directory, "csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the chart PDFs (flat or nested per airport).
    #[serde(rename = "chartsDirectory")]
    pub charts_directory: String,
    /// Directory holding the catalog text files.
    #[serde(rename = "csvDirectory")]
    pub csv_directory: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            charts_directory: "charts".to_string(),
            csv_directory: "csv".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    ///
    /// Fields absent from the file keep their default values, so a partial
    /// configuration written by an older version still loads.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Loads the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CatalogError::IoError) if the file cannot be
    /// read, or [`JsonError`](CatalogError::JsonError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CatalogError::IoError) if the file cannot be
    /// written, or [`JsonError`](CatalogError::JsonError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Validates that `dir` names an existing, readable directory.
///
/// Relative paths are resolved against the current working directory. On
/// success the absolute path is returned.
///
/// # Errors
///
/// Returns [`InvalidDirectory`](CatalogError::InvalidDirectory) when the
/// path does not exist, is not a directory, or cannot be read.
pub fn validate_directory(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };

    let metadata = std::fs::metadata(&absolute)
        .map_err(|err| CatalogError::InvalidDirectory(format!("{}: {err}", absolute.display())))?;
    if !metadata.is_dir() {
        return Err(CatalogError::InvalidDirectory(format!(
            "{} is not a directory",
            absolute.display()
        )));
    }
    std::fs::read_dir(&absolute)
        .map_err(|err| CatalogError::InvalidDirectory(format!("{}: {err}", absolute.display())))?;

    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.charts_directory, "charts");
        assert_eq!(config.csv_directory, "csv");
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = CatalogConfig {
            charts_directory: "/data/charts".to_string(),
            csv_directory: "/data/csv".to_string(),
        };
        config.save(&path).unwrap();

        let loaded = CatalogConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"chartsDirectory":"/only/charts"}"#).unwrap();

        let loaded = CatalogConfig::load(&path).unwrap();
        assert_eq!(loaded.charts_directory, "/only/charts");
        assert_eq!(loaded.csv_directory, "csv");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loaded = CatalogConfig::load_or_default("/nonexistent/config.json");
        assert_eq!(loaded, CatalogConfig::default());
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_directory(dir.path()).is_ok());

        let file_path = dir.path().join("file.txt");
        std::fs::write(&file_path, "x").unwrap();
        assert!(matches!(
            validate_directory(&file_path),
            Err(CatalogError::InvalidDirectory(_))
        ));

        assert!(validate_directory("/nonexistent/surely").is_err());
    }
}
