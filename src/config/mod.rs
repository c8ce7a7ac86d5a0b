//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input archive settings
    #[serde(default)]
    pub archives: ArchiveConfig,

    /// Extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archives: ArchiveConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Input archive configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Directory holding the downloaded archive volumes
    #[serde(default = "default_archive_dir")]
    pub directory: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            directory: default_archive_dir(),
        }
    }
}

fn default_archive_dir() -> PathBuf {
    PathBuf::from("./archives")
}

/// Extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Whether to extract supplementary materials alongside metadata
    #[serde(default = "default_true")]
    pub supplementary_materials: bool,

    /// Whether to keep articles whose license is not in the free allow-list
    #[serde(default)]
    pub keep_non_free: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            supplementary_materials: true,
            keep_non_free: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("OAMI").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Locate a config file in the standard locations, nearest first
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("oami.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("oami").join("config.toml"));
    }
    candidates.into_iter().find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.archives.directory, PathBuf::from("./archives"));
        assert!(config.extraction.supplementary_materials);
        assert!(!config.extraction.keep_non_free);
    }
}
