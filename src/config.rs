//! Persisted analyzer defaults.
//!
//! Stores the preferred comparison mode and similarity thresholds in a
//! JSON file under the platform config directory, so habitual `check`
//! invocations don't need the flags every time. CLI flags always win over
//! the file.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Use similarity mode by default.
    #[serde(default)]
    pub similarity: bool,
    /// Default question-level similarity threshold.
    #[serde(default = "default_question_threshold")]
    pub question_threshold: f64,
    /// Default option-level similarity threshold.
    #[serde(default = "default_variant_threshold")]
    pub variant_threshold: f64,
}

fn default_question_threshold() -> f64 {
    0.8
}

fn default_variant_threshold() -> f64 {
    0.9
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity: false,
            question_threshold: default_question_threshold(),
            variant_threshold: default_variant_threshold(),
        }
    }
}

impl Config {
    /// Load the configuration from the default platform-specific path,
    /// falling back to defaults on any failure.
    pub fn load() -> Self {
        match Self::load_internal() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn load_internal() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration to the default platform-specific path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default platform-specific configuration path.
    fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("io", "quizcheck", "quizcheck")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.similarity);
        assert_eq!(config.question_threshold, 0.8);
        assert_eq!(config.variant_threshold, 0.9);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"similarity":true}"#).unwrap();
        assert!(config.similarity);
        assert_eq!(config.question_threshold, 0.8);
        assert_eq!(config.variant_threshold, 0.9);
    }
}
