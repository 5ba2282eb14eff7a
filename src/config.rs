//! Generator configuration.
//!
//! Loaded from an optional `blog-seed.toml` in the project root. Stock
//! defaults are serialized to a TOML table first and the user file is merged
//! on top, so the file only needs the keys it wants to override:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! author = "ChaneyChan"              # Written to every article's front-matter
//! content_dir = "src/content/blog"   # Articles land in <content_dir>/<topic>/
//! workflows_dir = ".github/workflows" # Must exist for `validate` to pass
//! ```
//!
//! Directory values are relative to the project root (`--root`, default `.`);
//! absolute paths are used as-is. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "blog-seed.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Author written to front-matter.
    pub author: String,
    /// Content root, relative to the project root.
    pub content_dir: PathBuf,
    /// Workflow-config directory checked by `validate`.
    pub workflows_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            author: "ChaneyChan".to_string(),
            content_dir: PathBuf::from("src/content/blog"),
            workflows_dir: PathBuf::from(".github/workflows"),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.author.trim().is_empty() {
            return Err(ConfigError::Validation("author must not be empty".into()));
        }
        if self.content_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content_dir must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Directory holding one subdirectory per topic.
    pub fn content_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.content_dir)
    }

    pub fn workflows_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.workflows_dir)
    }
}

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `blog-seed.toml` from `root` as a raw TOML value.
///
/// `Ok(None)` when the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GeneratorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config for a project root: stock defaults + optional user file.
pub fn load_config(root: &Path) -> Result<GeneratorConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    if overlay.is_some() {
        tracing::debug!(path = %root.join(CONFIG_FILE).display(), "loaded config file");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Fully-commented stock `blog-seed.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# blog-seed configuration
# =======================
# All settings are optional. Values shown below are the defaults.
# Place this file at the project root as blog-seed.toml.
# Unknown keys will cause an error.

# Author written to every generated article's front-matter.
author = "ChaneyChan"

# Content root, relative to the project root.
# Articles are written to <content_dir>/<topic>/<slug>.md
content_dir = "src/content/blog"

# Workflow-config directory; `validate` fails when it is missing.
workflows_dir = ".github/workflows"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.author, "ChaneyChan");
        assert_eq!(config.content_dir, PathBuf::from("src/content/blog"));
        assert_eq!(config.workflows_dir, PathBuf::from(".github/workflows"));
    }

    #[test]
    fn content_root_is_relative_to_project_root() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.content_root(Path::new("/site")),
            PathBuf::from("/site/src/content/blog")
        );
        assert_eq!(
            config.workflows_root(Path::new("/site")),
            PathBuf::from("/site/.github/workflows")
        );
    }

    #[test]
    fn absolute_content_dir_overrides_root() {
        let config = GeneratorConfig {
            content_dir: PathBuf::from("/elsewhere/blog"),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.content_root(Path::new("/site")),
            PathBuf::from("/elsewhere/blog")
        );
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn load_config_partial_override() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"author = "Someone""#).unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.author, "Someone");
        assert_eq!(config.content_dir, PathBuf::from("src/content/blog"));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "author = [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"auther = "typo""#).unwrap();

        let err = load_config(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn empty_author_fails_validation() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"author = "  ""#).unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_content_dir_fails_validation() {
        let config = GeneratorConfig {
            content_dir: PathBuf::new(),
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("content_dir"));
    }

    #[test]
    fn merge_toml_overlay_wins_and_base_kept() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: GeneratorConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn stock_defaults_value_has_all_keys() {
        let val = stock_defaults_value();
        assert!(val.get("author").is_some());
        assert!(val.get("content_dir").is_some());
        assert!(val.get("workflows_dir").is_some());
    }
}
