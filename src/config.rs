//! Configuration file support for parts-inventory.
//!
//! Provides YAML-based configuration through `parts-inventory.config.yml`
//! files, including data structures, file loading, validation and the
//! precedence rules that merge file values with command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use parts_inventory::application::dto::OutputFormat;
use parts_inventory::inventory::services::HighlightTimings;
use parts_inventory::shared::Result;

pub const CONFIG_FILENAME: &str = "parts-inventory.config.yml";

/// Backend address used when neither the command line nor a config file sets one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Request timeout used when the config file does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    pub default_category: Option<String>,
    pub highlight: Option<HighlightConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Phase delays of the post-create highlight, in milliseconds.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighlightConfig {
    pub settle_delay_ms: Option<u64>,
    pub move_duration_ms: Option<u64>,
    pub highlight_duration_ms: Option<u64>,
}

impl HighlightConfig {
    /// Unset delays fall back to the defaults
    pub fn timings(&self) -> HighlightTimings {
        let defaults = HighlightTimings::default();
        let millis = |value: Option<u64>, default: Duration| {
            value.map(Duration::from_millis).unwrap_or(default)
        };
        HighlightTimings {
            settle_delay: millis(self.settle_delay_ms, defaults.settle_delay),
            move_duration: millis(self.move_duration_ms, defaults.move_duration),
            highlight_duration: millis(self.highlight_duration_ms, defaults.highlight_duration),
        }
    }
}

/// Settings after merging command-line options over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub format: OutputFormat,
    pub category: Option<String>,
    pub timings: HighlightTimings,
}

impl Settings {
    /// CLI values win over config values, which win over the defaults.
    pub fn resolve(
        config: Option<&ConfigFile>,
        base_url: Option<&str>,
        format: Option<OutputFormat>,
        category: Option<&str>,
    ) -> Result<Self> {
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let format = match format {
            Some(format) => format,
            None => match config.and_then(|c| c.format.as_deref()) {
                Some(raw) => raw.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
                None => OutputFormat::default(),
            },
        };

        let category = category
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.default_category.clone()));

        let timeout_secs = config
            .and_then(|c| c.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let timings = config
            .and_then(|c| c.highlight)
            .map(|h| h.timings())
            .unwrap_or_default();

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            format,
            category,
            timings,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        if base_url.trim().is_empty() {
            bail!(
                "Invalid config: base_url must not be empty.\n\n\
                 💡 Hint: Remove the field to use {} or set a full URL.",
                DEFAULT_BASE_URL
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a value such as {}.",
            DEFAULT_TIMEOUT_SECS
        );
    }

    if let Some(ref format) = config.format {
        if let Err(message) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", message);
        }
    }

    if let Some(ref category) = config.default_category {
        if category.trim().is_empty() {
            bail!("Invalid config: default_category must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
base_url: http://inventory.local:8080
timeout_secs: 5
format: markdown
default_category: Resistors
highlight:
  settle_delay_ms: 100
  highlight_duration_ms: 0
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://inventory.local:8080")
        );
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.default_category.as_deref(), Some("Resistors"));
        let highlight = config.highlight.unwrap();
        assert_eq!(highlight.settle_delay_ms, Some(100));
        assert_eq!(highlight.move_duration_ms, None);
    }

    #[test]
    fn test_highlight_config_falls_back_to_defaults() {
        let config = HighlightConfig {
            settle_delay_ms: Some(10),
            move_duration_ms: None,
            highlight_duration_ms: Some(0),
        };
        let timings = config.timings();
        assert_eq!(timings.settle_delay, Duration::from_millis(10));
        assert_eq!(timings.move_duration, Duration::from_millis(800));
        assert_eq!(timings.highlight_duration, Duration::ZERO);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "timeout_secs: 0\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("timeout_secs must be greater than 0"));
    }

    #[test]
    fn test_unknown_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: xml\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: xml"));
    }

    #[test]
    fn test_blank_base_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "base_url: \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("base_url must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
check_cve: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_settings_defaults_without_config() {
        let settings = Settings::resolve(None, None, None, None).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(settings.category.is_none());
        assert_eq!(settings.timings, HighlightTimings::default());
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            base_url: Some("http://from-config:5000".to_string()),
            format: Some("json".to_string()),
            default_category: Some("ICs".to_string()),
            timeout_secs: Some(3),
            ..Default::default()
        };

        let settings = Settings::resolve(
            Some(&config),
            Some("http://from-cli:5000"),
            Some(OutputFormat::Markdown),
            None,
        )
        .unwrap();
        assert_eq!(settings.base_url, "http://from-cli:5000");
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.category.as_deref(), Some("ICs"));
        assert_eq!(settings.timeout, Duration::from_secs(3));

        let settings = Settings::resolve(Some(&config), None, None, Some("Kits")).unwrap();
        assert_eq!(settings.base_url, "http://from-config:5000");
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.category.as_deref(), Some("Kits"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.base_url.is_none());
        assert!(config.timeout_secs.is_none());
        assert!(config.format.is_none());
        assert!(config.highlight.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
