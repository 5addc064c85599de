//! Configuration file support for compliance-report.
//!
//! Provides YAML-based configuration through `compliance-report.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use compliance_report::compliance::domain::CvssVersion;
use compliance_report::shared::error::ReportError;
use compliance_report::shared::security::read_checked;
use compliance_report::shared::Result;

pub const CONFIG_FILENAME: &str = "compliance-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub include_child_projects: Option<bool>,
    pub include_compliance_information: Option<bool>,
    pub cvss_version: Option<String>,
    pub max_versions_back: Option<u32>,
    pub version_exempt_components: Option<Vec<u64>>,
    pub report_name: Option<String>,
    pub base_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured CVSS version, if any. Only valid after [`validate_config`].
    pub fn parsed_cvss_version(&self) -> Option<CvssVersion> {
        self.cvss_version
            .as_deref()
            .and_then(|value| value.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
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
    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_versions_back == Some(0) {
        return Err(ReportError::InvalidConfig {
            message: "max_versions_back must be at least 1".to_string(),
            hint: "A threshold of 0 would flag every version as old; use 1 to flag anything but the latest release."
                .to_string(),
        }
        .into());
    }

    if let Some(ref value) = config.cvss_version {
        value
            .parse::<CvssVersion>()
            .map_err(|message| ReportError::InvalidConfig {
                message,
                hint: "Set cvss_version to \"2.0\" or \"3.x\".".to_string(),
            })?;
    }

    if let Some(ref url) = config.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ReportError::InvalidConfig {
                message: format!("base_url '{}' is not an http(s) URL", url),
                hint: "Use the server address, e.g. \"https://scan.example.com:8888\".".to_string(),
            }
            .into());
        }
    }

    if let Some(ref name) = config.report_name {
        if name.trim().is_empty() {
            return Err(ReportError::InvalidConfig {
                message: "report_name must not be empty".to_string(),
                hint: "Remove the key to use the default report name.".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}
