//! Configuration loading from constify.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::analyzer::Severity;
use crate::report::ReportFormat;

/// Main configuration structure for constify.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConstifyConfig {
    /// Analysis pass configuration.
    pub analysis: Option<AnalysisConfig>,
    /// Fix application configuration.
    pub fix: Option<FixConfig>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

impl ConstifyConfig {
    /// The configured report format, defaulting to plain text.
    ///
    /// Feed this to [`crate::report::print`].
    pub fn report_format(&self) -> ReportFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

/// Analysis pass configuration.
#[derive(Debug, Deserialize, Default)]
pub struct AnalysisConfig {
    /// Severity attached to findings: "info", "warning", or "error".
    pub severity: Option<Severity>,
    /// Also report ineligible declarations.
    pub report_ineligible: Option<bool>,
    /// Classify declarations in parallel.
    pub parallel: Option<bool>,
}

/// Fix application configuration.
#[derive(Debug, Deserialize, Default)]
pub struct FixConfig {
    /// Rewrite eligible declarations as part of the analysis pass.
    pub enabled: Option<bool>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<ReportFormat>,
}

/// Loads configuration from constify.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<ConstifyConfig>> {
    let path = root.join("constify.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid constify.toml")?;
    Ok(Some(cfg))
}
