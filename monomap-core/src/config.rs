//! Configuration management for Monomap
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (MONOMAP_*)
//! 3. Config file (~/.config/monomap/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::plan::default_plan_path;
use crate::report::Style;
use crate::{Error, Reporter, Result};

/// Report-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Plan file to report on
    pub plan_path: Option<PathBuf>,

    /// Prefix section headings with pictographs
    pub emoji: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            plan_path: None, // Next to the executable
            emoji: true,
        }
    }
}

impl ReportConfig {
    /// Configured plan path, or the default location
    pub fn resolved_plan_path(&self) -> PathBuf {
        self.plan_path.clone().unwrap_or_else(default_plan_path)
    }

    pub fn style(&self) -> Style {
        Style { emoji: self.emoji }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Report configuration
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/monomap/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("monomap").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - MONOMAP_PLAN: Path to the plan file
    /// - MONOMAP_NO_EMOJI: Plain headings unless empty, `0` or `false`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(plan) = std::env::var("MONOMAP_PLAN") {
            self.report.plan_path = Some(PathBuf::from(plan));
        }

        if let Ok(value) = std::env::var("MONOMAP_NO_EMOJI") {
            self.report.emoji = !is_truthy(&value);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, plan: Option<PathBuf>, no_emoji: bool) -> Self {
        if let Some(path) = plan {
            self.report.plan_path = Some(path);
        }

        if no_emoji {
            self.report.emoji = false;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(plan: Option<PathBuf>, no_emoji: bool) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(plan, no_emoji))
    }

    /// Reporter for the configured plan and style
    pub fn reporter(&self) -> Reporter {
        Reporter::new(self.report.resolved_plan_path()).with_style(self.report.style())
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false")
}
