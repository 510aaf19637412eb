//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.lintmux.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Default tool enablement.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Default tool enablement, overridable per run via `--use-*` flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Enable Bandit (security linter) by default.
    #[serde(default)]
    pub bandit: bool,

    /// Enable Flake8 (style linter) by default.
    #[serde(default)]
    pub flake8: bool,

    /// Enable Pylint (code-quality linter) by default.
    #[serde(default)]
    pub pylint: bool,

    /// Enable Pyre (type-checker) by default.
    #[serde(default)]
    pub pyre: bool,
}

/// Report settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default report file path. `--report-file` takes precedence.
    #[serde(default)]
    pub file: Option<String>,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".lintmux.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // Tool flags are additive: a --use-* flag enables the tool, a config
        // entry pre-enables it when the flag is absent.
        if args.use_bandit {
            self.tools.bandit = true;
        }
        if args.use_flake8 {
            self.tools.flake8 = true;
        }
        if args.use_pylint {
            self.tools.pylint = true;
        }
        if args.use_pyre {
            self.tools.pyre = true;
        }

        // Report file - only override if explicitly provided via CLI
        if let Some(ref report_file) = args.report_file {
            self.report.file = Some(report_file.display().to_string());
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// The effective tool selection after merging.
    pub fn tool_selection(&self) -> crate::models::ToolSelection {
        crate::models::ToolSelection {
            bandit: self.tools.bandit,
            flake8: self.tools.flake8,
            pylint: self.tools.pylint,
            pyre: self.tools.pyre,
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
