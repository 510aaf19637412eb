//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::{Language, ToolSelection};
use clap::Parser;
use std::path::PathBuf;

/// Lintmux - dispatcher for external static-analysis tools
///
/// Runs a security linter, style linter, code-quality linter, and
/// type-checker against a file or directory and aggregates their raw
/// output into one report.
///
/// Examples:
///   lintmux src/app.py --use-bandit --use-flake8
///   lintmux src/ --use-pylint --report-file report.txt
///   lintmux index.js --language javascript
///   lintmux --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the file or directory to analyze
    ///
    /// Not required when using --init-config.
    #[arg(value_name = "FILEPATH", required_unless_present = "init_config")]
    pub filepath: Option<PathBuf>,

    /// The programming language of the file(s) being analyzed
    ///
    /// Only the python path invokes real tools; javascript and php are
    /// placeholders.
    #[arg(long, value_enum, default_value_t = Language::Python)]
    pub language: Language,

    /// Path to save the report to (optional)
    #[arg(long, value_name = "FILE")]
    pub report_file: Option<PathBuf>,

    /// Use Bandit (security linter) for Python analysis
    #[arg(long)]
    pub use_bandit: bool,

    /// Use Flake8 (style linter) for Python analysis
    #[arg(long)]
    pub use_flake8: bool,

    /// Use Pylint (code-quality linter) for Python analysis
    #[arg(long)]
    pub use_pylint: bool,

    /// Use Pyre (type-checker) for Python analysis (requires setup)
    #[arg(long)]
    pub use_pyre: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .lintmux.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .lintmux.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.filepath.is_none() {
            return Err("A target filepath is required".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// The tool flags as a selection set.
    pub fn tool_selection(&self) -> ToolSelection {
        ToolSelection {
            bandit: self.use_bandit,
            flake8: self.use_flake8,
            pylint: self.use_pylint,
            pyre: self.use_pyre,
        }
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            filepath: Some(PathBuf::from("target.py")),
            language: Language::Python,
            report_file: None,
            use_bandit: false,
            use_flake8: false,
            use_pylint: false,
            use_pyre: false,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_ok() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_filepath() {
        let mut args = make_args();
        args.filepath = None;
        assert!(args.validate().is_err());

        // --init-config does not need a filepath
        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_tool_selection_from_flags() {
        let mut args = make_args();
        args.use_bandit = true;
        args.use_pyre = true;

        let selection = args.tool_selection();
        assert!(selection.bandit);
        assert!(!selection.flake8);
        assert!(!selection.pylint);
        assert!(selection.pyre);
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
