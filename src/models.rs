//! Data models for the analysis dispatcher.
//!
//! This module contains the core data structures shared across the
//! application: the analysis request, per-tool results, and the ordered
//! result bundle.

use std::fmt;
use std::path::PathBuf;

/// Target language for analysis.
///
/// Only the `python` path currently wires real tools; the others return a
/// fixed placeholder entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    Javascript,
    Php,
    #[default]
    Python,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Javascript => write!(f, "javascript"),
            Language::Php => write!(f, "php"),
            Language::Python => write!(f, "python"),
        }
    }
}

/// One of the four supported external analysis tools.
///
/// The variant order is the invocation order: bandit, flake8, pylint, pyre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Security linter.
    Bandit,
    /// Style linter.
    Flake8,
    /// Code-quality linter.
    Pylint,
    /// Type-checker.
    Pyre,
}

impl ToolKind {
    /// All tool kinds, in invocation order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Bandit,
        ToolKind::Flake8,
        ToolKind::Pylint,
        ToolKind::Pyre,
    ];

    /// Stable lowercase identifier used as the result-mapping key.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Bandit => "bandit",
            ToolKind::Flake8 => "flake8",
            ToolKind::Pylint => "pylint",
            ToolKind::Pyre => "pyre",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Independent enable flags, one per tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolSelection {
    pub bandit: bool,
    pub flake8: bool,
    pub pylint: bool,
    pub pyre: bool,
}

impl ToolSelection {
    /// Returns the enabled tool kinds in invocation order.
    pub fn enabled(&self) -> Vec<ToolKind> {
        ToolKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ToolKind::Bandit => self.bandit,
                ToolKind::Flake8 => self.flake8,
                ToolKind::Pylint => self.pylint,
                ToolKind::Pyre => self.pyre,
            })
            .collect()
    }

    /// True if no tool is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.bandit || self.flake8 || self.pylint || self.pyre)
    }
}

/// A single analysis invocation, built once from CLI and config input.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// File or directory to analyze.
    pub target: PathBuf,
    /// Language selector.
    pub language: Language,
    /// Which tools to run (python path only).
    pub selection: ToolSelection,
}

/// Outcome of a single tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// The tool ran and exited zero.
    Ok,
    /// The tool exited non-zero or could not be spawned.
    Failed,
}

/// Captured output of one attempted tool.
///
/// On failure, `output` holds an error description instead of tool output.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// Tool identifier (result-mapping key).
    pub tool: String,
    /// Raw captured stdout, or an `Error: ...` string on failure.
    pub output: String,
    /// Whether the invocation succeeded.
    pub status: ToolStatus,
}

impl ToolResult {
    /// Successful result with captured stdout.
    pub fn ok(tool: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            output: output.into(),
            status: ToolStatus::Ok,
        }
    }

    /// Failed result carrying an error description.
    pub fn failed(tool: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            output: error.into(),
            status: ToolStatus::Failed,
        }
    }
}

/// Ordered tool-name-to-output mapping produced per run.
///
/// Insertion order equals invocation order. Contains exactly one entry per
/// tool that was enabled and attempted, success or failure.
#[derive(Debug, Clone, Default)]
pub struct ReportBundle {
    entries: Vec<ToolResult>,
}

impl ReportBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result, preserving invocation order.
    pub fn push(&mut self, result: ToolResult) {
        self.entries.push(result);
    }

    /// Iterates over entries in invocation order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolResult> {
        self.entries.iter()
    }

    /// Looks up an entry by tool name.
    pub fn get(&self, tool: &str) -> Option<&ToolResult> {
        self.entries.iter().find(|r| r.tool == tool)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no tool was attempted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_order_is_fixed() {
        let selection = ToolSelection {
            bandit: true,
            flake8: false,
            pylint: true,
            pyre: true,
        };

        let enabled = selection.enabled();
        assert_eq!(
            enabled,
            vec![ToolKind::Bandit, ToolKind::Pylint, ToolKind::Pyre]
        );
    }

    #[test]
    fn test_selection_empty() {
        assert!(ToolSelection::default().is_empty());
        assert!(ToolSelection::default().enabled().is_empty());

        let selection = ToolSelection {
            flake8: true,
            ..Default::default()
        };
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(ToolKind::Bandit.name(), "bandit");
        assert_eq!(ToolKind::Flake8.name(), "flake8");
        assert_eq!(ToolKind::Pylint.name(), "pylint");
        assert_eq!(ToolKind::Pyre.name(), "pyre");
    }

    #[test]
    fn test_bundle_preserves_insertion_order() {
        let mut bundle = ReportBundle::new();
        bundle.push(ToolResult::ok("bandit", "{}"));
        bundle.push(ToolResult::failed("flake8", "Error: exit status 127"));

        let names: Vec<&str> = bundle.iter().map(|r| r.tool.as_str()).collect();
        assert_eq!(names, vec!["bandit", "flake8"]);

        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.get("flake8").unwrap().status, ToolStatus::Failed);
        assert!(bundle.get("pylint").is_none());
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Python.to_string(), "python");
        assert_eq!(Language::Javascript.to_string(), "javascript");
        assert_eq!(Language::Php.to_string(), "php");
    }
}
