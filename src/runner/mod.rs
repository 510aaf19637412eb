//! Analysis orchestrator.
//!
//! Invokes the enabled external tools one after another as subprocesses,
//! captures each tool's stdout, and aggregates the results into an ordered
//! bundle. A failing tool never aborts the run: its entry is replaced with
//! an error description and the remaining tools still execute.

use crate::error::Error;
use crate::models::{AnalysisRequest, Language, ReportBundle, ToolKind, ToolResult};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info, warn};

/// Working-directory policy for a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkdirPolicy {
    /// Run in the dispatcher's own working directory.
    Inherit,
    /// Run in the parent directory of the target. Pyre resolves its
    /// configuration from the project root rather than the target path.
    TargetParent,
}

/// A single tool invocation: program, arguments, and where to run it.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool identity (names the bundle entry).
    pub kind: ToolKind,
    /// Program to spawn.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working-directory policy.
    pub workdir: WorkdirPolicy,
}

impl ToolSpec {
    /// Build the fixed command line for `kind` against `target`.
    pub fn for_kind(kind: ToolKind, target: &Path) -> Self {
        let target_str = target.display().to_string();
        match kind {
            ToolKind::Bandit => Self {
                kind,
                program: "bandit".to_string(),
                args: vec![
                    "-r".to_string(),
                    target_str,
                    "-q".to_string(),
                    "-f".to_string(),
                    "json".to_string(),
                ],
                workdir: WorkdirPolicy::Inherit,
            },
            ToolKind::Flake8 => Self {
                kind,
                program: "flake8".to_string(),
                args: vec![target_str],
                workdir: WorkdirPolicy::Inherit,
            },
            ToolKind::Pylint => Self {
                kind,
                program: "pylint".to_string(),
                args: vec![target_str, "--output-format=json".to_string()],
                workdir: WorkdirPolicy::Inherit,
            },
            ToolKind::Pyre => Self {
                kind,
                program: "pyre".to_string(),
                args: vec!["check".to_string()],
                workdir: WorkdirPolicy::TargetParent,
            },
        }
    }

    /// The full command line, for logging.
    fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Run the analysis described by `request`.
///
/// Fails only if the target path does not exist; every tool-level failure
/// is recorded in the returned bundle instead.
pub async fn run(request: &AnalysisRequest) -> Result<ReportBundle, Error> {
    if !request.target.exists() {
        return Err(Error::TargetNotFound {
            path: request.target.clone(),
        });
    }

    match request.language {
        Language::Python => {
            if request.selection.is_empty() {
                warn!("No tools enabled; nothing to run");
            }

            let specs: Vec<ToolSpec> = request
                .selection
                .enabled()
                .into_iter()
                .map(|kind| ToolSpec::for_kind(kind, &request.target))
                .collect();

            Ok(run_specs(&specs, &request.target).await)
        }
        Language::Javascript => {
            warn!("JavaScript analysis is not yet implemented");
            let mut bundle = ReportBundle::new();
            bundle.push(ToolResult::ok("javascript_analysis", "Not implemented"));
            Ok(bundle)
        }
        Language::Php => {
            warn!("PHP analysis is not yet implemented");
            let mut bundle = ReportBundle::new();
            bundle.push(ToolResult::ok("php_analysis", "Not implemented"));
            Ok(bundle)
        }
    }
}

/// Run a list of tool specs sequentially, one entry per spec.
async fn run_specs(specs: &[ToolSpec], target: &Path) -> ReportBundle {
    let mut bundle = ReportBundle::new();

    for spec in specs {
        bundle.push(run_tool(spec, target).await);
    }

    bundle
}

/// Run one tool to completion and capture its stdout.
async fn run_tool(spec: &ToolSpec, target: &Path) -> ToolResult {
    info!("Running {}: {}", spec.kind, spec.command_line());

    let mut command = Command::new(&spec.program);
    command.args(&spec.args);

    if spec.workdir == WorkdirPolicy::TargetParent {
        command.current_dir(target_parent(target));
    }

    match command.output().await {
        Ok(output) if output.status.success() => {
            ToolResult::ok(spec.kind.name(), String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            error!(
                "{} analysis failed: {}{}{}",
                spec.kind,
                output.status,
                if stderr.is_empty() { "" } else { ": " },
                stderr
            );

            let mut message = format!("Error: {} exited with {}", spec.kind, output.status);
            if !stderr.is_empty() {
                message.push_str(": ");
                message.push_str(stderr);
            }
            ToolResult::failed(spec.kind.name(), message)
        }
        Err(e) => {
            error!("{} analysis failed: {}", spec.kind, e);
            ToolResult::failed(
                spec.kind.name(),
                format!("Error: failed to run {}: {}", spec.kind, e),
            )
        }
    }
}

/// Parent directory of the target, falling back to the current directory
/// for bare filenames.
fn target_parent(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    }
}
