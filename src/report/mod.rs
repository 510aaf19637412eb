//! Report rendering and saving.
//!
//! Renders the result bundle as plain text with one `--- TOOLNAME ---`
//! header block per tool. The console and the report file both receive the
//! same rendered aggregate, byte for byte.

use crate::error::Error;
use crate::models::ReportBundle;
use std::path::Path;

/// Render the bundle: one upper-cased header block per entry, in
/// invocation order, each block newline-terminated.
pub fn render_bundle(bundle: &ReportBundle) -> String {
    let mut output = String::new();

    for entry in bundle.iter() {
        output.push_str(&format!("\n--- {} ---\n", entry.tool.to_uppercase()));
        output.push_str(&entry.output);
        if !entry.output.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}

/// Write the rendered aggregate to `path` as plain text.
pub fn save_report(path: &Path, rendered: &str) -> Result<(), Error> {
    std::fs::write(path, rendered).map_err(|source| Error::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToolResult;

    fn make_bundle() -> ReportBundle {
        let mut bundle = ReportBundle::new();
        bundle.push(ToolResult::ok("bandit", "{\"results\": []}\n"));
        bundle.push(ToolResult::failed("flake8", "Error: flake8 exited with exit status: 1"));
        bundle
    }

    #[test]
    fn test_render_headers_and_order() {
        let rendered = render_bundle(&make_bundle());

        let bandit_pos = rendered.find("--- BANDIT ---").expect("bandit header");
        let flake8_pos = rendered.find("--- FLAKE8 ---").expect("flake8 header");
        assert!(bandit_pos < flake8_pos, "headers follow invocation order");

        assert!(rendered.contains("{\"results\": []}"));
        assert!(rendered.contains("Error: flake8 exited with"));
    }

    #[test]
    fn test_render_empty_bundle() {
        assert_eq!(render_bundle(&ReportBundle::new()), "");
    }

    #[test]
    fn test_render_terminates_blocks_with_newline() {
        let mut bundle = ReportBundle::new();
        bundle.push(ToolResult::ok("bandit", "no trailing newline"));
        let rendered = render_bundle(&bundle);
        assert!(rendered.ends_with("no trailing newline\n"));
    }

    #[test]
    fn test_saved_report_matches_rendered_aggregate() {
        let rendered = render_bundle(&make_bundle());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        save_report(&path, &rendered).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, rendered, "file content byte-matches the aggregate");
    }

    #[test]
    fn test_save_report_failure_is_reported() {
        let rendered = render_bundle(&make_bundle());
        let err = save_report(Path::new("/nonexistent/dir/out.txt"), &rendered)
            .expect_err("write into missing directory should fail");
        assert!(matches!(err, Error::ReportWrite { .. }));
    }
}
