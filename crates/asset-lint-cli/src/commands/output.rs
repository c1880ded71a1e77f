//! Report writing for lint results.

use anyhow::{Context, Result};
use asset_lint_core::LintResults;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Directory reports are written to when no absolute path is given.
const REPORT_DIR: &str = "saved/lint-reports";

/// Template used when `--template` is not given.
const DEFAULT_TEMPLATE: &str = "resources/lint-report-template.html";

/// Writes the JSON report and returns the path written.
pub fn write_json_report(results: &LintResults, override_path: &str) -> Result<PathBuf> {
    let path = report_path(override_path, "json");
    write_report(&path, &results.to_json_string())?;
    Ok(path)
}

/// Writes the HTML report and returns the path written.
///
/// A missing template produces an incomplete document (logged by the report
/// generator); only the file write itself can fail here.
pub fn write_html_report(
    results: &LintResults,
    override_path: &str,
    template: Option<&Path>,
) -> Result<PathBuf> {
    let path = report_path(override_path, "html");
    let template = template.unwrap_or_else(|| Path::new(DEFAULT_TEMPLATE));
    write_report(&path, &results.to_html(template))?;
    Ok(path)
}

/// Resolves the output path for a report.
///
/// Empty override: a timestamped file under the report directory. Relative
/// override: that name under the report directory. Absolute override: as-is.
fn report_path(override_path: &str, extension: &str) -> PathBuf {
    if override_path.is_empty() {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        return PathBuf::from(REPORT_DIR).join(format!("lint-report-{stamp}.{extension}"));
    }

    let path = Path::new(override_path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(REPORT_DIR).join(path)
    }
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create report directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("cannot write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_yields_timestamped_default() {
        let path = report_path("", "json");
        assert!(path.starts_with(REPORT_DIR));
        let name = path.file_name().expect("name").to_string_lossy().into_owned();
        assert!(name.starts_with("lint-report-"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn relative_override_lands_under_report_dir() {
        let path = report_path("nightly.html", "html");
        assert_eq!(path, PathBuf::from(REPORT_DIR).join("nightly.html"));
    }

    #[test]
    fn absolute_override_is_used_verbatim() {
        let path = report_path("/tmp/out.json", "json");
        assert_eq!(path, PathBuf::from("/tmp/out.json"));
    }

    #[test]
    fn write_json_report_creates_directories() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let out = tmp.path().join("nested/dir/report.json");

        let mut results = LintResults::default();
        results.project = "SampleProject".to_string();
        results.tally();

        let written = write_json_report(&results, &out.to_string_lossy())
            .expect("write report");
        assert_eq!(written, out);

        let content = std::fs::read_to_string(&out).expect("read report");
        assert!(content.contains("SampleProject"));
    }

    #[test]
    fn write_to_unwritable_path_fails() {
        let results = LintResults::default();
        let result = write_json_report(&results, "/proc/definitely/not/writable.json");
        assert!(result.is_err());
    }
}
