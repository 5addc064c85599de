/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn snapshot_arg() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/sample-snapshot.json")
        .to_string_lossy()
        .into_owned()
}

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Run the CLI inside `dir` and parse the report from stdout.
fn run_in(dir: &std::path::Path, args: &[&str]) -> (serde_json::Value, String) {
    let output = cargo_bin_cmd!("compliance-report")
        .current_dir(dir)
        .args(["--snapshot", &snapshot_arg()])
        .args(args)
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert!(output.status.success(), "stderr: {}", stderr);
    (serde_json::from_slice(&output.stdout).unwrap(), stderr)
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_report_name() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
report_name: "Quarterly audit"
"#,
        );

        let (report, stderr) = run_in(dir.path(), &[]);

        assert_eq!(report["reportName"], "Quarterly audit");
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_exempt_components() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
version_exempt_components:
  - 503
"#,
        );

        let (report, _) = run_in(dir.path(), &[]);
        let issues = &report["inventoryData"]["1201"]["complianceIssues"];

        assert!(issues["Old version"].is_null());
        assert!(issues["Version not analyzed"].is_string());
    }

    #[test]
    fn test_auto_discovery_disables_child_projects() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
include_child_projects: false
"#,
        );

        let (report, _) = run_in(dir.path(), &[]);

        assert_eq!(report["projectList"].as_array().unwrap().len(), 1);
        assert_eq!(report["projectReviewStatus"]["100"], "Approved");
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let (report, stderr) = run_in(dir.path(), &[]);

        assert_eq!(report["reportName"], "Project Compliance Report");
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            r#"
cvss_version: "2.0"
max_versions_back: 4
"#,
        );

        let (report, _) = run_in(dir.path(), &["--config", config_path.to_str().unwrap()]);

        assert_eq!(report["projectSummaryData"]["cvssVersion"], "2.0");
        assert!(report["inventoryData"]["1001"]["complianceIssues"]["Old version"].is_string());
    }

    #[test]
    fn test_explicit_config_missing_file_fails() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("compliance-report")
            .current_dir(dir.path())
            .args(["--snapshot", &snapshot_arg(), "--config", "missing.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_config_value_fails() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
max_versions_back: 0
"#,
        );

        let output = cargo_bin_cmd!("compliance-report")
            .current_dir(dir.path())
            .args(["--snapshot", &snapshot_arg()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("max_versions_back must be at least 1"));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            "report_name: [unclosed",
        );

        cargo_bin_cmd!("compliance-report")
            .current_dir(dir.path())
            .args(["--snapshot", &snapshot_arg()])
            .assert()
            .code(3);
    }

    #[test]
    fn test_unknown_field_warns_but_succeeds() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
report_name: "Audit"
retry_count: 3
"#,
        );

        let (report, stderr) = run_in(dir.path(), &[]);

        assert_eq!(report["reportName"], "Audit");
        assert!(stderr.contains("Unknown config field 'retry_count'"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config_values() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
report_name: "From config"
base_url: "https://config.example.com"
max_versions_back: 4
"#,
        );

        let (report, _) = run_in(
            dir.path(),
            &[
                "--report-name",
                "From CLI",
                "--max-versions-back",
                "20",
            ],
        );

        assert_eq!(report["reportName"], "From CLI");
        // Base URL not given on the command line, so the config value stays
        assert!(report["projectList"][0]["projectLink"]
            .as_str()
            .unwrap()
            .starts_with("https://config.example.com/"));
        assert!(report["inventoryData"]["1201"]["complianceIssues"]["Old version"].is_null());
    }

    #[test]
    fn test_cli_flag_disables_what_config_enables() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("compliance-report.config.yml"),
            r#"
include_compliance_information: true
"#,
        );

        let (report, _) = run_in(dir.path(), &["--no-compliance"]);

        assert_eq!(
            report["projectSummaryData"]["includeComplianceInformation"],
            false
        );
    }
}
