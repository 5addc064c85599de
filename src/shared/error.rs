use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a failed compliance gate apart
/// from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated, gate passed (or not requested)
    Success = 0,
    /// `--fail-on-rejected` was given and the root project rolled up to Rejected
    ComplianceGateFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (snapshot missing, bad config, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ComplianceGateFailed => write!(f, "Compliance Gate Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for compliance report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Snapshot file not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse snapshot file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the snapshot is valid JSON exported from the inventory service")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Project {project_id} was not found in the project hierarchy\n\n💡 Hint: Check the --project-id value against the snapshot contents")]
    ProjectNotFound { project_id: u64 },

    #[error("Project hierarchy exceeds the maximum depth of {max_depth} below project {project_id}\n\n💡 Hint: The hierarchy is probably malformed (a project may contain itself)")]
    HierarchyTooDeep { project_id: u64, max_depth: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}
