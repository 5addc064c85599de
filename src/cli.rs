use clap::Parser;
use std::path::PathBuf;

use compliance_report::compliance::domain::CvssVersion;

/// Aggregate inventory compliance data across a project hierarchy
#[derive(Parser, Debug)]
#[command(name = "compliance-report")]
#[command(version)]
#[command(
    about = "Aggregate license, vulnerability and review-status compliance across a project hierarchy",
    long_about = None
)]
pub struct Args {
    /// JSON snapshot of the project, inventory, license and version data
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Root project of the report (defaults to the snapshot's top-level project)
    #[arg(short = 'p', long, value_name = "ID")]
    pub project_id: Option<u64>,

    /// Configuration file (defaults to ./compliance-report.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Title of the report
    #[arg(long, value_name = "NAME")]
    pub report_name: Option<String>,

    /// Server URL used for project and inventory links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Report on the root project only
    #[arg(long)]
    pub no_child_projects: bool,

    /// Skip compliance evaluation of inventory items
    #[arg(long)]
    pub no_compliance: bool,

    /// CVSS version for vulnerability counts: 2.0 or 3.x
    #[arg(long, value_name = "VERSION")]
    pub cvss_version: Option<CvssVersion>,

    /// Versions behind the latest release at which a version counts as old
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_versions_back: Option<u32>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when the root project rolls up to Rejected
    #[arg(long)]
    pub fail_on_rejected: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output; warnings are still shown
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
