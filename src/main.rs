mod cli;
mod config;

use cli::Args;
use compliance_report::adapters::outbound::console::StderrProgressReporter;
use compliance_report::adapters::outbound::filesystem::{
    FileSystemWriter, SnapshotRepository, StdoutPresenter,
};
use compliance_report::adapters::outbound::formatters::JsonReportFormatter;
use compliance_report::application::dto::ReportRequest;
use compliance_report::application::use_cases::GenerateReportUseCase;
use compliance_report::compliance::domain::{ComponentId, ProjectId, ReviewStatus};
use compliance_report::ports::inbound::ReportGenerationPort;
use compliance_report::ports::outbound::{OutputPresenter, ReportFormatter};
use compliance_report::shared::error::ExitCode;
use compliance_report::shared::Result;
use config::ConfigFile;
use std::process;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Diagnostics go to stderr; stdout carries only the report
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let result = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("⚠️  Warning: failed to initialize logging: {}", e);
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    // Create adapters (Dependency Injection)
    let snapshot = SnapshotRepository::load(&args.snapshot)?;
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let request = build_request(&args, &config, snapshot.root_project_id());
    let fail_on_rejected = args.fail_on_rejected;

    let use_case = GenerateReportUseCase::new(&snapshot, &snapshot, &snapshot, progress_reporter);
    let report = use_case.generate_report(request)?;

    let output = JsonReportFormatter::new().format(&report)?;
    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&output)?;

    if fail_on_rejected && report.overall_status() == ReviewStatus::Rejected {
        eprintln!(
            "❌ Compliance gate failed: project '{}' is Rejected",
            report.project_name
        );
        return Ok(ExitCode::ComplianceGateFailed);
    }
    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

/// Merges CLI flags over config values over defaults
fn build_request(args: &Args, config: &ConfigFile, default_root: ProjectId) -> ReportRequest {
    let project_id = args.project_id.map(ProjectId::new).unwrap_or(default_root);
    let mut request = ReportRequest::new(project_id);

    if let Some(name) = args.report_name.clone().or_else(|| config.report_name.clone()) {
        request.report_name = name;
    }
    if let Some(url) = args.base_url.clone().or_else(|| config.base_url.clone()) {
        request.base_url = url;
    }
    request.include_child_projects =
        !args.no_child_projects && config.include_child_projects.unwrap_or(true);
    request.include_compliance_information =
        !args.no_compliance && config.include_compliance_information.unwrap_or(true);
    if let Some(version) = args.cvss_version.or_else(|| config.parsed_cvss_version()) {
        request.cvss_version = version;
    }
    if let Some(max) = args.max_versions_back.or(config.max_versions_back) {
        request.max_versions_back = max;
    }
    request.version_exempt_components = config
        .version_exempt_components
        .iter()
        .flatten()
        .copied()
        .map(ComponentId::new)
        .collect();

    request
}
