//! compliance-report - Project-hierarchy compliance aggregation
//!
//! This library turns per-project software-composition inventory data
//! (licenses, vulnerabilities, review status) into per-item compliance
//! findings and rolled-up summaries across a project hierarchy.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Value objects, rule policies and pure aggregation services
//! - **Application Layer** (`application`): The report use case and run-scoped caches
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use compliance_report::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let snapshot = SnapshotRepository::load(Path::new("snapshot.json"))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(&snapshot, &snapshot, &snapshot, progress_reporter);
//!
//! // Execute
//! let request = ReportRequest::new(snapshot.root_project_id());
//! let report = use_case.execute(request)?;
//!
//! // Format output
//! let output = JsonReportFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SnapshotRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonReportFormatter;
    pub use crate::application::dto::{
        DataIssue, DataIssueKind, InventoryRecord, ReportData, ReportRequest,
    };
    pub use crate::application::services::{LicenseDetailCache, VersionDistanceResolver};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::compliance::domain::{
        ApplicationSummary, ComplianceIssue, ComplianceRecord, ComponentId, CvssVersion,
        InventoryId, InventoryItem, InventoryPriority, LicenseDetails, LicenseId,
        LicensePriority, Metric, ProjectDescriptor, ProjectId, ProjectInformation, ProjectNode,
        ProjectSummary, ProjectSummaryArrays, ReviewStatus, ReviewStatusTable, SeverityCounts,
        VersionDistance, VulnerabilitySummary,
    };
    pub use crate::compliance::policies::{
        ComplianceRuleEngine, NaturalVersionOrder, RuleOptions, VersionAssessment,
        VersionAssessor,
    };
    pub use crate::compliance::services::{
        HierarchyFlattener, MetricAggregator, ReportMetadataGenerator, ReviewStatusRollup,
        ReviewStatusTally, VersionDistanceCalculator,
    };
    pub use crate::ports::inbound::ReportGenerationPort;
    pub use crate::ports::outbound::{
        LicenseRecord, LicenseRepository, OutputPresenter, ProgressReporter, ProjectRepository,
        ReportFormatter, VersionCatalogRepository,
    };
    pub use crate::shared::Result;
}
