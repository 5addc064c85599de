pub mod compliance_issue;
pub mod identifiers;
pub mod inventory;
pub mod license_details;
pub mod project;
pub mod project_information;
pub mod report_metadata;
pub mod review_status_table;
pub mod summary;
pub mod version_distance;

pub use compliance_issue::{ComplianceIssue, ComplianceRecord};
pub use identifiers::{ComponentId, InventoryId, LicenseId, ProjectId};
pub use inventory::{
    CvssVersion, InventoryItem, InventoryPriority, ReviewStatus, SeverityCounts,
    VulnerabilitySummary,
};
pub use license_details::{LicenseDetails, LicensePriority};
pub use project::{ProjectDescriptor, ProjectNode, ROOT_PARENT};
pub use project_information::{LicenseCounts, ProjectInformation};
pub use report_metadata::ReportMetadata;
pub use review_status_table::ReviewStatusTable;
pub use summary::{ApplicationSummary, Metric, ProjectSummary, ProjectSummaryArrays};
pub use version_distance::VersionDistance;
