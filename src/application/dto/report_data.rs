use crate::compliance::domain::{
    ApplicationSummary, ComplianceRecord, InventoryId, InventoryPriority, LicensePriority,
    ProjectDescriptor, ProjectId, ReportMetadata, ReviewStatus, ReviewStatusTable, SeverityCounts,
    ProjectSummaryArrays,
};
use indexmap::IndexMap;
use serde::Serialize;

/// ReportData - Aggregated output handed to the rendering layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub report_name: String,
    pub project_name: String,
    #[serde(rename = "projectID")]
    pub project_id: ProjectId,
    pub metadata: ReportMetadata,
    pub project_list: Vec<ProjectDescriptor>,
    pub inventory_data: IndexMap<InventoryId, InventoryRecord>,
    pub project_summary_data: ProjectSummaryArrays,
    pub application_summary_data: ApplicationSummary,
    pub project_inventory_count: IndexMap<ProjectId, usize>,
    pub project_review_status: ReviewStatusTable,
    pub data_issues: Vec<DataIssue>,
}

impl ReportData {
    /// Rolled-up review status of the root project
    pub fn overall_status(&self) -> ReviewStatus {
        self.project_review_status
            .get(self.project_id)
            .unwrap_or(ReviewStatus::Approved)
    }
}

/// One inventory item enriched with license details and compliance findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    #[serde(rename = "projectID")]
    pub project_id: ProjectId,
    pub project_name: String,
    pub project_link: String,
    #[serde(rename = "inventoryID")]
    pub inventory_id: InventoryId,
    pub inventory_item_name: String,
    pub inventory_link: String,
    pub priority: InventoryPriority,
    pub component_name: String,
    pub component_version_name: String,
    pub component_url: String,
    pub review_status: String,
    pub selected_license_name: String,
    pub selected_license_url: String,
    pub selected_license_priority: LicensePriority,
    pub vulnerabilities: SeverityCounts,
    pub compliance_issues: ComplianceRecord,
}

/// Category of a non-fatal, per-project data problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DataIssueKind {
    ProjectInformationUnavailable,
    InventoryUnavailable,
    UnknownReviewStatus,
}

/// A problem confined to one project that did not stop the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIssue {
    #[serde(rename = "projectID")]
    pub project_id: ProjectId,
    pub project_name: String,
    pub kind: DataIssueKind,
    pub details: String,
}

impl DataIssue {
    pub fn new(project_id: ProjectId, project_name: &str, kind: DataIssueKind, details: String) -> Self {
        Self {
            project_id,
            project_name: project_name.to_string(),
            kind,
            details,
        }
    }
}
