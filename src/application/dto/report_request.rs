use crate::compliance::domain::{ComponentId, CvssVersion, ProjectId};
use crate::compliance::policies::RuleOptions;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Root of the project tree to report on
    pub project_id: ProjectId,
    pub report_name: String,
    /// Server URL used for project and inventory links
    pub base_url: String,
    pub include_child_projects: bool,
    pub include_compliance_information: bool,
    pub cvss_version: CvssVersion,
    /// Distance at which a version counts as old; at least 1
    pub max_versions_back: u32,
    /// Components whose version catalogs are never fetched
    pub version_exempt_components: Vec<ComponentId>,
}

impl ReportRequest {
    pub const DEFAULT_REPORT_NAME: &'static str = "Project Compliance Report";
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8888";
    pub const DEFAULT_MAX_VERSIONS_BACK: u32 = 10;

    /// Request with every option at its default
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            report_name: Self::DEFAULT_REPORT_NAME.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            include_child_projects: true,
            include_compliance_information: true,
            cvss_version: CvssVersion::V3,
            max_versions_back: Self::DEFAULT_MAX_VERSIONS_BACK,
            version_exempt_components: Vec::new(),
        }
    }

    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            include_compliance_information: self.include_compliance_information,
            cvss_version: self.cvss_version,
            max_versions_back: self.max_versions_back,
        }
    }
}
