use crate::compliance::domain::{
    ComplianceIssue, ComplianceRecord, ComponentId, CvssVersion, InventoryItem, LicenseDetails,
    LicensePriority, ReviewStatus, VersionDistance,
};

/// Outcome of looking up a component version against its release catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionAssessment {
    /// The component is exempt from analysis or its catalog was unavailable
    NotAnalyzed,
    Resolved(VersionDistance),
}

/// Source of version assessments for the rule engine.
///
/// Only consulted for items whose version is known.
pub trait VersionAssessor {
    fn assess(&self, component_id: ComponentId, version: &str) -> VersionAssessment;
}

/// Options the rules depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    pub include_compliance_information: bool,
    pub cvss_version: CvssVersion,
    /// Distance at which a version counts as old; always at least 1
    pub max_versions_back: u32,
}

/// ComplianceRuleEngine policy evaluating one inventory item
///
/// Rules are independent and all of them run; the resulting record lists
/// issues in rule order:
/// 1. rejected item
/// 2. draft (unreviewed) item, only when not rejected
/// 3. any vulnerability under the active CVSS version
/// 4. P1 license
/// 5. version checks: unknown, not analyzed, old, or not in catalog
/// 6. no license name
pub struct ComplianceRuleEngine {
    options: RuleOptions,
}

impl ComplianceRuleEngine {
    pub fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Evaluates every rule against `item`
    ///
    /// # Arguments
    /// * `item` - The inventory item under evaluation
    /// * `license` - Resolved details of the item's selected license
    /// * `versions` - Consulted only when the item's version is known
    ///
    /// # Returns
    /// The item's compliance record; always empty when compliance
    /// information is switched off
    pub fn evaluate(
        &self,
        item: &InventoryItem,
        license: &LicenseDetails,
        versions: &dyn VersionAssessor,
    ) -> ComplianceRecord {
        let mut record = ComplianceRecord::new();
        if !self.options.include_compliance_information {
            return record;
        }

        match item.parsed_review_status() {
            Some(ReviewStatus::Rejected) => record.raise(
                ComplianceIssue::ItemRejected,
                "This item has been rejected for use.".to_string(),
            ),
            Some(ReviewStatus::Draft) => record.raise(
                ComplianceIssue::ItemNotReviewed,
                "This item has not been reviewed.".to_string(),
            ),
            Some(ReviewStatus::Approved) | None => {}
        }

        let vulnerabilities = item
            .vulnerability_summary
            .for_version(self.options.cvss_version)
            .total();
        if vulnerabilities > 0 {
            record.raise(
                ComplianceIssue::SecurityVulnerabilities,
                format!(
                    "This item has {} known security vulnerabilit{}.",
                    vulnerabilities,
                    if vulnerabilities == 1 { "y" } else { "ies" }
                ),
            );
        }

        if license.priority() == LicensePriority::P1 {
            record.raise(
                ComplianceIssue::P1License,
                format!(
                    "The selected license {} is a P1 (strong copyleft) license.",
                    license.name()
                ),
            );
        }

        self.evaluate_version(item, versions, &mut record);

        if license.is_unspecified() {
            record.raise(
                ComplianceIssue::UnspecifiedLicense,
                "No license has been selected for this item.".to_string(),
            );
        }

        record
    }

    fn evaluate_version(
        &self,
        item: &InventoryItem,
        versions: &dyn VersionAssessor,
        record: &mut ComplianceRecord,
    ) {
        if item.has_unknown_version() {
            record.raise(
                ComplianceIssue::UnknownVersion,
                "The version of this component is unknown.".to_string(),
            );
            return;
        }

        let version = item.component_version_name.as_str();
        match versions.assess(item.component_id, version) {
            VersionAssessment::NotAnalyzed => record.raise(
                ComplianceIssue::VersionNotAnalyzed,
                format!(
                    "Versions of {} are not analyzed; the age of {} is not known.",
                    item.component_name, version
                ),
            ),
            VersionAssessment::Resolved(distance)
                if distance.versions_back() >= i64::from(self.options.max_versions_back) =>
            {
                record.raise(
                    ComplianceIssue::OldVersion,
                    format!(
                        "Version {} is {} versions behind the latest version {}.",
                        version,
                        distance.versions_back(),
                        distance.latest_version()
                    ),
                )
            }
            VersionAssessment::Resolved(distance) if distance.is_unmatched() => record.raise(
                ComplianceIssue::InvalidVersion,
                format!(
                    "Version {} was not found among the known versions of {}.",
                    version, item.component_name
                ),
            ),
            VersionAssessment::Resolved(_) => {}
        }
    }
}
