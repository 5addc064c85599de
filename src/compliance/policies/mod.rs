mod compliance_rules;
mod natural_version_order;

pub use compliance_rules::{ComplianceRuleEngine, RuleOptions, VersionAssessment, VersionAssessor};
pub use natural_version_order::NaturalVersionOrder;
