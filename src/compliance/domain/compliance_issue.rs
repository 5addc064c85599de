use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Closed vocabulary of compliance findings for one inventory item.
///
/// The serialized form of each variant is the human-facing issue name the
/// rendering layer keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplianceIssue {
    #[serde(rename = "Item rejected")]
    ItemRejected,
    #[serde(rename = "Item not reviewed")]
    ItemNotReviewed,
    #[serde(rename = "Security vulnerabilities")]
    SecurityVulnerabilities,
    #[serde(rename = "P1 license")]
    P1License,
    #[serde(rename = "Unknown version")]
    UnknownVersion,
    #[serde(rename = "Version not analyzed")]
    VersionNotAnalyzed,
    #[serde(rename = "Old version")]
    OldVersion,
    #[serde(rename = "Invalid Version")]
    InvalidVersion,
    #[serde(rename = "Unspecified license")]
    UnspecifiedLicense,
}

impl ComplianceIssue {
    pub fn name(&self) -> &'static str {
        match self {
            ComplianceIssue::ItemRejected => "Item rejected",
            ComplianceIssue::ItemNotReviewed => "Item not reviewed",
            ComplianceIssue::SecurityVulnerabilities => "Security vulnerabilities",
            ComplianceIssue::P1License => "P1 license",
            ComplianceIssue::UnknownVersion => "Unknown version",
            ComplianceIssue::VersionNotAnalyzed => "Version not analyzed",
            ComplianceIssue::OldVersion => "Old version",
            ComplianceIssue::InvalidVersion => "Invalid Version",
            ComplianceIssue::UnspecifiedLicense => "Unspecified license",
        }
    }
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Issues raised for one inventory item, in rule-evaluation order.
///
/// Empty means the item is compliant. Each issue appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComplianceRecord {
    issues: IndexMap<ComplianceIssue, String>,
}

impl ComplianceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue; a second report of the same issue keeps the first message
    pub fn raise(&mut self, issue: ComplianceIssue, message: String) {
        self.issues.entry(issue).or_insert(message);
    }

    pub fn contains(&self, issue: ComplianceIssue) -> bool {
        self.issues.contains_key(&issue)
    }

    pub fn message(&self, issue: ComplianceIssue) -> Option<&str> {
        self.issues.get(&issue).map(String::as_str)
    }

    pub fn issues(&self) -> impl Iterator<Item = (ComplianceIssue, &str)> {
        self.issues.iter().map(|(issue, msg)| (*issue, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_names_match_serialized_keys() {
        let all = [
            ComplianceIssue::ItemRejected,
            ComplianceIssue::ItemNotReviewed,
            ComplianceIssue::SecurityVulnerabilities,
            ComplianceIssue::P1License,
            ComplianceIssue::UnknownVersion,
            ComplianceIssue::VersionNotAnalyzed,
            ComplianceIssue::OldVersion,
            ComplianceIssue::InvalidVersion,
            ComplianceIssue::UnspecifiedLicense,
        ];
        for issue in all {
            let json = serde_json::to_string(&issue).unwrap();
            assert_eq!(json, format!("\"{}\"", issue.name()));
        }
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut record = ComplianceRecord::new();
        record.raise(ComplianceIssue::SecurityVulnerabilities, "3 found".to_string());
        record.raise(ComplianceIssue::ItemNotReviewed, "draft".to_string());

        let order: Vec<ComplianceIssue> = record.issues().map(|(issue, _)| issue).collect();
        assert_eq!(
            order,
            vec![
                ComplianceIssue::SecurityVulnerabilities,
                ComplianceIssue::ItemNotReviewed
            ]
        );
    }

    #[test]
    fn test_record_at_most_one_entry_per_issue() {
        let mut record = ComplianceRecord::new();
        record.raise(ComplianceIssue::OldVersion, "first".to_string());
        record.raise(ComplianceIssue::OldVersion, "second".to_string());

        assert_eq!(record.len(), 1);
        assert_eq!(record.message(ComplianceIssue::OldVersion), Some("first"));
    }

    #[test]
    fn test_record_serializes_as_name_keyed_map() {
        let mut record = ComplianceRecord::new();
        record.raise(ComplianceIssue::P1License, "GPL-3.0-only".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"P1 license":"GPL-3.0-only"}"#);
    }

    #[test]
    fn test_empty_record() {
        let record = ComplianceRecord::new();
        assert!(record.is_empty());
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }
}
