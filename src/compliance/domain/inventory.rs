use super::{ComponentId, InventoryId, LicenseId};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of an inventory item or, after rollup, of a project.
///
/// Variants are declared best-to-worst so the derived `Ord` gives
/// `Approved < Draft < Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReviewStatus {
    Approved,
    Draft,
    Rejected,
}

impl FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Approved" => Ok(ReviewStatus::Approved),
            "Draft" => Ok(ReviewStatus::Draft),
            "Rejected" => Ok(ReviewStatus::Rejected),
            other => Err(format!("Unknown review status: {}", other)),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "Approved"),
            ReviewStatus::Draft => write!(f, "Draft"),
            ReviewStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Business priority assigned to an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryPriority {
    High,
    Medium,
    Low,
    #[serde(other)]
    Other,
}

/// CVSS scoring version used for vulnerability buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CvssVersion {
    #[serde(rename = "2.0")]
    V2,
    #[serde(rename = "3.x")]
    V3,
}

impl CvssVersion {
    /// Only CVSS v3 has a Critical bucket
    pub fn tracks_critical(&self) -> bool {
        matches!(self, CvssVersion::V3)
    }
}

impl FromStr for CvssVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "2.0" | "2" | "v2" => Ok(CvssVersion::V2),
            "3.x" | "3" | "v3" => Ok(CvssVersion::V3),
            _ => Err(format!(
                "Invalid CVSS version: {}. Please specify '2.0' or '3.x'",
                s
            )),
        }
    }
}

impl fmt::Display for CvssVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvssVersion::V2 => write!(f, "2.0"),
            CvssVersion::V3 => write!(f, "3.x"),
        }
    }
}

/// Vulnerability counts bucketed by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    /// CVSS v2 reports this bucket as "Unknown"
    #[serde(alias = "Unknown")]
    pub none: u64,
}

impl SeverityCounts {
    pub fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low + self.none
    }
}

/// Per-CVSS-version vulnerability counts of one item or project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    #[serde(rename = "CvssV2", default, skip_serializing_if = "Option::is_none")]
    pub cvss_v2: Option<SeverityCounts>,
    #[serde(rename = "CvssV3", default, skip_serializing_if = "Option::is_none")]
    pub cvss_v3: Option<SeverityCounts>,
}

impl VulnerabilitySummary {
    /// Counts for the requested scoring version; missing data counts as zero.
    /// Under CVSS v2 the critical bucket is always zero.
    pub fn for_version(&self, version: CvssVersion) -> SeverityCounts {
        match version {
            CvssVersion::V3 => self.cvss_v3.unwrap_or_default(),
            CvssVersion::V2 => SeverityCounts {
                critical: 0,
                ..self.cvss_v2.unwrap_or_default()
            },
        }
    }
}

/// One recorded usage of a component version inside a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryId,
    pub name: String,
    pub component_id: ComponentId,
    pub component_name: String,
    #[serde(default)]
    pub component_version_name: String,
    #[serde(default = "default_priority")]
    pub priority: InventoryPriority,
    #[serde(default, deserialize_with = "deserialize_license_id")]
    pub selected_license_id: Option<LicenseId>,
    /// Raw upstream value; see [`InventoryItem::parsed_review_status`]
    pub review_status: String,
    #[serde(default)]
    pub vulnerability_summary: VulnerabilitySummary,
    /// Component home page
    #[serde(default)]
    pub url: String,
}

impl InventoryItem {
    /// The review status, or `None` when upstream sent something unrecognized
    pub fn parsed_review_status(&self) -> Option<ReviewStatus> {
        self.review_status.parse().ok()
    }

    /// Whether the selected version is blank or a placeholder
    pub fn has_unknown_version(&self) -> bool {
        let version = self.component_version_name.trim();
        version.is_empty()
            || version.eq_ignore_ascii_case("n/a")
            || version.eq_ignore_ascii_case("unknown")
    }
}

fn default_priority() -> InventoryPriority {
    InventoryPriority::Other
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLicenseId {
    Numeric(u64),
    Text(String),
}

/// Accepts a numeric id, a numeric string, or a placeholder such as "N/A"
/// (work-in-progress items have no license selected yet).
fn deserialize_license_id<'de, D>(deserializer: D) -> std::result::Result<Option<LicenseId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawLicenseId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawLicenseId::Numeric(id)) => Some(LicenseId::new(id)),
        Some(RawLicenseId::Text(text)) => text.trim().parse::<u64>().ok().map(LicenseId::new),
        None => None,
    })
}
