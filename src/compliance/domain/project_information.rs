use super::VulnerabilitySummary;
use serde::{Deserialize, Serialize};

/// Distinct-license counts per priority tier, as rolled up by the inventory service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseCounts {
    #[serde(rename = "P1")]
    pub p1: u64,
    #[serde(rename = "P2")]
    pub p2: u64,
    #[serde(rename = "P3")]
    pub p3: u64,
    #[serde(rename = "Unknown")]
    pub unknown: u64,
}

/// Project-level roll-up counts supplied by the inventory service.
///
/// These are independent of the per-item data but are expected to
/// reconcile with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInformation {
    #[serde(default)]
    pub licenses: LicenseCounts,
    #[serde(default)]
    pub vulnerabilities: VulnerabilitySummary,
}
