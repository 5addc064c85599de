use super::{CvssVersion, LicenseCounts, SeverityCounts};
use indexmap::IndexMap;
use serde::Serialize;

/// Numeric metric tracked per project and summed per application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    #[serde(rename = "numApproved")]
    Approved,
    #[serde(rename = "numRejected")]
    Rejected,
    #[serde(rename = "numDraft")]
    Draft,
    #[serde(rename = "numP1Licenses")]
    P1Licenses,
    #[serde(rename = "numP2Licenses")]
    P2Licenses,
    #[serde(rename = "numP3Licenses")]
    P3Licenses,
    #[serde(rename = "numNALicenses")]
    NaLicenses,
    #[serde(rename = "numCriticalVulnerabilities")]
    CriticalVulnerabilities,
    #[serde(rename = "numHighVulnerabilities")]
    HighVulnerabilities,
    #[serde(rename = "numMediumVulnerabilities")]
    MediumVulnerabilities,
    #[serde(rename = "numLowVulnerabilities")]
    LowVulnerabilities,
    #[serde(rename = "numNoneVulnerabilities")]
    NoneVulnerabilities,
}

impl Metric {
    /// The metric set for a run. Critical only exists under CVSS v3.
    pub fn for_cvss(version: CvssVersion) -> Vec<Metric> {
        let mut metrics = vec![
            Metric::Approved,
            Metric::Rejected,
            Metric::Draft,
            Metric::P1Licenses,
            Metric::P2Licenses,
            Metric::P3Licenses,
            Metric::NaLicenses,
        ];
        if version.tracks_critical() {
            metrics.push(Metric::CriticalVulnerabilities);
        }
        metrics.extend([
            Metric::HighVulnerabilities,
            Metric::MediumVulnerabilities,
            Metric::LowVulnerabilities,
            Metric::NoneVulnerabilities,
        ]);
        metrics
    }
}

/// Per-project counts feeding the charts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_name: String,
    pub num_approved: u64,
    pub num_rejected: u64,
    pub num_draft: u64,
    pub licenses: LicenseCounts,
    pub vulnerabilities: SeverityCounts,
}

impl ProjectSummary {
    pub fn new(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            ..Self::default()
        }
    }

    pub fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Approved => self.num_approved,
            Metric::Rejected => self.num_rejected,
            Metric::Draft => self.num_draft,
            Metric::P1Licenses => self.licenses.p1,
            Metric::P2Licenses => self.licenses.p2,
            Metric::P3Licenses => self.licenses.p3,
            Metric::NaLicenses => self.licenses.unknown,
            Metric::CriticalVulnerabilities => self.vulnerabilities.critical,
            Metric::HighVulnerabilities => self.vulnerabilities.high,
            Metric::MediumVulnerabilities => self.vulnerabilities.medium,
            Metric::LowVulnerabilities => self.vulnerabilities.low,
            Metric::NoneVulnerabilities => self.vulnerabilities.none,
        }
    }
}

/// Index-aligned metric arrays: element `i` of every array belongs to
/// `project_names[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryArrays {
    pub project_names: Vec<String>,
    #[serde(flatten)]
    pub metrics: IndexMap<Metric, Vec<u64>>,
    pub cvss_version: CvssVersion,
    pub include_compliance_information: bool,
}

impl ProjectSummaryArrays {
    pub fn project_count(&self) -> usize {
        self.project_names.len()
    }

    pub fn metric(&self, metric: Metric) -> Option<&[u64]> {
        self.metrics.get(&metric).map(Vec::as_slice)
    }

    /// Whether every metric array has one element per project
    pub fn is_aligned(&self) -> bool {
        self.metrics
            .values()
            .all(|values| values.len() == self.project_names.len())
    }
}

/// Application-wide totals; the non-numeric flags are carried through as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    #[serde(flatten)]
    pub totals: IndexMap<Metric, u64>,
    pub cvss_version: CvssVersion,
    pub include_compliance_information: bool,
}

impl ApplicationSummary {
    pub fn total(&self, metric: Metric) -> Option<u64> {
        self.totals.get(&metric).copied()
    }
}
