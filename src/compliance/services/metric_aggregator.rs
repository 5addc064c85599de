use super::ReviewStatusTally;
use crate::compliance::domain::{
    ApplicationSummary, CvssVersion, Metric, ProjectId, ProjectInformation, ProjectSummary,
    ProjectSummaryArrays,
};
use indexmap::IndexMap;

/// MetricAggregator service folding per-project counts into chart data
///
/// Every output array is built by walking the same ordered summary map,
/// so element `i` of each array always belongs to the same project.
pub struct MetricAggregator;

impl MetricAggregator {
    /// Builds one project's summary from its review tally and roll-up counts
    ///
    /// A project whose roll-up counts could not be fetched passes `None`
    /// and reports zero license and vulnerability counts.
    pub fn summarize_project(
        project_name: &str,
        tally: &ReviewStatusTally,
        information: Option<&ProjectInformation>,
        cvss_version: CvssVersion,
    ) -> ProjectSummary {
        let mut summary = ProjectSummary::new(project_name);
        summary.num_approved = tally.approved;
        summary.num_rejected = tally.rejected;
        summary.num_draft = tally.draft;

        if let Some(information) = information {
            summary.licenses = information.licenses;
            summary.vulnerabilities = information.vulnerabilities.for_version(cvss_version);
        }
        summary
    }

    /// Turns the ordered per-project summaries into index-aligned arrays
    pub fn to_parallel_arrays(
        summaries: &IndexMap<ProjectId, ProjectSummary>,
        cvss_version: CvssVersion,
        include_compliance_information: bool,
    ) -> ProjectSummaryArrays {
        let project_names = summaries
            .values()
            .map(|summary| summary.project_name.clone())
            .collect();

        let metrics = Metric::for_cvss(cvss_version)
            .into_iter()
            .map(|metric| {
                let values = summaries.values().map(|s| s.value(metric)).collect();
                (metric, values)
            })
            .collect();

        ProjectSummaryArrays {
            project_names,
            metrics,
            cvss_version,
            include_compliance_information,
        }
    }

    /// Sums each metric array into a single application-level record
    pub fn to_application_summary(arrays: &ProjectSummaryArrays) -> ApplicationSummary {
        let totals = arrays
            .metrics
            .iter()
            .map(|(metric, values)| (*metric, values.iter().sum()))
            .collect();

        ApplicationSummary {
            totals,
            cvss_version: arrays.cvss_version,
            include_compliance_information: arrays.include_compliance_information,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{LicenseCounts, SeverityCounts, VulnerabilitySummary};

    fn information(p1: u64, critical: u64, high: u64) -> ProjectInformation {
        ProjectInformation {
            licenses: LicenseCounts {
                p1,
                p2: 1,
                p3: 0,
                unknown: 0,
            },
            vulnerabilities: VulnerabilitySummary {
                cvss_v2: Some(SeverityCounts {
                    critical: 0,
                    high: high + 1,
                    medium: 0,
                    low: 0,
                    none: 0,
                }),
                cvss_v3: Some(SeverityCounts {
                    critical,
                    high,
                    medium: 0,
                    low: 0,
                    none: 0,
                }),
            },
        }
    }

    fn summaries() -> IndexMap<ProjectId, ProjectSummary> {
        let tally = ReviewStatusTally {
            approved: 3,
            rejected: 1,
            draft: 0,
            unrecognized: 0,
        };
        let mut map = IndexMap::new();
        map.insert(
            ProjectId::new(10),
            MetricAggregator::summarize_project(
                "zeta",
                &tally,
                Some(&information(1, 2, 5)),
                CvssVersion::V3,
            ),
        );
        map.insert(
            ProjectId::new(4),
            MetricAggregator::summarize_project(
                "alpha",
                &ReviewStatusTally::default(),
                Some(&information(0, 0, 1)),
                CvssVersion::V3,
            ),
        );
        map.insert(
            ProjectId::new(7),
            MetricAggregator::summarize_project(
                "missing-info",
                &tally,
                None,
                CvssVersion::V3,
            ),
        );
        map
    }

    #[test]
    fn test_summarize_project_uses_selected_cvss_version() {
        let tally = ReviewStatusTally::default();
        let v2 = MetricAggregator::summarize_project(
            "p",
            &tally,
            Some(&information(0, 4, 2)),
            CvssVersion::V2,
        );
        assert_eq!(v2.vulnerabilities.high, 3);
        assert_eq!(v2.vulnerabilities.critical, 0);

        let v3 = MetricAggregator::summarize_project(
            "p",
            &tally,
            Some(&information(0, 4, 2)),
            CvssVersion::V3,
        );
        assert_eq!(v3.vulnerabilities.critical, 4);
    }

    #[test]
    fn test_parallel_arrays_follow_map_order() {
        let arrays = MetricAggregator::to_parallel_arrays(&summaries(), CvssVersion::V3, true);

        assert_eq!(arrays.project_names, vec!["zeta", "alpha", "missing-info"]);
        assert_eq!(arrays.metric(Metric::Approved), Some(&[3, 0, 3][..]));
        assert_eq!(arrays.metric(Metric::P1Licenses), Some(&[1, 0, 0][..]));
        assert_eq!(
            arrays.metric(Metric::CriticalVulnerabilities),
            Some(&[2, 0, 0][..])
        );
    }

    #[test]
    fn test_parallel_arrays_all_aligned() {
        let arrays = MetricAggregator::to_parallel_arrays(&summaries(), CvssVersion::V3, true);

        assert!(arrays.is_aligned());
        assert_eq!(arrays.metrics.len(), 12);
        for values in arrays.metrics.values() {
            assert_eq!(values.len(), 3);
        }
    }

    #[test]
    fn test_v2_arrays_omit_critical() {
        let arrays = MetricAggregator::to_parallel_arrays(&summaries(), CvssVersion::V2, false);

        assert!(arrays.metric(Metric::CriticalVulnerabilities).is_none());
        assert_eq!(arrays.metrics.len(), 11);
        assert!(arrays.is_aligned());
    }

    #[test]
    fn test_application_summary_sums_and_copies_flags() {
        let arrays = MetricAggregator::to_parallel_arrays(&summaries(), CvssVersion::V3, false);
        let application = MetricAggregator::to_application_summary(&arrays);

        assert_eq!(application.total(Metric::Approved), Some(6));
        assert_eq!(application.total(Metric::Rejected), Some(2));
        assert_eq!(application.total(Metric::P2Licenses), Some(2));
        assert_eq!(application.total(Metric::HighVulnerabilities), Some(6));
        assert_eq!(application.cvss_version, CvssVersion::V3);
        assert!(!application.include_compliance_information);
    }

    #[test]
    fn test_empty_summaries_produce_empty_arrays() {
        let arrays =
            MetricAggregator::to_parallel_arrays(&IndexMap::new(), CvssVersion::V3, true);
        let application = MetricAggregator::to_application_summary(&arrays);

        assert_eq!(arrays.project_count(), 0);
        assert!(arrays.is_aligned());
        assert_eq!(application.total(Metric::Draft), Some(0));
    }
}
