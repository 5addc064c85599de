use crate::application::dto::{DataIssue, DataIssueKind, InventoryRecord, ReportData, ReportRequest};
use crate::application::services::{LicenseDetailCache, VersionDistanceResolver};
use crate::compliance::domain::{
    InventoryId, InventoryItem, ProjectDescriptor, ProjectId, ProjectInformation, ProjectNode,
    ProjectSummary, ReviewStatusTable,
};
use crate::compliance::policies::ComplianceRuleEngine;
use crate::compliance::services::{
    HierarchyFlattener, MetricAggregator, ReportMetadataGenerator, ReviewStatusRollup,
    ReviewStatusTally,
};
use crate::ports::inbound::ReportGenerationPort;
use crate::ports::outbound::{
    LicenseRepository, ProgressReporter, ProjectRepository, VersionCatalogRepository,
};
use crate::shared::Result;
use anyhow::Context;
use indexmap::IndexMap;
use std::collections::HashSet;

/// GenerateReportUseCase - Core use case for compliance report generation
///
/// This use case orchestrates the report workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `PREPO` - ProjectRepository implementation
/// * `LREPO` - LicenseRepository implementation
/// * `VREPO` - VersionCatalogRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<PREPO, LREPO, VREPO, PR> {
    project_repository: PREPO,
    license_repository: LREPO,
    version_catalog_repository: VREPO,
    progress_reporter: PR,
}

/// Per-run accumulator filled while projects are processed
#[derive(Default)]
struct RunState {
    processed: HashSet<ProjectId>,
    inventory_data: IndexMap<InventoryId, InventoryRecord>,
    project_inventory_count: IndexMap<ProjectId, usize>,
    summaries: IndexMap<ProjectId, ProjectSummary>,
    initial_statuses: ReviewStatusTable,
    data_issues: Vec<DataIssue>,
}

/// Run-scoped collaborators shared by every project of one report
struct RunContext<'a, LREPO: LicenseRepository, VREPO: VersionCatalogRepository> {
    request: &'a ReportRequest,
    rule_engine: ComplianceRuleEngine,
    licenses: LicenseDetailCache<'a, LREPO>,
    versions: VersionDistanceResolver<'a, VREPO>,
}

impl<PREPO, LREPO, VREPO, PR> GenerateReportUseCase<PREPO, LREPO, VREPO, PR>
where
    PREPO: ProjectRepository,
    LREPO: LicenseRepository,
    VREPO: VersionCatalogRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        project_repository: PREPO,
        license_repository: LREPO,
        version_catalog_repository: VREPO,
        progress_reporter: PR,
    ) -> Self {
        Self {
            project_repository,
            license_repository,
            version_catalog_repository,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Root project and report options
    ///
    /// # Returns
    /// ReportData with the project list, enriched inventory, summaries
    /// and rolled-up review statuses
    pub fn execute(&self, request: ReportRequest) -> Result<ReportData> {
        // Step 1: Fetch and flatten the hierarchy
        let hierarchy = self.load_hierarchy(&request)?;
        let project_list = HierarchyFlattener::flatten(
            &hierarchy,
            &request.base_url,
            request.include_child_projects,
        )?;
        self.progress_reporter.report(&format!(
            "✅ Found {} project(s) in the hierarchy",
            project_list.len()
        ));

        // Step 2: Evaluate every project's inventory
        let state = self.process_projects(&request, &project_list);

        // Step 3: Aggregate per-project metrics
        let project_summary_data = MetricAggregator::to_parallel_arrays(
            &state.summaries,
            request.cvss_version,
            request.include_compliance_information,
        );
        let application_summary_data =
            MetricAggregator::to_application_summary(&project_summary_data);

        // Step 4: Roll review statuses up the tree
        let rollup_tree = if request.include_child_projects {
            hierarchy.clone()
        } else {
            hierarchy.without_children()
        };
        let project_review_status =
            ReviewStatusRollup::rollup(&rollup_tree, state.initial_statuses)?;

        let report = ReportData {
            report_name: request.report_name.clone(),
            project_name: hierarchy.name.clone(),
            project_id: hierarchy.id,
            metadata: ReportMetadataGenerator::generate_default_metadata(),
            project_list,
            inventory_data: state.inventory_data,
            project_summary_data,
            application_summary_data,
            project_inventory_count: state.project_inventory_count,
            project_review_status,
            data_issues: state.data_issues,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Report generated: {} inventory item(s), overall status {}",
            report.inventory_data.len(),
            report.overall_status()
        ));
        Ok(report)
    }

    /// Fetches the project tree, failing the run if it is unavailable
    fn load_hierarchy(&self, request: &ReportRequest) -> Result<ProjectNode> {
        self.progress_reporter.report(&format!(
            "📖 Loading project hierarchy for project {}",
            request.project_id
        ));
        let hierarchy = self
            .project_repository
            .fetch_hierarchy(request.project_id)
            .with_context(|| {
                format!("Failed to load hierarchy of project {}", request.project_id)
            })?;
        tracing::info!(
            project_id = %hierarchy.id,
            project_name = %hierarchy.name,
            "Loaded project hierarchy"
        );
        Ok(hierarchy)
    }

    /// Processes each distinct project once, in flattened order
    fn process_projects(
        &self,
        request: &ReportRequest,
        project_list: &[ProjectDescriptor],
    ) -> RunState {
        let context = RunContext {
            request,
            rule_engine: ComplianceRuleEngine::new(request.rule_options()),
            licenses: LicenseDetailCache::new(&self.license_repository),
            versions: VersionDistanceResolver::new(
                &self.version_catalog_repository,
                &request.version_exempt_components,
            ),
        };
        let mut state = RunState::default();

        let total = project_list.len();
        for (index, descriptor) in project_list.iter().enumerate() {
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&descriptor.project_name),
            );
            if !state.processed.insert(descriptor.project_id) {
                tracing::debug!(
                    project_id = %descriptor.project_id,
                    unique_id = %descriptor.unique_id,
                    "Project already processed at another position"
                );
                continue;
            }
            self.process_project(&context, descriptor, &mut state);
        }

        tracing::info!(
            projects = state.summaries.len(),
            licenses = context.licenses.len(),
            catalogs = context.versions.catalogs_fetched(),
            "Processed project inventories"
        );
        state
    }

    fn process_project(
        &self,
        context: &RunContext<'_, LREPO, VREPO>,
        descriptor: &ProjectDescriptor,
        state: &mut RunState,
    ) {
        let project_id = descriptor.project_id;
        let project_name = descriptor.project_name.as_str();

        let information = self.fetch_information(descriptor, state);
        let items = self.fetch_inventory(descriptor, state);

        let tally = ReviewStatusTally::from_items(&items);
        if tally.unrecognized > 0 {
            self.record_issue(
                state,
                DataIssue::new(
                    project_id,
                    project_name,
                    DataIssueKind::UnknownReviewStatus,
                    format!(
                        "{} inventory item(s) have an unrecognized review status",
                        tally.unrecognized
                    ),
                ),
            );
        }

        for item in &items {
            let record = self.evaluate_item(context, descriptor, item);
            state.inventory_data.insert(item.id, record);
        }

        state.project_inventory_count.insert(project_id, items.len());
        state.initial_statuses.set(project_id, tally.initial_status());
        state.summaries.insert(
            project_id,
            MetricAggregator::summarize_project(
                project_name,
                &tally,
                information.as_ref(),
                context.request.cvss_version,
            ),
        );
    }

    fn fetch_information(
        &self,
        descriptor: &ProjectDescriptor,
        state: &mut RunState,
    ) -> Option<ProjectInformation> {
        match self
            .project_repository
            .fetch_project_information(descriptor.project_id)
        {
            Ok(information) => Some(information),
            Err(e) => {
                self.record_issue(
                    state,
                    DataIssue::new(
                        descriptor.project_id,
                        &descriptor.project_name,
                        DataIssueKind::ProjectInformationUnavailable,
                        format!("{:#}", e),
                    ),
                );
                None
            }
        }
    }

    fn fetch_inventory(
        &self,
        descriptor: &ProjectDescriptor,
        state: &mut RunState,
    ) -> Vec<InventoryItem> {
        match self.project_repository.fetch_inventory(descriptor.project_id) {
            Ok(items) => items,
            Err(e) => {
                self.record_issue(
                    state,
                    DataIssue::new(
                        descriptor.project_id,
                        &descriptor.project_name,
                        DataIssueKind::InventoryUnavailable,
                        format!("{:#}", e),
                    ),
                );
                Vec::new()
            }
        }
    }

    fn evaluate_item(
        &self,
        context: &RunContext<'_, LREPO, VREPO>,
        descriptor: &ProjectDescriptor,
        item: &InventoryItem,
    ) -> InventoryRecord {
        let license = context.licenses.get(item.selected_license_id);
        let compliance_issues = context
            .rule_engine
            .evaluate(item, &license, &context.versions);
        tracing::debug!(
            inventory_id = %item.id,
            issues = compliance_issues.len(),
            "Evaluated inventory item"
        );

        InventoryRecord {
            project_id: descriptor.project_id,
            project_name: descriptor.project_name.clone(),
            project_link: descriptor.project_link.clone(),
            inventory_id: item.id,
            inventory_item_name: item.name.clone(),
            inventory_link: format!("{}&pinv={}", descriptor.project_link, item.id),
            priority: item.priority,
            component_name: item.component_name.clone(),
            component_version_name: item.component_version_name.clone(),
            component_url: item.url.clone(),
            review_status: item.review_status.clone(),
            selected_license_name: license.name().to_string(),
            selected_license_url: license.url().to_string(),
            selected_license_priority: license.priority(),
            vulnerabilities: item
                .vulnerability_summary
                .for_version(context.request.cvss_version),
            compliance_issues,
        }
    }

    fn record_issue(&self, state: &mut RunState, issue: DataIssue) {
        tracing::warn!(
            project_id = %issue.project_id,
            kind = ?issue.kind,
            "{}",
            issue.details
        );
        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: project '{}' ({}): {}",
            issue.project_name, issue.project_id, issue.details
        ));
        state.data_issues.push(issue);
    }
}

impl<PREPO, LREPO, VREPO, PR> ReportGenerationPort for GenerateReportUseCase<PREPO, LREPO, VREPO, PR>
where
    PREPO: ProjectRepository,
    LREPO: LicenseRepository,
    VREPO: VersionCatalogRepository,
    PR: ProgressReporter,
{
    fn generate_report(&self, request: ReportRequest) -> Result<ReportData> {
        self.execute(request)
    }
}
