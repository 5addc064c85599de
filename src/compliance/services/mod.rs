mod hierarchy_flattener;
mod metric_aggregator;
mod report_metadata_generator;
mod review_status_rollup;
mod review_status_tally;
mod version_distance_calculator;

pub use hierarchy_flattener::HierarchyFlattener;
pub use metric_aggregator::MetricAggregator;
pub use report_metadata_generator::ReportMetadataGenerator;
pub use review_status_rollup::ReviewStatusRollup;
pub use review_status_tally::ReviewStatusTally;
pub use version_distance_calculator::VersionDistanceCalculator;

/// Maximum hierarchy depth walked by the recursive services.
/// Deeper trees are treated as malformed input.
pub const MAX_HIERARCHY_DEPTH: usize = 100;
