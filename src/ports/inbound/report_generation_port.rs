use crate::application::dto::{ReportData, ReportRequest};
use crate::shared::Result;

/// ReportGenerationPort - Inbound port for the compliance report use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger report generation. It represents the application's public API.
pub trait ReportGenerationPort {
    /// Generates the aggregated report data for one project tree
    ///
    /// # Arguments
    /// * `request` - Root project and report options
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project hierarchy cannot be fetched
    /// - The hierarchy exceeds the supported depth
    ///
    /// Failures confined to a single project are recorded as data issues
    /// in the returned report instead.
    fn generate_report(&self, request: ReportRequest) -> Result<ReportData>;
}
