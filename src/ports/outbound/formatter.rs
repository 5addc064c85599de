use crate::application::dto::ReportData;
use crate::shared::Result;

/// ReportFormatter port for serializing the aggregated report
///
/// The rendering collaborator consumes this output; document layout
/// is not the formatter's concern.
pub trait ReportFormatter {
    /// Formats the report data
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ReportData) -> Result<String>;
}
