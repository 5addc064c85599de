use crate::compliance::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportMetadataGenerator service stamping each report run
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Metadata for this binary, using the compile-time package version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.report_id().starts_with("urn:uuid:"));
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportMetadataGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "compliance-report");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let metadata = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0");
        let timestamp = metadata.timestamp();

        assert!(timestamp.contains('T'));
        assert!(timestamp.contains('+') || timestamp.contains('Z'));
    }

    #[test]
    fn test_report_ids_are_unique() {
        let first = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0");
        let second = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_ne!(first.report_id(), second.report_id());
        let uuid_part = first.report_id().strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
    }
}
