/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod report_data;
mod report_request;

pub use report_data::{DataIssue, DataIssueKind, InventoryRecord, ReportData};
pub use report_request::ReportRequest;
