/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (inventory service, file system, console).
pub mod formatter;
pub mod license_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_repository;
pub mod version_catalog_repository;

pub use formatter::ReportFormatter;
pub use license_repository::{LicenseRecord, LicenseRepository};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_repository::ProjectRepository;
pub use version_catalog_repository::VersionCatalogRepository;
