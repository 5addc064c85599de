/// Mock implementations for testing
mod mock_license_repository;
mod mock_progress_reporter;
mod mock_project_repository;
mod mock_version_catalog_repository;

pub use mock_license_repository::MockLicenseRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_repository::MockProjectRepository;
pub use mock_version_catalog_repository::MockVersionCatalogRepository;
