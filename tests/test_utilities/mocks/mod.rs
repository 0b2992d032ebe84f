/// Mock implementations for testing
mod mock_license_file_repository;
mod mock_metadata_repository;
mod mock_progress_reporter;
mod mock_resource_fetcher;

pub use mock_license_file_repository::MockLicenseFileRepository;
pub use mock_metadata_repository::MockMetadataRepository;
pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
pub use mock_resource_fetcher::MockResourceFetcher;
