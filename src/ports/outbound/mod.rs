/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system, remote repositories, archives and the console.
pub mod inventory_reader;
pub mod license_file_repository;
pub mod metadata_repository;
pub mod progress_reporter;
pub mod report_writer;
pub mod resource_fetcher;

pub use inventory_reader::InventoryReader;
pub use license_file_repository::{LicenseFileRepository, LicenseFiles};
pub use metadata_repository::MetadataRepository;
pub use progress_reporter::ProgressReporter;
pub use report_writer::{ReportDocumentWriter, TextStyle};
pub use resource_fetcher::ResourceFetcher;
