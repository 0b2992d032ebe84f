//! dependency-license-report - third party license report generator
//!
//! This library resolves licensing metadata for the resolved binary
//! dependencies of a project and renders an HTML report that links each
//! dependency to its declared licenses and to the license files bundled in
//! its archive. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_generation`): Coordinates, descriptors, selection and filtering
//! - **Application Layer** (`application`): The report use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Repositories, caches, archive scanning, HTML output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dependency_license_report::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let inventory = FileSystemReader::new().read_inventory(Path::new("dependency-inventory.json"))?;
//! let fetcher = HttpResourceFetcher::new(DEFAULT_TIMEOUT)?;
//! let metadata_repository = MetadataResolver::new(inventory.repositories.clone(), fetcher);
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(
//!     metadata_repository,
//!     ArchiveScanner::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let metadata = ReportMetadataGenerator::generate_default_metadata();
//! let mut writer = ReportWriterFactory::create(Path::new("build/licenses"), &inventory.project.name, &metadata);
//! let request = ReportRequest::new(inventory, vec![], vec![]);
//! let response = use_case.execute(request, &mut writer)?;
//! println!("{}", response.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::ArchiveScanner;
    pub use crate::adapters::outbound::cache::{ResolutionCache, RetentionPolicy};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReader;
    pub use crate::adapters::outbound::html::HtmlReportWriter;
    pub use crate::adapters::outbound::metadata::MetadataResolver;
    pub use crate::adapters::outbound::network::{HttpResourceFetcher, DEFAULT_TIMEOUT};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::factories::ReportWriterFactory;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::outbound::{
        InventoryReader, LicenseFileRepository, LicenseFiles, MetadataRepository,
        ProgressReporter, ReportDocumentWriter, ResourceFetcher, TextStyle,
    };
    pub use crate::report_generation::domain::{
        ArtifactRecord, ConfigurationDescriptor, DependencyInventory, LicenseRef,
        ModuleCoordinate, PomData, ProjectDescriptor, RepositoryDescriptor,
    };
    pub use crate::report_generation::services::{
        ArtifactFilter, ConfigurationSelector, ReportMetadataGenerator,
    };
    pub use crate::shared::Result;
}
