pub mod configuration;
pub mod coordinate;
pub mod pom;
pub mod report_metadata;
pub mod repository;

pub use configuration::{
    ConfigurationDescriptor, DependencyInventory, ProjectDescriptor,
};
pub use coordinate::{ArtifactRecord, ModuleCoordinate};
pub use pom::{DescriptorFields, LicenseRef, MetadataDocument, PomData};
pub use report_metadata::ReportMetadata;
pub use repository::RepositoryDescriptor;
