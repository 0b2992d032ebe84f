/// Descriptor metadata resolution over remote and local repositories
mod metadata_resolver;

pub use metadata_resolver::{descriptor_location, MetadataResolver, DESCRIPTOR_EXTENSION};
