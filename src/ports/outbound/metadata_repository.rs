use crate::report_generation::domain::{ModuleCoordinate, PomData};
use std::sync::Arc;

/// MetadataRepository port for merged descriptor metadata
pub trait MetadataRepository: Send + Sync {
    /// Returns the merged metadata of `coordinate` and its parents, or
    /// `None` when no repository knows the coordinate.
    ///
    /// Lookup failures never surface as errors.
    fn resolve(&self, coordinate: &ModuleCoordinate) -> Option<Arc<PomData>>;
}
