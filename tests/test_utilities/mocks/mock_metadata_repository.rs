use dependency_license_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock MetadataRepository for testing that records every lookup
#[derive(Default)]
pub struct MockMetadataRepository {
    pub entries: HashMap<ModuleCoordinate, Arc<PomData>>,
    pub lookups: Mutex<Vec<ModuleCoordinate>>,
}

impl MockMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, coordinate: ModuleCoordinate, url: &str, license: &str) -> Self {
        let data = PomData::new()
            .with_url(url)
            .with_license(LicenseRef::new(Some(license.to_string()), None));
        self.entries.insert(coordinate, Arc::new(data));
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl MetadataRepository for MockMetadataRepository {
    fn resolve(&self, coordinate: &ModuleCoordinate) -> Option<Arc<PomData>> {
        self.lookups.lock().unwrap().push(coordinate.clone());
        self.entries.get(coordinate).cloned()
    }
}
