use dependency_license_report::prelude::*;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock ResourceFetcher serving descriptor text from memory
#[derive(Default)]
pub struct MockResourceFetcher {
    pub documents: HashMap<String, String>,
    pub requests: Mutex<Vec<String>>,
}

impl MockResourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: &str, text: &str) -> Self {
        self.documents.insert(url.to_string(), text.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ResourceFetcher for MockResourceFetcher {
    fn fetch(&self, location: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(location.to_string());
        self.documents
            .get(location.as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} returned status code 404 Not Found", location))
    }
}
