use crate::shared::Result;
use reqwest::Url;

/// ResourceFetcher port: GET a resource by location
///
/// Callers treat every error as "not found at this location".
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, location: &Url) -> Result<String>;
}
