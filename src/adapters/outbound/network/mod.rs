/// Network adapters for fetching remote resources
mod http_fetcher;

pub use http_fetcher::{HttpResourceFetcher, DEFAULT_TIMEOUT};
