use crate::ports::outbound::ResourceFetcher;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;
use std::thread;
use std::time::Duration;

/// Default per-request timeout for remote repositories
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// HttpResourceFetcher adapter for fetching descriptor documents
///
/// Implements the ResourceFetcher port with a blocking reqwest client for
/// `http`/`https` locations and plain file reads for `file` locations
/// (local Maven-layout mirrors).
///
/// Transport failures are retried with a linear back-off; a non-success
/// status is final, since the resource simply isn't there.
pub struct HttpResourceFetcher {
    client: Client,
    max_attempts: u32,
    backoff: Duration,
}

impl HttpResourceFetcher {
    /// Creates a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dependency-license-report/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, MAX_ATTEMPTS, RETRY_BACKOFF))
    }

    fn with_client(client: Client, max_attempts: u32, backoff: Duration) -> Self {
        Self {
            client,
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    fn fetch_with_retry(&self, location: &Url) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            match self.client.get(location.clone()).send() {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        anyhow::bail!("{} returned status code {}", location, status);
                    }
                    return response
                        .text()
                        .with_context(|| format!("Failed to read response body from {}", location));
                }
                Err(e) => {
                    tracing::debug!(%location, attempt, error = %e, "transport error");
                    last_error = Some(e);
                    if attempt < self.max_attempts {
                        thread::sleep(self.backoff * attempt);
                    }
                }
            }
        }

        match last_error {
            Some(e) => Err(anyhow::Error::new(e).context(format!("Failed to fetch {}", location))),
            None => anyhow::bail!("Failed to fetch {}", location),
        }
    }

    fn read_local(location: &Url) -> Result<String> {
        let path = location
            .to_file_path()
            .map_err(|_| anyhow::anyhow!("{} is not a valid local file location", location))?;
        read_checked_file(&path, "descriptor document")
    }
}

impl ResourceFetcher for HttpResourceFetcher {
    fn fetch(&self, location: &Url) -> Result<String> {
        match location.scheme() {
            "http" | "https" => self.fetch_with_retry(location),
            "file" => Self::read_local(location),
            other => anyhow::bail!("Unsupported repository scheme '{}' in {}", other, location),
        }
    }
}
