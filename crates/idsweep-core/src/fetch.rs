//! Per-worker HTTP client for fetching single pages by ID

use std::time::Duration;

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Whole-request timeout (connect + headers + body)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Redirect chain limit
const MAX_REDIRECTS: usize = 10;

/// Failure below the HTTP layer — DNS, connect, TLS, timeout, or an
/// aborted body read. Non-success HTTP statuses are *not* errors here;
/// they come back as ordinary [`Page`] results for the worker to
/// interpret.
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Status and full body of one fetched page
#[derive(Debug)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

/// One fetcher per worker, holding a reusable HTTP session for the
/// thousands of sequential requests that worker performs.
pub struct Fetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for one page — the ID is the final path segment
    pub fn page_url(&self, id: u64) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// GET one page, following redirects and buffering the whole body
    pub fn fetch(&self, id: u64) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(self.page_url(id))
            .send()
            .map_err(FetchError::Transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(FetchError::Transport)?.to_vec();
        Ok(Page { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_appends_id() {
        let fetcher = Fetcher::new("http://127.0.0.1:8080/e").unwrap();
        assert_eq!(fetcher.page_url(42), "http://127.0.0.1:8080/e/42");
    }

    #[test]
    fn page_url_trims_trailing_slash() {
        let fetcher = Fetcher::new("http://127.0.0.1:8080/e/").unwrap();
        assert_eq!(fetcher.page_url(7), "http://127.0.0.1:8080/e/7");
    }

    #[test]
    fn page_url_formats_large_ids_as_decimal() {
        let fetcher = Fetcher::new("http://host/e").unwrap();
        assert_eq!(
            fetcher.page_url(16_816_356_000_000),
            "http://host/e/16816356000000"
        );
    }
}
