//! Page fetching seam and the reqwest-backed implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;

/// Timeout for individual page fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport seam for retrieving page bodies.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page body.
    ///
    /// Errors on transport failure or non-success status; callers decide
    /// how much of the surrounding work the failure takes down.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher with a bounded timeout and a browser-like User-Agent.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        // Browser-like User-Agent to avoid trivial bot blocking
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(HttpPageFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_request_error() {
        let fetcher = HttpPageFetcher::new().unwrap();
        let result = fetcher.fetch_page("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(FetchError::Request { .. })));
    }
}
