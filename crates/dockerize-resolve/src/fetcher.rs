use std::time::Duration;

use crate::error::FetchError;

/// Status and body of a completed HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP GET for testability.
///
/// Production code uses [`ReqwestFetcher`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait HttpFetcher: Send + Sync {
    /// Issue a single GET. Non-2xx statuses are returned, not raised.
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// reqwest-backed fetcher.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build a client. `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Client {
            source: Box::new(e),
        })?;
        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_owned(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_owned(),
            source: Box::new(e),
        })?;

        Ok(HttpResponse { status, body })
    }
}
