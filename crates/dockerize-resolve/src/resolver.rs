use dockerize_core::{ResolvedVersion, ResolverConfig, VersionSpecifier};
use reqwest::Url;

use crate::error::{FetchError, ResolveError};
use crate::fetcher::{HttpFetcher, ReqwestFetcher};

/// Resolves a version specifier to a concrete Node.js version through a
/// remote service, parameterized over the fetcher for testability.
pub struct VersionResolver<F: HttpFetcher = ReqwestFetcher> {
    fetcher: F,
    endpoint: String,
}

impl VersionResolver<ReqwestFetcher> {
    pub fn new(config: &ResolverConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: ReqwestFetcher::new(config.timeout())?,
            endpoint: config.url.clone(),
        })
    }
}

impl<F: HttpFetcher> VersionResolver<F> {
    pub fn with_fetcher(fetcher: F, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `<endpoint>/<specifier>`, with the specifier percent-encoded as a
    /// single path segment (so `lts/iron` or `>=18 <20` stay one segment).
    pub fn request_url(&self, specifier: &VersionSpecifier) -> Result<Url, ResolveError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| ResolveError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        url.path_segments_mut()
            .map_err(|()| ResolveError::InvalidEndpoint {
                url: self.endpoint.clone(),
                reason: "endpoint cannot have path segments".to_owned(),
            })?
            .pop_if_empty()
            .push(specifier.as_str());

        Ok(url)
    }

    /// Perform exactly one lookup. The response body is returned as-is.
    pub async fn resolve(
        &self,
        specifier: &VersionSpecifier,
    ) -> Result<ResolvedVersion, ResolveError> {
        let url = self.request_url(specifier)?;
        tracing::debug!(url = %url, "resolving node version");

        let response = self.fetcher.get(url.as_str()).await?;

        if !response.is_success() {
            return Err(ResolveError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        if response.body.is_empty() {
            return Err(ResolveError::EmptyBody {
                url: url.to_string(),
            });
        }

        tracing::info!(specifier = %specifier, version = %response.body, "node version resolved");
        Ok(ResolvedVersion::new(response.body))
    }
}
