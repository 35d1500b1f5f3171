type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client { source: BoxError },

    #[error("request to {url} failed")]
    Request { url: String, source: BoxError },

    #[error("failed to read response body from {url}")]
    Body { url: String, source: BoxError },
}

/// Every way a version lookup can fail.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid resolver endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP {status} response - {body}")]
    HttpStatus { status: u16, body: String },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },
}
