use dockerize_core::{ResolverConfig, VersionSpecifier};
use dockerize_resolve::{FetchError, HttpFetcher, HttpResponse, ResolveError, VersionResolver};
use mockall::mock;

mock! {
    Fetcher {}

    impl HttpFetcher for Fetcher {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
    }
}

const ENDPOINT: &str = "https://semver.io/node/resolve";

fn ok(body: &str) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse {
        status: 200,
        body: body.to_owned(),
    })
}

fn spec(s: &str) -> VersionSpecifier {
    VersionSpecifier::new(s)
}

// ── Success ──

#[tokio::test]
async fn resolve_returns_body_as_version() {
    let mut mock = MockFetcher::new();
    mock.expect_get()
        .withf(|url| url.ends_with("/node/resolve/stable"))
        .times(1)
        .returning(|_| ok("20.11.1"));

    let resolver = VersionResolver::with_fetcher(mock, ENDPOINT);
    let version = resolver.resolve(&spec("stable")).await.unwrap();

    assert_eq!(version.as_str(), "20.11.1");
}

#[tokio::test]
async fn resolve_preserves_body_verbatim() {
    let mut mock = MockFetcher::new();
    mock.expect_get().times(1).returning(|_| ok("18.19.0\n"));

    let resolver = VersionResolver::with_fetcher(mock, ENDPOINT);
    let version = resolver.resolve(&spec("^18")).await.unwrap();

    assert_eq!(version.as_str(), "18.19.0\n");
}

// ── Failures ──

#[tokio::test]
async fn resolve_non_success_status_errors() {
    let mut mock = MockFetcher::new();
    mock.expect_get().times(1).returning(|_| {
        Ok(HttpResponse {
            status: 404,
            body: "no satisfying version".to_owned(),
        })
    });

    let resolver = VersionResolver::with_fetcher(mock, ENDPOINT);
    let err = resolver.resolve(&spec("^99")).await.unwrap_err();

    assert!(
        matches!(err, ResolveError::HttpStatus { status: 404, .. }),
        "got: {err:?}"
    );
    assert_eq!(err.to_string(), "HTTP 404 response - no satisfying version");
}

#[tokio::test]
async fn resolve_server_error_errors() {
    let mut mock = MockFetcher::new();
    mock.expect_get().times(1).returning(|_| {
        Ok(HttpResponse {
            status: 503,
            body: String::new(),
        })
    });

    let resolver = VersionResolver::with_fetcher(mock, ENDPOINT);
    let err = resolver.resolve(&spec("stable")).await.unwrap_err();

    assert!(matches!(err, ResolveError::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn resolve_empty_body_errors() {
    let mut mock = MockFetcher::new();
    mock.expect_get().times(1).returning(|_| ok(""));

    let resolver = VersionResolver::with_fetcher(mock, ENDPOINT);
    let err = resolver.resolve(&spec("stable")).await.unwrap_err();

    assert!(matches!(err, ResolveError::EmptyBody { .. }), "got: {err:?}");
}

#[tokio::test]
async fn resolve_transport_error_is_wrapped() {
    let mut mock = MockFetcher::new();
    mock.expect_get().times(1).returning(|url| {
        Err(FetchError::Request {
            url: url.to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        })
    });

    let resolver = VersionResolver::with_fetcher(mock, ENDPOINT);
    let err = resolver.resolve(&spec("stable")).await.unwrap_err();

    assert!(
        matches!(err, ResolveError::Fetch(FetchError::Request { .. })),
        "got: {err:?}"
    );
    let source = std::error::Error::source(&err).expect("cause is kept");
    assert!(source.to_string().contains("connection refused"));
}

#[tokio::test]
async fn resolve_invalid_endpoint_makes_no_request() {
    let mock = MockFetcher::new();

    let resolver = VersionResolver::with_fetcher(mock, "not a url");
    let err = resolver.resolve(&spec("stable")).await.unwrap_err();

    assert!(
        matches!(err, ResolveError::InvalidEndpoint { .. }),
        "got: {err:?}"
    );
}

// ── Request URL ──

#[test]
fn request_url_appends_specifier() {
    let resolver = VersionResolver::with_fetcher(MockFetcher::new(), ENDPOINT);
    let url = resolver.request_url(&spec("18.19.0")).unwrap();
    assert_eq!(url.as_str(), "https://semver.io/node/resolve/18.19.0");
}

#[test]
fn request_url_tolerates_trailing_slash() {
    let resolver = VersionResolver::with_fetcher(MockFetcher::new(), format!("{ENDPOINT}/"));
    let url = resolver.request_url(&spec("stable")).unwrap();
    assert_eq!(url.as_str(), "https://semver.io/node/resolve/stable");
}

#[test]
fn request_url_encodes_slash_as_one_segment() {
    let resolver = VersionResolver::with_fetcher(MockFetcher::new(), ENDPOINT);
    let url = resolver.request_url(&spec("lts/iron")).unwrap();
    assert_eq!(url.as_str(), "https://semver.io/node/resolve/lts%2Firon");
}

#[test]
fn request_url_encodes_spaces() {
    let resolver = VersionResolver::with_fetcher(MockFetcher::new(), ENDPOINT);
    let url = resolver.request_url(&spec(">=18 <20")).unwrap();
    assert!(!url.as_str().contains(' '), "got: {url}");
    assert!(url.as_str().contains("%20"), "got: {url}");
}

#[test]
fn new_uses_configured_endpoint() {
    let config = ResolverConfig {
        url: "https://versions.example/node".to_owned(),
        timeout_secs: Some(3),
    };
    let resolver = VersionResolver::new(&config).unwrap();
    assert_eq!(resolver.endpoint(), "https://versions.example/node");
}
