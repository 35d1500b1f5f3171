pub mod error;
pub mod fetcher;
pub mod resolver;

pub use error::{FetchError, ResolveError};
pub use fetcher::{HttpFetcher, HttpResponse, ReqwestFetcher};
pub use resolver::VersionResolver;
