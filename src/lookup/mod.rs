//! Age lookup behind a pluggable resolver.
//!
//! The curator only sees [`AgeResolver`]. The production resolver queries a
//! search proxy and reads the age out of the knowledge panel in the returned
//! HTML ([`extract`]); tests plug in an in-memory table instead.

pub mod extract;
pub mod search_proxy;

pub use extract::{extract_age, parse_leading_age, AGE_MARKER_SELECTOR};
pub use search_proxy::{basic_authorization, SearchProxyResolver, SearchQuery};

use std::future::Future;
use thiserror::Error;

/// Why a single age lookup failed. Always recovered per record.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search proxy answered with status {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    MalformedResponse(String),

    #[error("age marker not found in search results")]
    AgeNotFound,

    #[error("age text {0:?} is not a number")]
    InvalidAge(String),

    #[error("invalid selector {0}")]
    Selector(String),
}

/// Resolves a person's age from their name.
pub trait AgeResolver: Send + Sync + 'static {
    fn resolve_age(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> impl Future<Output = Result<u32, LookupError>> + Send;
}
