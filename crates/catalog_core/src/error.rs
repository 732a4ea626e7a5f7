use shared::error::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid collection url '{url}': {source}")]
    InvalidSourceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("collection url '{0}' must use http or https")]
    UnsupportedScheme(String),
    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure to obtain a page from a collection source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("collection request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("collection responded with status {status}")]
    Status { status: u16 },
    #[error("collection returned a malformed page: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("collection unavailable: {0}")]
    Unavailable(String),
}
