use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Item,
    protocol::{PageQuery, PhotoRecord},
};
use tracing::{debug, info};
use url::Url;

use crate::{
    coordinator::PageRequest,
    error::{CatalogError, SourceError},
    source::CollectionSource,
};

pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/photos";

#[derive(Debug, Clone)]
pub struct HttpSourceOptions {
    pub request_timeout: Duration,
    /// Extra delay applied after each response arrives.
    pub simulated_latency: Duration,
}

impl Default for HttpSourceOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            simulated_latency: Duration::ZERO,
        }
    }
}

/// Pages through a JSON collection that understands `_start`/`_limit`.
pub struct HttpCollectionSource {
    http: Client,
    base_url: Url,
    simulated_latency: Duration,
}

impl HttpCollectionSource {
    pub fn new(base_url: &str, options: HttpSourceOptions) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url.trim()).map_err(|source| {
            CatalogError::InvalidSourceUrl {
                url: base_url.to_string(),
                source,
            }
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CatalogError::UnsupportedScheme(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(CatalogError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            simulated_latency: options.simulated_latency,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl CollectionSource for HttpCollectionSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Item>, SourceError> {
        let query = PageQuery {
            start: request.offset,
            limit: request.limit,
            cache_token: request.cache_token.map(|token| token.simple().to_string()),
        };
        debug!(url = %self.base_url, ?query, "fetching collection page");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        let records: Vec<PhotoRecord> = serde_json::from_slice(&body)?;

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        info!(
            offset = request.offset,
            received = records.len(),
            "collection page received"
        );
        Ok(records.into_iter().map(Item::from).collect())
    }
}

#[cfg(test)]
#[path = "tests/http_source_tests.rs"]
mod tests;
