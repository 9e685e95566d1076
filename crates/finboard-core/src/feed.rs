//! Company list data source.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use thiserror::Error;

use crate::CompanyRecord;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a company list could not be fetched.
///
/// Fetch failures are always surfaced; the UI decides how to present them.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed transport error: {0}")]
    Transport(String),

    #[error("feed returned status {status}")]
    Status { status: u16 },

    #[error("feed payload is malformed: {0}")]
    Malformed(String),
}

pub type FeedFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<CompanyRecord>, FeedError>> + Send + 'a>>;

/// Data source collaborator delivering the full company list.
pub trait CompanyFeed: Send + Sync {
    fn fetch_all(&self) -> FeedFuture<'_>;
}

/// Fetches `GET {endpoint}/companies` and decodes the JSON array.
#[derive(Debug, Clone)]
pub struct HttpCompanyFeed {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompanyFeed {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|error| FeedError::Transport(error.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompanyFeed for HttpCompanyFeed {
    fn fetch_all(&self) -> FeedFuture<'_> {
        Box::pin(async move {
            let url = format!("{}/companies", self.endpoint.trim_end_matches('/'));
            tracing::debug!(%url, "fetching company list");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|error| FeedError::Transport(error.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::Status {
                    status: status.as_u16(),
                });
            }

            let companies: Vec<CompanyRecord> = response
                .json()
                .await
                .map_err(|error| FeedError::Malformed(error.to_string()))?;

            tracing::debug!(count = companies.len(), "company list fetched");
            Ok(companies)
        })
    }
}

/// Deterministic in-memory feed for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeed {
    companies: Vec<CompanyRecord>,
}

impl InMemoryFeed {
    pub fn new(companies: Vec<CompanyRecord>) -> Self {
        Self { companies }
    }
}

impl CompanyFeed for InMemoryFeed {
    fn fetch_all(&self) -> FeedFuture<'_> {
        let companies = self.companies.clone();
        Box::pin(async move { Ok(companies) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompanyId, RevenueSnapshot, Symbol, UpdateStamp};

    fn record(id: &str) -> CompanyRecord {
        CompanyRecord::new(
            CompanyId::parse(id).expect("id should parse"),
            Symbol::parse("AAA").expect("symbol should parse"),
            "Alpha",
            100.0,
            50.0,
            RevenueSnapshot::new(10.0, 8.0, 5.0).expect("revenue should validate"),
            1.0,
            2.0,
            3.0,
            4.0,
            10,
            0.5,
            UpdateStamp::parse("2024-01-01").expect("stamp should parse"),
        )
        .expect("record should validate")
    }

    #[tokio::test]
    async fn in_memory_feed_returns_its_fixture() {
        let feed = InMemoryFeed::new(vec![record("a"), record("b")]);
        let companies = feed.fetch_all().await.expect("fetch should succeed");
        assert_eq!(companies.len(), 2);
    }

    #[test]
    fn http_feed_keeps_its_endpoint() {
        let feed = HttpCompanyFeed::new("http://localhost:3000/api").expect("client should build");
        assert_eq!(feed.endpoint(), "http://localhost:3000/api");
    }
}
