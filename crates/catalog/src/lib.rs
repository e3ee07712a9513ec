//! Product catalog client for Daybreak
//!
//! This crate fetches the read-only product listing from the backing
//! service. The data flows one way: nothing here writes back, and nothing
//! here knows about the UI or theme state.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

/// Default request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry policy for transient fetch failures.
///
/// Delays grow exponentially between attempts, capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound on any single delay
    pub max_delay: Duration,
    /// Multiplier applied per retry (2.0 doubles the delay each time)
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Delay to wait before the retry with the given index (0-based)
    fn calculate_delay(&self, retry: u32) -> Duration {
        let delay_ms =
            self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(retry as i32);
        let delay = Duration::from_millis(delay_ms as u64);

        if delay > self.max_delay {
            self.max_delay
        } else {
            delay
        }
    }
}

/// A single product record as served by the backing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Category label
    pub category: String,
    /// Whether the product is currently available
    pub in_stock: bool,
}

/// Errors from the catalog boundary.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request could not be completed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid product listing
    #[error("invalid product listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of product listings.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product listing.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// HTTP-backed product source.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl HttpCatalog {
    /// Create a catalog client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        })
    }

    /// Override the retry policy
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch_once(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let mut retry = 0;

        loop {
            match self.fetch_once().await {
                Ok(products) => {
                    tracing::debug!(count = products.len(), "fetched product listing");
                    return Ok(products);
                }
                // Decode and status failures are not transient; retrying
                // would just replay the same answer.
                Err(err @ CatalogError::Decode(_)) | Err(err @ CatalogError::Status(_)) => {
                    return Err(err);
                }
                Err(err) => {
                    if retry >= self.retry.max_retries {
                        return Err(err);
                    }
                    let delay = self.retry.calculate_delay(retry);
                    tracing::warn!(retry, delay_ms = delay.as_millis() as u64, error = %err,
                        "product fetch failed, backing off");
                    sleep(delay).await;
                    retry += 1;
                }
            }
        }
    }
}
