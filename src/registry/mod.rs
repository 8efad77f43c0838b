//! HTTP client for the npm registry
//!
//! Thin wrapper over one pooled reqwest client. Both endpoints are
//! read-only; any failure is logged at the call site and collapsed into a
//! single user-facing message by the views, so no retry logic lives here.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::constants::APP_VERSION;
use crate::types::{PackageDetails, PackageSummary, SearchResponse};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("package not found: {0}")]
    NotFound(String),
    #[error("registry returned status {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!("npm-explorer/{}", APP_VERSION))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full-text search: `GET /-/v1/search?text={query}&size={size}`
    pub async fn search(
        &self,
        query: &str,
        size: usize,
    ) -> Result<Vec<PackageSummary>, RegistryError> {
        let url = format!("{}/-/v1/search", self.base_url);
        debug!(query, size, "Searching registry");

        let response = self
            .client
            .get(&url)
            .query(&[("text", query), ("size", &size.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status(status));
        }

        let body: SearchResponse = response.json().await?;
        debug!(query, total = body.total, returned = body.objects.len(), "Search complete");
        Ok(body.objects.into_iter().map(|o| o.package).collect())
    }

    /// Package lookup: `GET /{packageName}`
    pub async fn fetch_package(&self, name: &str) -> Result<PackageDetails, RegistryError> {
        let url = format!("{}/{}", self.base_url, encode_package_name(name));
        debug!(package = name, "Fetching package metadata");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(RegistryError::NotFound(name.to_string())),
            status => Err(RegistryError::Status(status)),
        }
    }
}

/// Scoped package names keep the `@` but encode the slash: `@org/pkg` is
/// addressed as `@org%2fpkg`.
fn encode_package_name(name: &str) -> String {
    if name.starts_with('@') {
        name.replace('/', "%2f")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests;
