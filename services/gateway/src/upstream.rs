//! Reqwest-backed clients for the two upstream collaborators
//!
//! Both boundaries go to the same store: the available-listings procedure is
//! an RPC endpoint that already excludes sold and deleted items, and author
//! profiles come from the `profiles` table via a batch `in.(...)` filter.
//! Neither call retries; a stalled upstream stalls the request.

use async_trait::async_trait;
use listings::{AuthorLookup, ListingSource};
use reqwest::{Client, RequestBuilder};
use types::author::AuthorRecord;
use types::errors::{LookupError, SourceError};
use types::ids::AuthorId;
use types::listing::RawListing;

pub struct UpstreamStore {
    client: Client,
    base_url: String,
    service_key: Option<String>,
}

impl UpstreamStore {
    pub fn new(config: &crate::config::GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.upstream_url.clone(),
            service_key: config.service_key.clone(),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.service_key {
            Some(key) => request.bearer_auth(key).header("apikey", key),
            None => request,
        }
    }
}

#[async_trait]
impl ListingSource for UpstreamStore {
    async fn fetch_available(&self) -> Result<Vec<RawListing>, SourceError> {
        let url = format!("{}/rest/v1/rpc/get_available_posts", self.base_url);
        let response = self
            .authorize(self.client.post(&url).json(&serde_json::json!({})))
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        // The procedure may return null instead of an empty array; both mean
        // "nothing available right now".
        let rows: Option<Vec<RawListing>> = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(rows.unwrap_or_default())
    }
}

#[async_trait]
impl AuthorLookup for UpstreamStore {
    async fn fetch_authors(&self, ids: &[AuthorId]) -> Result<Vec<AuthorRecord>, LookupError> {
        let url = format!("{}/rest/v1/profiles", self.base_url);
        let id_filter = format!(
            "in.({})",
            ids.iter()
                .map(AuthorId::as_str)
                .collect::<Vec<_>>()
                .join(",")
        );

        let response = self
            .authorize(self.client.get(&url).query(&[
                ("select", "id,name,email,avatar_url,rating"),
                ("id", id_filter.as_str()),
            ]))
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LookupError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}
