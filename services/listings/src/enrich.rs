//! Author enrichment: best-effort batch profile lookup
//!
//! One batch lookup per page, keyed by the distinct non-null author ids of
//! the page's listings. Listing retrieval is the load-bearing guarantee;
//! author data is not. A failed lookup therefore degrades every affected
//! listing to a null author instead of failing the request, and an empty id
//! set skips the lookup entirely.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, error, info};
use types::author::AuthorRecord;
use types::errors::LookupError;
use types::ids::AuthorId;
use types::listing::{EnrichedListing, NormalizedListing};

/// Batch profile lookup boundary.
#[async_trait]
pub trait AuthorLookup: Send + Sync {
    async fn fetch_authors(&self, ids: &[AuthorId]) -> Result<Vec<AuthorRecord>, LookupError>;
}

/// Attach author summaries to a page of normalized listings.
pub async fn enrich(
    listings: Vec<NormalizedListing>,
    lookup: &dyn AuthorLookup,
) -> Vec<EnrichedListing> {
    let ids = distinct_author_ids(&listings);

    let authors = if ids.is_empty() {
        debug!("no author ids on this page; skipping profile lookup");
        HashMap::new()
    } else {
        fetch_author_map(lookup, &ids).await
    };

    listings
        .into_iter()
        .map(|listing| attach(listing, &authors))
        .collect()
}

/// Distinct non-null author ids in first-seen order.
pub fn distinct_author_ids(listings: &[NormalizedListing]) -> Vec<AuthorId> {
    let mut ids = Vec::new();
    for listing in listings {
        if let Some(id) = &listing.author_id {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }
    ids
}

/// Run the batch lookup and index the result by id. Returns an empty map on
/// failure — the degrade-gracefully contract is in the signature, not in an
/// error the caller must remember to swallow.
async fn fetch_author_map(
    lookup: &dyn AuthorLookup,
    ids: &[AuthorId],
) -> HashMap<AuthorId, AuthorRecord> {
    match lookup.fetch_authors(ids).await {
        Ok(records) => {
            info!(
                requested = ids.len(),
                resolved = records.len(),
                "author profiles resolved"
            );
            records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect()
        }
        Err(err) => {
            error!(error = %err, "author lookup failed; serving listings without author data");
            HashMap::new()
        }
    }
}

fn attach(
    listing: NormalizedListing,
    authors: &HashMap<AuthorId, AuthorRecord>,
) -> EnrichedListing {
    let author = listing
        .author_id
        .as_ref()
        .and_then(|id| authors.get(id))
        .map(AuthorRecord::to_summary);

    EnrichedListing { listing, author }
}
