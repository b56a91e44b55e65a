//! Pipeline orchestration
//!
//! Runs the stages in order: fetch, refine, paginate, normalize (price
//! resolution included), enrich. The listing fetch and the conditional batch
//! author lookup are the only suspension points, and they are sequential —
//! the id set for the lookup only exists once listings are in hand.

use tracing::info;
use types::errors::SourceError;
use types::listing::EnrichedListing;

use crate::enrich::{self, AuthorLookup};
use crate::source::ListingSource;
use crate::{normalize, paginate, refine};

/// A refined, validated query. `page` and `limit` are already coerced to
/// positive values (see `paginate::coerce_page` / `coerce_limit`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    /// Accepted for forward compatibility but inert: category filtering is
    /// disabled and this value never restricts results.
    pub category: Option<String>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: paginate::DEFAULT_PAGE,
            limit: paginate::DEFAULT_LIMIT,
            search: None,
            category: None,
        }
    }
}

/// One page of enriched listings plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub posts: Vec<EnrichedListing>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_more: bool,
    /// The search term that was applied, echoed back to the client.
    pub search: Option<String>,
}

/// Execute the full pipeline for one request.
///
/// Only the upstream listing fetch can fail the request; author enrichment
/// degrades to null authors on its own.
pub async fn run(
    source: &dyn ListingSource,
    authors: &dyn AuthorLookup,
    query: &ListingQuery,
) -> Result<ListingPage, SourceError> {
    info!(
        page = query.page,
        limit = query.limit,
        search = query.search.as_deref().unwrap_or(""),
        "listing query started"
    );

    let raw = source.fetch_available().await?;
    let refined = refine::refine(raw, query.search.as_deref());
    let page = paginate::paginate(refined, query.page, query.limit);

    let normalized: Vec<_> = page.items.iter().map(normalize::normalize).collect();
    let posts = enrich::enrich(normalized, authors).await;

    info!(
        returned = posts.len(),
        total = page.total_count,
        "listing query complete"
    );

    Ok(ListingPage {
        posts,
        total_count: page.total_count,
        total_pages: page.total_pages,
        current_page: page.current_page,
        has_more: page.has_more,
        search: query.search.clone(),
    })
}
