//! Query refinement: search filtering and recency sorting
//!
//! Filtering is a case-insensitive substring match against title or content;
//! no search term means no filtering. Sorting is always descending by
//! `created_at`, with a missing timestamp treated as epoch 0 so undated rows
//! sort last. Ordering between rows with equal timestamps is unspecified.
//!
//! Category filtering is intentionally disabled: the field exists on the
//! record and the API surface still accepts a `category` parameter, but it
//! does not restrict results.

use types::listing::RawListing;

/// Apply the optional search filter, then sort by recency.
pub fn refine(mut listings: Vec<RawListing>, search: Option<&str>) -> Vec<RawListing> {
    if let Some(term) = search.filter(|t| !t.is_empty()) {
        let needle = term.to_lowercase();
        listings.retain(|listing| matches_search(listing, &needle));
    }

    listings.sort_unstable_by_key(|listing| std::cmp::Reverse(sort_timestamp(listing)));
    listings
}

fn matches_search(listing: &RawListing, needle: &str) -> bool {
    let title_hit = listing
        .title
        .as_deref()
        .is_some_and(|t| t.to_lowercase().contains(needle));
    let content_hit = listing
        .content
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(needle));
    title_hit || content_hit
}

fn sort_timestamp(listing: &RawListing) -> i64 {
    listing
        .created_at
        .map(|t| t.timestamp_millis())
        .unwrap_or(0)
}
