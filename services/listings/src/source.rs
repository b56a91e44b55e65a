//! Listing source boundary
//!
//! The upstream store exposes a single procedure that returns only currently
//! purchasable listings; sold and deleted items are excluded there. This
//! pipeline performs no availability filtering of its own — correctness of
//! "available" is delegated entirely to that procedure.

use async_trait::async_trait;
use types::errors::SourceError;
use types::listing::RawListing;

/// Source of the raw available-listing set.
///
/// Implementations make exactly one upstream call per invocation, with no
/// retry. An empty or null upstream result is an empty vector, not an error.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_available(&self) -> Result<Vec<RawListing>, SourceError>;
}
