//! Available Listings Pipeline
//!
//! Takes the raw "available listings" set produced by the upstream store
//! (sold and deleted items already excluded there) and turns it into a
//! page of client-ready records:
//! - Free-text search filtering and recency sorting
//! - Pagination with total-count metadata
//! - Field normalization with defaults for every absent field
//! - Price resolution through an ordered fallback chain
//! - Best-effort author enrichment via a batch profile lookup
//!
//! # Architecture
//!
//! ```text
//! ListingSource (upstream procedure)
//!        │
//!    ┌───▼────┐
//!    │ Refine │  ← search filter, sort by created_at desc
//!    └───┬────┘
//!    ┌───▼────┐
//!    │ Page   │  ← slice + totalCount/totalPages/hasMore
//!    └───┬────┘
//!    ┌───▼────────┐
//!    │ Normalize  │  ← defaults, truncation, price fallback
//!    └───┬────────┘
//!    ┌───▼────────┐
//!    │ Enrich     │  ← batch author lookup (best effort)
//!    └───┬────────┘
//!        ▼
//!   ListingPage
//! ```
//!
//! Everything past the two I/O boundaries (`ListingSource`, `AuthorLookup`)
//! is a pure, synchronous transform over the request-scoped listing set.

pub mod enrich;
pub mod normalize;
pub mod paginate;
pub mod pipeline;
pub mod price;
pub mod refine;
pub mod source;

pub use enrich::AuthorLookup;
pub use pipeline::{ListingPage, ListingQuery};
pub use source::ListingSource;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
