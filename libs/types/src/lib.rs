//! Types library for the resale-ticket marketplace
//!
//! This library provides the type definitions shared between the listings
//! pipeline and the HTTP gateway: the loosely-typed upstream listing record,
//! the canonical (fully defaulted) listing shapes exposed to clients, author
//! profile records, and the error taxonomy.
//!
//! # Modules
//! - `ids`: Unique identifiers (ListingId, AuthorId)
//! - `listing`: Listing records in raw, normalized, and enriched form
//! - `author`: Author profile records and the client-facing summary
//! - `errors`: Error taxonomy

// Public modules
pub mod author;
pub mod errors;
pub mod ids;
pub mod listing;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::author::*;
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::listing::*;
}
