//! Unique identifier types for marketplace entities
//!
//! Listing ids are the integer primary keys assigned by the upstream store;
//! author ids are the opaque string identifiers of the profile store. Neither
//! is generated locally, so both types are thin wrappers over upstream values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a listing
///
/// The upstream store guarantees presence and uniqueness of this field; it is
/// the only field of a raw listing record that is always populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(i64);

impl ListingId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ListingId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for an author profile
///
/// Profile ids are opaque strings (UUIDs in practice, but never parsed as
/// such). Used as the join key for the batch profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
