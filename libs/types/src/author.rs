//! Author profile records and the client-facing summary
//!
//! `AuthorRecord` is a row from the profile store; everything but the id may
//! be absent. `AuthorSummary` is the shape attached to an enriched listing,
//! with the display defaults already applied.

use serde::{Deserialize, Serialize};

use crate::ids::AuthorId;

/// Placeholder display name for profiles with no name set.
pub const DEFAULT_AUTHOR_NAME: &str = "사용자";

/// Rating shown for profiles that have not been rated yet.
pub const DEFAULT_AUTHOR_RATING: f64 = 4.5;

/// A profile row as returned by the batch profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: AuthorId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl AuthorRecord {
    /// Build the client-facing summary, applying display defaults for the
    /// name and rating.
    pub fn to_summary(&self) -> AuthorSummary {
        AuthorSummary {
            id: self.id.clone(),
            name: self
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
            email: self.email.clone(),
            profile_image: self.avatar_url.clone(),
            rating: self.rating.unwrap_or(DEFAULT_AUTHOR_RATING),
        }
    }
}

/// The author object embedded in an enriched listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub name: String,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub rating: f64,
}
