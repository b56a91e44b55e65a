//! Field normalization: raw rows to the canonical listing shape
//!
//! Total per-item mapping; every raw row yields exactly one normalized
//! listing with defaults substituted for every absent field. Nothing
//! loosely-typed crosses this boundary.

use chrono::Utc;
use types::ids::AuthorId;
use types::listing::{NormalizedListing, RawListing};

use crate::price;

/// Category applied when the upstream row has none.
pub const DEFAULT_CATEGORY: &str = "GENERAL";

/// Maximum number of characters of content carried into the preview.
pub const CONTENT_PREVIEW_CHARS: usize = 100;

/// Map a raw row into the canonical shape.
///
/// The author id prefers the explicit `author_id` column, falls back to the
/// generic `user_id` owner column, and otherwise stays unset. Empty-string
/// ids count as unset so they never reach the batch lookup.
pub fn normalize(raw: &RawListing) -> NormalizedListing {
    let title = raw.title.clone().unwrap_or_default();

    NormalizedListing {
        id: raw.id,
        content: raw.content.as_deref().map(preview).unwrap_or_default(),
        category: raw
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        created_at: raw.created_at.unwrap_or_else(Utc::now),
        updated_at: raw.updated_at,
        ticket_price: price::resolve(raw),
        event_name: raw.event_name.clone().unwrap_or_else(|| title.clone()),
        event_date: raw.event_date.clone(),
        event_venue: raw.event_venue.clone(),
        image_url: raw.image_url.clone(),
        author_id: resolve_author_id(raw),
        title,
    }
}

fn resolve_author_id(raw: &RawListing) -> Option<AuthorId> {
    let present = |id: &Option<String>| id.clone().filter(|v| !v.is_empty());
    present(&raw.author_id)
        .or_else(|| present(&raw.user_id))
        .map(AuthorId::new)
}

fn preview(content: &str) -> String {
    if content.chars().count() <= CONTENT_PREVIEW_CHARS {
        return content.to_string();
    }
    let mut cut: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use types::ids::ListingId;

    #[test]
    fn test_bare_row_gets_all_defaults() {
        let normalized = normalize(&RawListing::new(1));

        assert_eq!(normalized.id, ListingId::new(1));
        assert_eq!(normalized.title, "");
        assert_eq!(normalized.content, "");
        assert_eq!(normalized.category, DEFAULT_CATEGORY);
        assert_eq!(normalized.ticket_price, Decimal::ZERO);
        assert_eq!(normalized.event_name, "");
        assert_eq!(normalized.updated_at, None);
        assert_eq!(normalized.author_id, None);
    }

    #[test]
    fn test_created_at_defaults_to_now() {
        let before = Utc::now();
        let normalized = normalize(&RawListing::new(1));
        assert!(normalized.created_at >= before);
        assert!(normalized.created_at <= Utc::now());
    }

    #[test]
    fn test_content_at_limit_passes_through() {
        let mut raw = RawListing::new(1);
        raw.content = Some("가".repeat(CONTENT_PREVIEW_CHARS));
        let normalized = normalize(&raw);
        assert_eq!(normalized.content.chars().count(), CONTENT_PREVIEW_CHARS);
        assert!(!normalized.content.ends_with("..."));
    }

    #[test]
    fn test_long_content_truncated_with_ellipsis() {
        let mut raw = RawListing::new(1);
        raw.content = Some("가".repeat(CONTENT_PREVIEW_CHARS + 1));
        let normalized = normalize(&raw);
        assert!(normalized.content.ends_with("..."));
        assert_eq!(
            normalized.content.chars().count(),
            CONTENT_PREVIEW_CHARS + 3
        );
    }

    #[test]
    fn test_event_name_defaults_to_title() {
        let mut raw = RawListing::new(1);
        raw.title = Some("아이유 콘서트".to_string());
        let normalized = normalize(&raw);
        assert_eq!(normalized.event_name, "아이유 콘서트");

        raw.event_name = Some("2026 HEREH".to_string());
        assert_eq!(normalize(&raw).event_name, "2026 HEREH");
    }

    #[test]
    fn test_author_id_prefers_explicit_column() {
        let mut raw = RawListing::new(1);
        raw.author_id = Some("a-1".to_string());
        raw.user_id = Some("u-1".to_string());
        assert_eq!(normalize(&raw).author_id, Some(AuthorId::new("a-1")));
    }

    #[test]
    fn test_author_id_falls_back_to_user_id() {
        let mut raw = RawListing::new(1);
        raw.user_id = Some("u-1".to_string());
        assert_eq!(normalize(&raw).author_id, Some(AuthorId::new("u-1")));
    }

    #[test]
    fn test_empty_author_id_is_unset() {
        let mut raw = RawListing::new(1);
        raw.author_id = Some(String::new());
        assert_eq!(normalize(&raw).author_id, None);
    }

    #[test]
    fn test_empty_author_id_still_falls_back_to_user_id() {
        let mut raw = RawListing::new(1);
        raw.author_id = Some(String::new());
        raw.user_id = Some("u-2".to_string());
        assert_eq!(normalize(&raw).author_id, Some(AuthorId::new("u-2")));
    }

    #[test]
    fn test_price_resolved_through_fallback_chain() {
        let mut raw = RawListing::new(1);
        raw.content = Some(r#"{"sections": [{"price": 50000}]}"#.to_string());
        assert_eq!(normalize(&raw).ticket_price, Decimal::from(50000));
    }
}
