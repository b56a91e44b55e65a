//! Listing records in raw, normalized, and enriched form
//!
//! `RawListing` is the upstream shape: every field except the id is optional
//! and loosely typed, so deserialization is permissive — a malformed value in
//! an optional field decodes to `None` instead of rejecting the whole record.
//! `NormalizedListing` is the canonical, fully defaulted shape produced by the
//! normalizer, and `EnrichedListing` adds the resolved author summary. Only
//! the normalized shapes are serialized to clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::author::AuthorSummary;
use crate::ids::{AuthorId, ListingId};

/// A listing row as returned by the upstream "available listings" procedure.
///
/// The id is the only field guaranteed present. `status` and `is_deleted` are
/// carried for completeness but never consulted here — availability filtering
/// is done entirely by the upstream procedure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawListing {
    pub id: ListingId,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub title: Option<String>,

    /// Free text; may itself be a structured JSON payload serialized as text.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub author_id: Option<String>,

    /// Generic owner identifier; some upstream rows populate this instead of
    /// `author_id`.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "de::lenient_datetime")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Snake-case database price field.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub ticket_price: Option<Decimal>,

    /// Camel-case display price field, populated by some upstream writers.
    #[serde(
        default,
        rename = "ticketPrice",
        deserialize_with = "de::lenient_decimal"
    )]
    pub ticket_price_display: Option<Decimal>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub event_name: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub event_date: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub event_venue: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "de::lenient_string")]
    pub status: Option<String>,

    #[serde(default)]
    pub is_deleted: Option<bool>,
}

impl RawListing {
    /// A record with only the id populated. Every other field starts absent,
    /// matching the weakest shape the upstream can produce.
    pub fn new(id: impl Into<ListingId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
            author_id: None,
            user_id: None,
            category: None,
            created_at: None,
            updated_at: None,
            ticket_price: None,
            ticket_price_display: None,
            event_name: None,
            event_date: None,
            event_venue: None,
            image_url: None,
            status: None,
            is_deleted: None,
        }
    }
}

/// The canonical listing shape: every optional upstream field has been
/// defaulted or explicitly nulled, and the price has been resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListing {
    pub id: ListingId,
    pub title: String,
    /// Preview text, truncated to 100 characters with a trailing `...`.
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(with = "rust_decimal::serde::float")]
    pub ticket_price: Decimal,
    pub event_name: String,
    pub event_date: Option<String>,
    pub event_venue: Option<String>,
    pub image_url: Option<String>,
    pub author_id: Option<AuthorId>,
}

/// A normalized listing with its author summary attached.
///
/// `author` is `None` when the listing has no author id, when the profile
/// lookup missed, or when the batch lookup failed outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedListing {
    #[serde(flatten)]
    pub listing: NormalizedListing,
    pub author: Option<AuthorSummary>,
}

/// Permissive deserializers for loosely-typed upstream fields.
///
/// Upstream rows come from a store with no column-level guarantees, so a
/// wrongly-typed optional field must decode to `None` rather than fail the
/// record. Numeric fields accept JSON numbers and numeric strings, mirroring
/// the coercion the storefront clients apply when reading these rows.
pub mod de {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(decimal_from_value))
    }

    pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => parse_datetime(&s),
            _ => None,
        })
    }

    /// Numeric coercion: JSON numbers and numeric strings count, anything
    /// else is treated as absent.
    pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
        match value {
            Value::Number(n) => n.to_string().parse().ok(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = s.parse::<DateTime<Utc>>() {
            return Some(dt);
        }
        // The store sometimes emits timestamps without an offset; read them
        // as UTC.
        s.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_listing_id_only() {
        let raw: RawListing = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(raw, RawListing::new(1));
    }

    #[test]
    fn test_raw_listing_full_row() {
        let raw: RawListing = serde_json::from_value(json!({
            "id": 5,
            "title": "콘서트 티켓",
            "content": "양도합니다",
            "author_id": "u-1",
            "category": "CONCERT",
            "created_at": "2026-03-01T09:00:00+00:00",
            "ticket_price": 55000,
            "event_name": "봄 콘서트",
            "event_venue": "올림픽홀",
            "is_deleted": false
        }))
        .unwrap();

        assert_eq!(raw.title.as_deref(), Some("콘서트 티켓"));
        assert_eq!(raw.author_id.as_deref(), Some("u-1"));
        assert_eq!(raw.ticket_price, Some(Decimal::from(55000)));
        assert!(raw.created_at.is_some());
        assert_eq!(raw.is_deleted, Some(false));
    }

    #[test]
    fn test_raw_listing_numeric_string_price() {
        let raw: RawListing =
            serde_json::from_value(json!({ "id": 2, "ticket_price": "50000" })).unwrap();
        assert_eq!(raw.ticket_price, Some(Decimal::from(50000)));
    }

    #[test]
    fn test_raw_listing_malformed_fields_decode_as_absent() {
        let raw: RawListing = serde_json::from_value(json!({
            "id": 3,
            "title": 123,
            "ticket_price": "not a number",
            "created_at": "yesterday",
            "ticketPrice": { "nested": true }
        }))
        .unwrap();

        assert_eq!(raw.title, None);
        assert_eq!(raw.ticket_price, None);
        assert_eq!(raw.ticket_price_display, None);
        assert_eq!(raw.created_at, None);
    }

    #[test]
    fn test_raw_listing_camel_case_price_field() {
        let raw: RawListing =
            serde_json::from_value(json!({ "id": 4, "ticketPrice": 30000 })).unwrap();
        assert_eq!(raw.ticket_price, None);
        assert_eq!(raw.ticket_price_display, Some(Decimal::from(30000)));
    }

    #[test]
    fn test_raw_listing_timestamp_without_offset() {
        let raw: RawListing =
            serde_json::from_value(json!({ "id": 6, "created_at": "2026-03-01T09:00:00" }))
                .unwrap();
        assert!(raw.created_at.is_some());
    }

    #[test]
    fn test_normalized_listing_wire_shape() {
        let listing = NormalizedListing {
            id: ListingId::new(9),
            title: "뮤지컬 티켓".to_string(),
            content: "".to_string(),
            category: "GENERAL".to_string(),
            created_at: "2026-03-01T09:00:00Z".parse().unwrap(),
            updated_at: None,
            ticket_price: Decimal::from(40000),
            event_name: "뮤지컬 티켓".to_string(),
            event_date: None,
            event_venue: None,
            image_url: None,
            author_id: Some(AuthorId::new("u-9")),
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["ticketPrice"], json!(40000.0));
        assert_eq!(value["eventName"], json!("뮤지컬 티켓"));
        assert_eq!(value["updatedAt"], json!(null));
        assert_eq!(value["authorId"], json!("u-9"));
    }

    #[test]
    fn test_enriched_listing_flattens_and_keeps_null_author() {
        let listing = NormalizedListing {
            id: ListingId::new(9),
            title: String::new(),
            content: String::new(),
            category: "GENERAL".to_string(),
            created_at: "2026-03-01T09:00:00Z".parse().unwrap(),
            updated_at: None,
            ticket_price: Decimal::ZERO,
            event_name: String::new(),
            event_date: None,
            event_venue: None,
            image_url: None,
            author_id: None,
        };
        let enriched = EnrichedListing {
            listing,
            author: None,
        };

        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["id"], json!(9));
        assert_eq!(value["author"], json!(null));
    }
}
