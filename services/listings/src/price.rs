//! Price resolution fallback chain
//!
//! A displayable price can live in several places depending on which writer
//! produced the row: the snake-case database column, the camel-case display
//! field, or inside a structured payload serialized into the content text.
//! Resolution tries an explicit ordered list of resolvers; the first match
//! wins and everything else defaults to zero.
//!
//! Zero and negative values are treated as absent (the upstream writers use
//! zero as "not set"), which also makes the non-negative guarantee
//! structural. Malformed embedded payloads are logged at debug level and
//! treated as no-match; they never fail the request.

use rust_decimal::Decimal;
use serde::Deserialize;
use types::listing::de::decimal_from_value;
use types::listing::RawListing;

type Resolver = fn(&RawListing) -> Option<Decimal>;

/// Resolution order: direct DB field, display field, embedded payload price,
/// embedded payload first-section price.
const RESOLVERS: &[Resolver] = &[
    direct_db_price,
    display_price,
    embedded_price,
    embedded_section_price,
];

/// Resolve the displayable price for a raw listing. Total; returns zero when
/// nothing matches.
pub fn resolve(listing: &RawListing) -> Decimal {
    RESOLVERS
        .iter()
        .find_map(|resolver| resolver(listing))
        .unwrap_or(Decimal::ZERO)
}

fn direct_db_price(listing: &RawListing) -> Option<Decimal> {
    listing.ticket_price.and_then(positive)
}

fn display_price(listing: &RawListing) -> Option<Decimal> {
    listing.ticket_price_display.and_then(positive)
}

fn embedded_price(listing: &RawListing) -> Option<Decimal> {
    parse_embedded(listing)?
        .price
        .as_ref()
        .and_then(decimal_from_value)
        .and_then(positive)
}

fn embedded_section_price(listing: &RawListing) -> Option<Decimal> {
    parse_embedded(listing)?
        .sections
        .first()?
        .price
        .as_ref()
        .and_then(decimal_from_value)
        .and_then(positive)
}

fn positive(value: Decimal) -> Option<Decimal> {
    (value > Decimal::ZERO).then_some(value)
}

/// The only recognized embedded shapes are a top-level `price` and
/// `sections[0].price`; anything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct EmbeddedContent {
    #[serde(default)]
    price: Option<serde_json::Value>,
    #[serde(default)]
    sections: Vec<EmbeddedSection>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedSection {
    #[serde(default)]
    price: Option<serde_json::Value>,
}

fn parse_embedded(listing: &RawListing) -> Option<EmbeddedContent> {
    let content = listing.content.as_deref()?;
    if !content.starts_with('{') {
        return None;
    }
    match serde_json::from_str(content) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(listing_id = %listing.id, error = %err, "embedded content payload not parseable");
            None
        }
    }
}
