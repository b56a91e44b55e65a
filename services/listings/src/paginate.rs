//! Pagination: page slicing and total-count metadata
//!
//! Pages are 1-based. Neither the page number nor the page size is
//! upper-bounded; a large enough limit returns the whole refined sequence in
//! one page. Coercion helpers turn raw query-parameter text into usable
//! values so that non-numeric or non-positive input degrades to the defaults
//! instead of failing the request.

/// Default page number when the parameter is absent or unusable.
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when the parameter is absent or unusable.
pub const DEFAULT_LIMIT: usize = 10;

/// One page of a refined sequence plus its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_more: bool,
}

/// Slice the refined sequence into the requested page.
///
/// `total_count` always reflects the full refined sequence, independent of
/// page and limit. An offset past the end yields an empty page with
/// `has_more == false`.
pub fn paginate<T>(refined: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let limit = limit.max(1);
    let page = page.max(1);
    let total_count = refined.len();
    let offset = (page - 1).saturating_mul(limit);

    let items: Vec<T> = refined.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + items.len() < total_count;

    Page {
        items,
        total_count,
        total_pages: total_count.div_ceil(limit),
        current_page: page,
        has_more,
    }
}

/// Coerce a raw `page` parameter: positive integers pass through, anything
/// else defaults to 1.
pub fn coerce_page(raw: Option<&str>) -> usize {
    coerce_positive(raw).unwrap_or(DEFAULT_PAGE)
}

/// Coerce a raw `limit` parameter: positive integers pass through, anything
/// else defaults to 10.
pub fn coerce_limit(raw: Option<&str>) -> usize {
    coerce_positive(raw).unwrap_or(DEFAULT_LIMIT)
}

fn coerce_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as usize)
}
