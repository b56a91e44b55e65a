use serde::{Deserialize, Serialize};
use types::listing::EnrichedListing;

use listings::pipeline::ListingPage;

/// Data source tag reported in every successful response.
pub const SOURCE_TAG: &str = "get_available_posts_function";

/// Raw query parameters of the available-listings endpoint.
///
/// `page` and `limit` arrive as text so that non-numeric input degrades to
/// the defaults instead of rejecting the request. `category` is accepted for
/// forward compatibility but has no effect on the result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilters {
    pub search: Option<String>,
}

/// Success envelope of the available-listings endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableListingsResponse {
    pub success: bool,
    pub posts: Vec<EnrichedListing>,
    pub pagination: PaginationMeta,
    pub filters: AppliedFilters,
    pub source: &'static str,
}

impl From<ListingPage> for AvailableListingsResponse {
    fn from(page: ListingPage) -> Self {
        Self {
            success: true,
            posts: page.posts,
            pagination: PaginationMeta {
                total_count: page.total_count,
                total_pages: page.total_pages,
                current_page: page.current_page,
                has_more: page.has_more,
            },
            filters: AppliedFilters {
                search: page.search,
            },
            source: SOURCE_TAG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = AvailableListingsResponse::from(ListingPage {
            posts: vec![],
            total_count: 2,
            total_pages: 1,
            current_page: 2,
            has_more: false,
            search: Some("콘서트".to_string()),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["posts"], json!([]));
        assert_eq!(
            value["pagination"],
            json!({
                "totalCount": 2,
                "totalPages": 1,
                "currentPage": 2,
                "hasMore": false
            })
        );
        assert_eq!(value["filters"]["search"], json!("콘서트"));
        assert_eq!(value["source"], json!(SOURCE_TAG));
    }
}
