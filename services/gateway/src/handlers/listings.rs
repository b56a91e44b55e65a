use crate::error::AppError;
use crate::models::{AvailableListingsResponse, ListingParams};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use listings::paginate;
use listings::pipeline::{self, ListingQuery};
use uuid::Uuid;

/// GET /api/available-posts
///
/// Retrieves the currently purchasable listings (sold items already excluded
/// upstream), applies search/sort/pagination, and returns them enriched with
/// author summaries. Author enrichment is best-effort; only upstream listing
/// retrieval can fail this request.
pub async fn get_available_posts(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<AvailableListingsResponse>, AppError> {
    let request_id = Uuid::now_v7();
    tracing::info!(
        %request_id,
        page = params.page.as_deref().unwrap_or(""),
        limit = params.limit.as_deref().unwrap_or(""),
        search = params.search.as_deref().unwrap_or(""),
        "available listings requested"
    );

    let query = ListingQuery {
        page: paginate::coerce_page(params.page.as_deref()),
        limit: paginate::coerce_limit(params.limit.as_deref()),
        search: params.search.filter(|s| !s.is_empty()),
        category: params.category,
    };

    let page = pipeline::run(state.store.as_ref(), state.store.as_ref(), &query)
        .await
        .map_err(|source| {
            tracing::error!(%request_id, error = %source, "listing retrieval failed");
            let detail = state
                .config
                .expose_upstream_errors
                .then(|| source.to_string());
            AppError::Source { source, detail }
        })?;

    tracing::info!(%request_id, returned = page.posts.len(), "available listings served");
    Ok(Json(AvailableListingsResponse::from(page)))
}

/// OPTIONS /api/available-posts
///
/// Bare pre-flight probes (no CORS request headers) land here; real CORS
/// pre-flights are answered by the CORS layer before reaching the router.
/// Either way the client sees an empty success with the shared header set.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
