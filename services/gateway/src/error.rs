use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use types::errors::SourceError;

/// Central error type for the gateway application
///
/// Only upstream listing retrieval can fail a request; everything else in
/// the pipeline degrades to defaults. The failure body matches the
/// `{success: false, message, error?}` contract, with the upstream
/// diagnostic attached only when the config allows it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("listing source failed: {source}")]
    Source {
        source: SourceError,
        /// Upstream diagnostic, present outside production only.
        detail: Option<String>,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Source { detail, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "구매 가능한 게시물 목록을 조회하는 중 오류가 발생했습니다.",
                detail,
            ),
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(detail) = detail {
            body["error"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}
