//! Identifier generation handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::extractors::ApiQuery;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, GenerateQuery, IdResponse, Scheme, SchemeListResponse};
use crate::error::Result;

/// List supported schemes.
pub async fn list_schemes(
    State(state): State<AppState>,
) -> Json<ApiResponse<SchemeListResponse>> {
    let schemes = state.identifier_service.schemes();
    Json(ApiResponse::success(SchemeListResponse { schemes }))
}

/// Generate identifiers for one scheme.
pub async fn generate(
    State(state): State<AppState>,
    Path(scheme): Path<String>,
    ApiQuery(query): ApiQuery<GenerateQuery>,
) -> Result<Json<ApiResponse<IdResponse>>> {
    let scheme: Scheme = scheme.parse()?;

    let ids = state
        .identifier_service
        .generate(scheme, &query.options(), query.count)?;

    Ok(Json(ApiResponse::success(IdResponse::new(ids))))
}
