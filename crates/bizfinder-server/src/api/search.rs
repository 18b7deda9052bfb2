use axum::{
    extract::{Query, State},
    Extension, Json,
};

use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta, SearchParams};
use crate::middleware::RequestId;
use crate::search::SearchOutcome;

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchOutcome>>, ApiError> {
    let query = params.query.unwrap_or_default();
    let location = params.location.unwrap_or_default();

    let outcome = state
        .search
        .search(&query, &location)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: outcome,
        meta: ResponseMeta::new(req_id.0),
    }))
}
