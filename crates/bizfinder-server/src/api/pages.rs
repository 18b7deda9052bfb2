use axum::{
    extract::{Query, State},
    response::Html,
    Extension,
};
use maud::Render;

use super::{AppState, SearchParams};
use crate::middleware::RequestId;
use crate::search::SearchError;
use crate::views::SearchPage;

/// The search page. Without parameters it renders the empty form; with
/// either parameter present it runs a search and renders the outcome.
pub(super) async fn index(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let submitted = params.query.is_some() || params.location.is_some();
    let query = params.query.unwrap_or_default();
    let location = params.location.unwrap_or_default();

    let result = if submitted {
        Some(state.search.search(&query, &location).await)
    } else {
        None
    };

    if let Some(Err(e)) = &result {
        if matches!(e, SearchError::MissingInput) {
            tracing::debug!(request_id = %req_id.0, "search submitted without query or location");
        } else {
            tracing::error!(request_id = %req_id.0, error = %e, "search failed");
        }
    }

    let page = SearchPage {
        model: state.search.model(),
        configured: state.search.is_configured(),
        query: &query,
        location: &location,
        result: result.as_ref(),
    };
    Html(page.render().into_string())
}
