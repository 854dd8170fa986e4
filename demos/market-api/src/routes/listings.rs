use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use bearly_sdk::{SearchSession, SessionStatus};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/listings?category=Books&priceSort=PRICE_ASC&search=lamp&page=2
///
/// Browse the marketplace. The query string uses the SDK's own shareable
/// filter format, so a URL copied out of the web app works here verbatim.
/// Responds with one page of results plus pagination info.
pub async fn search_listings(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, AppError> {
    let mut session = SearchSession::hydrate(query.as_deref().unwrap_or(""));
    let plan = session.refresh();
    state.sdk.run_search(&mut session, plan).await;

    if session.status() == SessionStatus::Failed {
        return Err(AppError::new(
            StatusCode::BAD_GATEWAY,
            "Marketplace backend search failed",
        ));
    }

    Ok(Json(json!({
        "data": session.current_page_items(),
        "count": session.results().len(),
        "page": session.page(),
        "page_count": session.page_count(),
        "query": session.url_query(),
    })))
}

/// GET /api/listings/:id
///
/// Get a single listing by its numeric id.
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let listing = state.sdk.listings().get_by_id(id).await?;
    Ok(Json(json!({ "data": listing })))
}

/// GET /api/sellers/:seller_id/listings
///
/// All listings posted by one seller, sold ones included.
pub async fn seller_listings(
    State(state): State<Arc<AppState>>,
    Path(seller_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let listings = state.sdk.listings().by_seller(&seller_id).await?;
    let count = listings.len();
    Ok(Json(json!({ "data": listings, "count": count })))
}
