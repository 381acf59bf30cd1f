use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::aggregates;
use crate::app_state::AppState;
use crate::error::AppResult;
use crate::models::ReviewCreate;
use crate::query::{sort_by_date_desc, PAGE_LIMIT};
use crate::store::{collections, Filter};

/// Create a review; a venue review refreshes the venue's rating aggregate in
/// the same operation. The review write is not rolled back if the refresh
/// fails.
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<ReviewCreate>,
) -> AppResult<Json<Value>> {
    let review = body.into_review();
    let doc = state.store.insert(collections::REVIEWS, &review).await?;
    info!("created review {}", doc.id);

    if let Some(venue_id) = &review.venue_id {
        aggregates::refresh_venue_rating(&state.store, venue_id).await?;
    }

    Ok(Json(doc.into_value()))
}

pub async fn venue_reviews(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> AppResult<Json<Value>> {
    let mut docs = state
        .store
        .find(
            collections::REVIEWS,
            &Filter::new().eq("venue_id", venue_id.as_str()),
            PAGE_LIMIT,
        )
        .await?;
    sort_by_date_desc(&mut docs, "created_at");
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}
