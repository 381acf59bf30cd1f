use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::app_state::AppState;
use crate::error::AppResult;
use crate::query::PAGE_LIMIT;
use crate::recommend::{
    build_prompt, parse_recommendations, venue_summary, RecommendationRequest, SYSTEM_PROMPT,
    VENUE_SUMMARY_LIMIT,
};
use crate::store::{collections, Filter};

/// Forward a bounded venue summary plus the user's context to the chat
/// service and relay its structured reply. A reply that is not the requested
/// JSON array still succeeds, with the raw text returned for diagnostics;
/// only transport/service errors become a 500.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Value>> {
    let venues = state
        .store
        .find(collections::VENUES, &Filter::new(), PAGE_LIMIT)
        .await?;

    let summaries: Vec<Value> = venues
        .iter()
        .take(VENUE_SUMMARY_LIMIT)
        .map(venue_summary)
        .collect();

    let prompt = build_prompt(&request, &summaries);
    let reply = state.chat.complete(SYSTEM_PROMPT, &prompt).await?;

    match parse_recommendations(&reply) {
        Some(recommendations) => Ok(Json(json!({
            "recommendations": recommendations,
            "context": request,
        }))),
        None => {
            warn!("chat reply did not parse as recommendations");
            Ok(Json(json!({
                "recommendations": [],
                "raw_response": reply,
            })))
        }
    }
}
