use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::aggregates;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{EventCreate, Rsvp, RsvpRequest, RsvpStatus};
use crate::query::{sort_by_date_asc, EventQuery, PAGE_LIMIT};
use crate::store::{collections, Filter};

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<EventCreate>,
) -> AppResult<Json<Value>> {
    let event = body.into_event();
    let doc = state.store.insert(collections::EVENTS, &event).await?;
    info!("created event {} ({})", event.title, doc.id);
    Ok(Json(doc.into_value()))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> AppResult<Json<Value>> {
    let mut docs = state
        .store
        .find(collections::EVENTS, &query.into_filter(), PAGE_LIMIT)
        .await?;
    sort_by_date_asc(&mut docs, "date");
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<Value>> {
    let doc = state
        .store
        .find_by_id(collections::EVENTS, &event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
    Ok(Json(doc.into_value()))
}

/// Upsert the caller's RSVP, then refresh the event's participant count when
/// the new status is `accepted`. Declines and maybes leave the stored count
/// as-is until the next accepted RSVP forces a recount.
pub async fn rsvp_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(body): Json<RsvpRequest>,
) -> AppResult<Json<Value>> {
    let existing = state
        .store
        .find_one(
            collections::RSVPS,
            &Filter::new()
                .eq("event_id", event_id.as_str())
                .eq("user_id", body.user_id.as_str()),
        )
        .await?;

    match existing {
        Some(doc) => {
            state
                .store
                .update_fields(collections::RSVPS, &doc.id, json!({ "status": body.status }))
                .await?;
        }
        None => {
            let rsvp = Rsvp {
                event_id: event_id.clone(),
                user_id: body.user_id,
                user_name: body.user_name,
                status: body.status,
                created_at: Utc::now(),
            };
            state.store.insert(collections::RSVPS, &rsvp).await?;
        }
    }

    if body.status == RsvpStatus::Accepted {
        aggregates::refresh_event_participants(&state.store, &event_id).await?;
    }

    Ok(Json(json!({ "success": true, "message": "RSVP updated" })))
}

pub async fn event_attendees(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<Value>> {
    let docs = state
        .store
        .find(
            collections::RSVPS,
            &Filter::new()
                .eq("event_id", event_id.as_str())
                .eq("status", RsvpStatus::Accepted.as_str()),
            PAGE_LIMIT,
        )
        .await?;
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}
