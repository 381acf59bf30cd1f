use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{BookingCreate, BookingStatus, PaymentStatus};
use crate::query::{sort_by_date_desc, PAGE_LIMIT};
use crate::store::{collections, Filter};

pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<BookingCreate>,
) -> AppResult<Json<Value>> {
    let booking = body.into_booking();
    let doc = state.store.insert(collections::BOOKINGS, &booking).await?;
    info!("created booking {} (ticket {})", doc.id, booking.ticket_code);
    Ok(Json(doc.into_value()))
}

pub async fn user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Value>> {
    let mut docs = state
        .store
        .find(
            collections::BOOKINGS,
            &Filter::new().eq("user_id", user_id.as_str()),
            PAGE_LIMIT,
        )
        .await?;
    sort_by_date_desc(&mut docs, "date");
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

/// Unconditionally mark the booking confirmed and paid. There is no check of
/// the current status; confirming twice is accepted.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
) -> AppResult<Json<Value>> {
    let matched = state
        .store
        .update_fields(
            collections::BOOKINGS,
            &booking_id,
            json!({
                "status": BookingStatus::Confirmed.as_str(),
                "payment_status": PaymentStatus::Paid.as_str(),
            }),
        )
        .await?;

    if !matched {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}
