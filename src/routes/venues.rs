use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::geo::{planar_distance_km, round2};
use crate::models::VenueCreate;
use crate::query::{VenueQuery, PAGE_LIMIT};
use crate::store::{collections, Filter};

pub async fn create_venue(
    State(state): State<AppState>,
    Json(body): Json<VenueCreate>,
) -> AppResult<Json<Value>> {
    let venue = body.into_venue();
    let doc = state.store.insert(collections::VENUES, &venue).await?;
    info!("created venue {} ({})", venue.name, doc.id);
    Ok(Json(doc.into_value()))
}

pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueQuery>,
) -> AppResult<Json<Value>> {
    let docs = state
        .store
        .find(collections::VENUES, &query.into_filter(), PAGE_LIMIT)
        .await?;
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

pub async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> AppResult<Json<Value>> {
    let doc = state
        .store
        .find_by_id(collections::VENUES, &venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;
    Ok(Json(doc.into_value()))
}

fn default_radius() -> f64 {
    50.0
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
}

/// Venues within `radius` km of the query point, nearest first, each with the
/// computed distance attached. Venues without coordinates are skipped.
pub async fn nearby_venues(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<Value>> {
    let docs = state
        .store
        .find(collections::VENUES, &Filter::new(), PAGE_LIMIT)
        .await?;

    let mut nearby = Vec::new();
    for doc in docs {
        let Some(coordinates) = doc.data.pointer("/location/coordinates") else {
            continue;
        };
        let (Some(lat), Some(lng)) = (
            coordinates.get("lat").and_then(Value::as_f64),
            coordinates.get("lng").and_then(Value::as_f64),
        ) else {
            continue;
        };

        let distance = planar_distance_km(query.lat, query.lng, lat, lng);
        if distance <= query.radius {
            nearby.push((distance, doc));
        }
    }

    nearby.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    Ok(Json(Value::Array(
        nearby
            .into_iter()
            .map(|(distance, doc)| {
                let mut value = doc.into_value();
                value["distance"] = json!(round2(distance));
                value
            })
            .collect(),
    )))
}
