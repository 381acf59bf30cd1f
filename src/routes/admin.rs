// Admin façade - password-gated CRUD over display metadata plus destructive
// moderation on venues, events, and posts. Reuses the same store adapter as
// the public API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{CategoryBody, ThemeConfig, ThemeDocument};
use crate::query::{sort_by_date_desc, ADMIN_PAGE_LIMIT};
use crate::store::{collections, Filter};

#[derive(Debug, Deserialize)]
pub struct AdminAuth {
    pub password: String,
}

/// Single shared secret; no session or token scheme. Checked before any
/// store access.
fn verify_admin(state: &AppState, auth: &AdminAuth) -> AppResult<()> {
    if auth.password != state.config.admin.password {
        return Err(AppError::Unauthorized("Unauthorized".to_string()));
    }
    Ok(())
}

fn theme_filter() -> Filter {
    Filter::new().eq("type", "theme")
}

pub async fn get_theme(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<ThemeConfig>> {
    verify_admin(&state, &auth)?;

    let theme = match state.store.find_one(collections::SETTINGS, &theme_filter()).await? {
        Some(doc) => doc.decode::<ThemeConfig>()?,
        None => ThemeConfig::default(),
    };
    Ok(Json(theme))
}

pub async fn update_theme(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
    Json(theme): Json<ThemeConfig>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let document = ThemeDocument {
        doc_type: "theme".to_string(),
        theme,
        updated_at: Utc::now(),
    };

    // Singleton upsert keyed by the settings document type.
    match state.store.find_one(collections::SETTINGS, &theme_filter()).await? {
        Some(existing) => {
            state
                .store
                .update_fields(
                    collections::SETTINGS,
                    &existing.id,
                    serde_json::to_value(&document)?,
                )
                .await?;
        }
        None => {
            state.store.insert(collections::SETTINGS, &document).await?;
        }
    }

    Ok(Json(json!({ "success": true, "theme": document.theme })))
}

pub async fn list_categories(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let docs = state
        .store
        .find(collections::CATEGORIES, &Filter::new(), ADMIN_PAGE_LIMIT)
        .await?;
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

pub async fn create_category(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
    Json(body): Json<CategoryBody>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let category = body.into_category();
    let doc = state.store.insert(collections::CATEGORIES, &category).await?;
    info!("created category {} ({})", category.name, doc.id);
    Ok(Json(doc.into_value()))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Query(auth): Query<AdminAuth>,
    Json(body): Json<CategoryBody>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let mut patch = serde_json::to_value(&body.into_category())?;
    if let Value::Object(map) = &mut patch {
        map.remove("created_at");
        map.insert("updated_at".to_string(), json!(Utc::now()));
    }

    let matched = state
        .store
        .update_fields(collections::CATEGORIES, &category_id, patch)
        .await?;
    if !matched {
        return Err(AppError::NotFound("Category not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    if !state.store.delete(collections::CATEGORIES, &category_id).await? {
        return Err(AppError::NotFound("Category not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

/// Per-collection document counts, fetched concurrently.
pub async fn stats(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let store = &state.store;
    let none = Filter::new();
    let public_filter = Filter::new().eq("is_public", true);
    let private_filter = Filter::new().eq("is_public", false);
    let (venues, events, posts, bookings, reviews, public_events, private_events) =
        futures::try_join!(
            store.count(collections::VENUES, &none),
            store.count(collections::EVENTS, &none),
            store.count(collections::POSTS, &none),
            store.count(collections::BOOKINGS, &none),
            store.count(collections::REVIEWS, &none),
            store.count(collections::EVENTS, &public_filter),
            store.count(collections::EVENTS, &private_filter),
        )?;

    Ok(Json(json!({
        "total_venues": venues,
        "total_events": events,
        "total_posts": posts,
        "total_bookings": bookings,
        "total_reviews": reviews,
        "public_events": public_events,
        "private_events": private_events,
    })))
}

pub async fn list_venues(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let docs = state
        .store
        .find(collections::VENUES, &Filter::new(), ADMIN_PAGE_LIMIT)
        .await?;
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    if !state.store.delete(collections::VENUES, &venue_id).await? {
        return Err(AppError::NotFound("Venue not found".to_string()));
    }
    info!("deleted venue {}", venue_id);
    Ok(Json(json!({ "success": true })))
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let docs = state
        .store
        .find(collections::EVENTS, &Filter::new(), ADMIN_PAGE_LIMIT)
        .await?;
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    if !state.store.delete(collections::EVENTS, &event_id).await? {
        return Err(AppError::NotFound("Event not found".to_string()));
    }
    info!("deleted event {}", event_id);
    Ok(Json(json!({ "success": true })))
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let mut docs = state
        .store
        .find(collections::POSTS, &Filter::new(), ADMIN_PAGE_LIMIT)
        .await?;
    sort_by_date_desc(&mut docs, "created_at");
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    if !state.store.delete(collections::POSTS, &post_id).await? {
        return Err(AppError::NotFound("Post not found".to_string()));
    }
    info!("deleted post {}", post_id);
    Ok(Json(json!({ "success": true })))
}

/// Moderation hide: the post stays stored but drops out of the public feed.
pub async fn hide_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Query(auth): Query<AdminAuth>,
) -> AppResult<Json<Value>> {
    verify_admin(&state, &auth)?;

    let matched = state
        .store
        .update_fields(
            collections::POSTS,
            &post_id,
            json!({ "is_public": false, "moderated": true }),
        )
        .await?;
    if !matched {
        return Err(AppError::NotFound("Post not found".to_string()));
    }
    info!("hid post {}", post_id);
    Ok(Json(json!({ "success": true })))
}
