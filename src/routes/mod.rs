// HTTP surface - /api and /admin routers

pub mod admin;
pub mod bookings;
pub mod events;
pub mod posts;
pub mod recommendations;
pub mod reviews;
pub mod venues;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::app_state::AppState;

async fn root() -> Json<Value> {
    Json(json!({ "message": "Famigo API - Discover. Connect. Play." }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "famigo-backend" }))
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/venues", post(venues::create_venue).get(venues::list_venues))
        .route("/venues/nearby/search", get(venues::nearby_venues))
        .route("/venues/{id}", get(venues::get_venue))
        .route("/events", post(events::create_event).get(events::list_events))
        .route("/events/{id}", get(events::get_event))
        .route("/events/{id}/rsvp", post(events::rsvp_event))
        .route("/events/{id}/attendees", get(events::event_attendees))
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/venue/{id}", get(reviews::venue_reviews))
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/user/{id}", get(bookings::user_bookings))
        .route("/bookings/{id}/confirm", put(bookings::confirm_booking))
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/posts/{id}/comments",
            post(posts::create_comment).get(posts::post_comments),
        )
        .route("/posts/{id}/reactions", post(posts::create_reaction))
        .route("/recommendations", post(recommendations::recommend))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/theme", get(admin::get_theme).post(admin::update_theme))
        .route(
            "/categories",
            get(admin::list_categories).post(admin::create_category),
        )
        .route(
            "/categories/{id}",
            put(admin::update_category).delete(admin::delete_category),
        )
        .route("/stats", get(admin::stats))
        .route("/venues", get(admin::list_venues))
        .route("/venues/{id}", delete(admin::delete_venue))
        .route("/events", get(admin::list_events))
        .route("/events/{id}", delete(admin::delete_event))
        .route("/posts", get(admin::list_posts))
        .route("/posts/{id}", delete(admin::delete_post))
        .route("/posts/{id}/hide", put(admin::hide_post))
}

/// Assemble the full application with permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_router())
        .nest("/admin", admin_router())
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
