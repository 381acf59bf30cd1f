// Aggregate recomputation - derived scalars rebuilt from related documents
// Every refresh runs synchronously inside the write that triggered it. The
// fetch/compute/write-back sequence is not atomic with respect to concurrent
// writers; the later write-back wins. Single writer assumed.

use anyhow::Result;
use serde_json::{json, Value};

use crate::models::RsvpStatus;
use crate::store::{collections, DocumentStore, Filter};

/// How many related documents a refresh scans.
const AGGREGATE_SCAN_LIMIT: usize = 1000;

/// Arithmetic mean rounded to 1 decimal; 0.0 for the empty set.
pub fn average_rating(ratings: &[i64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<i64>() as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Rebuild `rating` and `total_reviews` on a venue from its reviews.
pub async fn refresh_venue_rating(store: &DocumentStore, venue_id: &str) -> Result<()> {
    let reviews = store
        .find(
            collections::REVIEWS,
            &Filter::new().eq("venue_id", venue_id),
            AGGREGATE_SCAN_LIMIT,
        )
        .await?;

    let ratings: Vec<i64> = reviews
        .iter()
        .filter_map(|doc| doc.data.get("rating").and_then(Value::as_i64))
        .collect();

    store
        .update_fields(
            collections::VENUES,
            venue_id,
            json!({
                "rating": average_rating(&ratings),
                "total_reviews": reviews.len(),
            }),
        )
        .await?;
    Ok(())
}

/// Rebuild `current_participants` on an event from its accepted RSVPs.
/// Callers invoke this only when the incoming RSVP status is `accepted`;
/// declines and maybes leave the stored count untouched.
pub async fn refresh_event_participants(store: &DocumentStore, event_id: &str) -> Result<()> {
    let accepted = store
        .count(
            collections::RSVPS,
            &Filter::new()
                .eq("event_id", event_id)
                .eq("status", RsvpStatus::Accepted.as_str()),
        )
        .await?;

    store
        .update_fields(
            collections::EVENTS,
            event_id,
            json!({ "current_participants": accepted }),
        )
        .await?;
    Ok(())
}

/// Rebuild `comment_count` on a post from its comments.
pub async fn refresh_post_comment_count(store: &DocumentStore, post_id: &str) -> Result<()> {
    let comments = store
        .count(collections::COMMENTS, &Filter::new().eq("post_id", post_id))
        .await?;

    store
        .update_fields(
            collections::POSTS,
            post_id,
            json!({ "comment_count": comments }),
        )
        .await?;
    Ok(())
}

/// Rebuild `likes` on a post from its reactions.
pub async fn refresh_post_likes(store: &DocumentStore, post_id: &str) -> Result<()> {
    let reactions = store
        .count(collections::REACTIONS, &Filter::new().eq("post_id", post_id))
        .await?;

    store
        .update_fields(collections::POSTS, post_id, json!({ "likes": reactions }))
        .await?;
    Ok(())
}
