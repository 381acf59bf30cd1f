use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::aggregates;
use crate::app_state::AppState;
use crate::error::AppResult;
use crate::models::{Comment, CommentBody, PostCreate, Reaction, ReactionBody};
use crate::query::{sort_by_date_desc, PAGE_LIMIT};
use crate::store::{collections, Filter};

pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<PostCreate>,
) -> AppResult<Json<Value>> {
    let post = body.into_post();
    let doc = state.store.insert(collections::POSTS, &post).await?;
    info!("created post {}", doc.id);
    Ok(Json(doc.into_value()))
}

/// Public feed: public posts only, newest first.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let mut docs = state
        .store
        .find(
            collections::POSTS,
            &Filter::new().eq("is_public", true),
            PAGE_LIMIT,
        )
        .await?;
    sort_by_date_desc(&mut docs, "created_at");
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

/// Append a comment, then refresh the post's comment count.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(body): Json<CommentBody>,
) -> AppResult<Json<Value>> {
    let comment = Comment {
        post_id: post_id.clone(),
        user_id: body.user_id,
        user_name: body.user_name,
        comment: body.comment,
        created_at: Utc::now(),
    };
    let doc = state.store.insert(collections::COMMENTS, &comment).await?;

    aggregates::refresh_post_comment_count(&state.store, &post_id).await?;

    Ok(Json(doc.into_value()))
}

pub async fn post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<Json<Value>> {
    let docs = state
        .store
        .find(
            collections::COMMENTS,
            &Filter::new().eq("post_id", post_id.as_str()),
            PAGE_LIMIT,
        )
        .await?;
    Ok(Json(Value::Array(
        docs.into_iter().map(|doc| doc.into_value()).collect(),
    )))
}

/// Append a reaction, then refresh the post's like count.
pub async fn create_reaction(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    Json(body): Json<ReactionBody>,
) -> AppResult<Json<Value>> {
    let reaction = Reaction {
        post_id: post_id.clone(),
        user_id: body.user_id,
        user_name: body.user_name,
        reaction_type: body.reaction_type,
        created_at: Utc::now(),
    };
    let doc = state.store.insert(collections::REACTIONS, &reaction).await?;

    aggregates::refresh_post_likes(&state.store, &post_id).await?;

    Ok(Json(doc.into_value()))
}
