use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::default_true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    PhotoShare,
    EventAnnouncement,
    Recommendation,
    Invitation,
    Status,
}

/// A feed entry. `likes` and `comment_count` are derived counters maintained
/// by the reaction and comment creation paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub post_type: PostType,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub related_venue_id: Option<String>,
    #[serde(default)]
    pub related_event_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostCreate {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub post_type: PostType,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub related_venue_id: Option<String>,
    #[serde(default)]
    pub related_event_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
}

impl PostCreate {
    pub fn into_post(self) -> Post {
        Post {
            user_id: self.user_id,
            user_name: self.user_name,
            user_avatar: self.user_avatar,
            post_type: self.post_type,
            content: self.content,
            images: self.images,
            related_venue_id: self.related_venue_id,
            related_event_id: self.related_event_id,
            is_public: self.is_public,
            likes: 0,
            comment_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// Append-only; no edit or delete path is exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentBody {
    pub user_id: String,
    pub user_name: String,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Love,
    Celebrate,
    Support,
}

/// Append-only; no edit or delete path is exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionBody {
    pub user_id: String,
    pub user_name: String,
    pub reaction_type: ReactionType,
}
