use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of `venue_id`/`event_id` is expected to be set; not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub rating: i64,
    pub comment: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCreate {
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub rating: i64,
    pub comment: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ReviewCreate {
    pub fn into_review(self) -> Review {
        Review {
            venue_id: self.venue_id,
            event_id: self.event_id,
            user_id: self.user_id,
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            images: self.images,
            created_at: Utc::now(),
        }
    }
}
