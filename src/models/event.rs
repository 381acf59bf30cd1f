use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{default_true, AgeRange, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Playdate,
    VenueEvent,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Playdate => "playdate",
            EventType::VenueEvent => "venue_event",
        }
    }
}

/// A scheduled gathering, user-hosted (playdate) or venue-hosted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub location: Location,
    pub host_id: String,
    pub host_name: String,
    pub age_range: AgeRange,
    pub max_participants: i64,
    /// Count of accepted RSVPs, recomputed after accepted RSVP writes.
    /// Not capped at `max_participants`.
    #[serde(default)]
    pub current_participants: i64,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub venue_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date: DateTime<Utc>,
    pub location: Location,
    pub host_id: String,
    pub host_name: String,
    pub age_range: AgeRange,
    pub max_participants: i64,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub venue_id: Option<String>,
}

impl EventCreate {
    pub fn into_event(self) -> Event {
        Event {
            title: self.title,
            description: self.description,
            event_type: self.event_type,
            date: self.date,
            location: self.location,
            host_id: self.host_id,
            host_name: self.host_name,
            age_range: self.age_range,
            max_participants: self.max_participants,
            current_participants: 0,
            is_public: self.is_public,
            images: self.images,
            venue_id: self.venue_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Accepted,
    Declined,
    Maybe,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Accepted => "accepted",
            RsvpStatus::Declined => "declined",
            RsvpStatus::Maybe => "maybe",
        }
    }
}

/// A user's attendance response. At most one per (event_id, user_id):
/// a second submission overwrites the status in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rsvp {
    pub event_id: String,
    pub user_id: String,
    pub user_name: String,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsvpRequest {
    pub user_id: String,
    pub user_name: String,
    pub status: RsvpStatus,
}
