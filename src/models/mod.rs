// Entity models - typed document shapes with field defaults
// location, pricing, contact, and age_range have fixed shapes, so they are
// explicit nested structs rather than open maps.

pub mod admin;
pub mod booking;
pub mod event;
pub mod post;
pub mod review;
pub mod venue;

pub use admin::{Category, CategoryBody, ThemeConfig, ThemeDocument};
pub use booking::{Booking, BookingCreate, BookingStatus, PaymentStatus};
pub use event::{Event, EventCreate, EventType, Rsvp, RsvpRequest, RsvpStatus};
pub use post::{Comment, CommentBody, Post, PostCreate, PostType, Reaction, ReactionBody, ReactionType};
pub use review::{Review, ReviewCreate};
pub use venue::{Venue, VenueCreate};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Free,
    Paid,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Free => "free",
            PriceType::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(rename = "type")]
    pub price_type: PriceType,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

pub(crate) fn default_currency() -> String {
    "AUD".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
