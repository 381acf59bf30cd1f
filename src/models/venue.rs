use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AgeRange, Contact, Location, Pricing};

/// A physical location families can visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    pub pricing: Pricing,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub age_range: AgeRange,
    /// Mean of this venue's review ratings, rounded to 1 decimal; 0.0 with no
    /// reviews. Recomputed on every review write, never tracked incrementally.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: i64,
    #[serde(default)]
    pub contact: Contact,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    pub pricing: Pricing,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub age_range: AgeRange,
    #[serde(default)]
    pub contact: Contact,
}

impl VenueCreate {
    pub fn into_venue(self) -> Venue {
        Venue {
            name: self.name,
            description: self.description,
            category: self.category,
            location: self.location,
            images: self.images,
            pricing: self.pricing,
            facilities: self.facilities,
            age_range: self.age_range,
            rating: 0.0,
            total_reviews: 0,
            contact: self.contact,
            created_at: Utc::now(),
            is_verified: false,
        }
    }
}
