// Query service - optional request parameters translated into store filters

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::models::{EventType, PriceType};
use crate::store::{Document, Filter};

/// Fixed page size for list endpoints. There is no pagination cursor; callers
/// needing more than the cap get a truncated result (known limitation).
pub const PAGE_LIMIT: usize = 100;

/// Admin listings scan further than the public page cap.
pub const ADMIN_PAGE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueQuery {
    pub category: Option<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub price_type: Option<PriceType>,
    pub search: Option<String>,
}

impl VenueQuery {
    pub fn into_filter(self) -> Filter {
        let mut filter = Filter::new();
        if let Some(category) = self.category {
            filter = filter.eq("category", category);
        }
        // Interval overlap with the queried age band, not containment.
        if let Some(min_age) = self.min_age {
            filter = filter.gte("age_range.max", min_age as f64);
        }
        if let Some(max_age) = self.max_age {
            filter = filter.lte("age_range.min", max_age as f64);
        }
        if let Some(price_type) = self.price_type {
            filter = filter.eq("pricing.type", price_type.as_str());
        }
        if let Some(search) = self.search {
            filter = filter.search_ci(&["name", "description"], &search);
        }
        filter
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
    pub event_type: Option<EventType>,
    pub is_public: Option<bool>,
    pub host_id: Option<String>,
}

impl EventQuery {
    pub fn into_filter(self) -> Filter {
        let mut filter = Filter::new();
        if let Some(event_type) = self.event_type {
            filter = filter.eq("event_type", event_type.as_str());
        }
        if let Some(is_public) = self.is_public {
            filter = filter.eq("is_public", is_public);
        }
        if let Some(host_id) = self.host_id {
            filter = filter.eq("host_id", host_id);
        }
        filter
    }
}

fn field_date(doc: &Document, field: &str) -> Option<DateTime<FixedOffset>> {
    doc.data
        .get(field)?
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

/// Ascending by the RFC 3339 timestamp in `field`; unparseable dates first.
pub fn sort_by_date_asc(docs: &mut [Document], field: &str) {
    docs.sort_by_key(|doc| field_date(doc, field));
}

/// Descending by the RFC 3339 timestamp in `field`; unparseable dates last.
pub fn sort_by_date_desc(docs: &mut [Document], field: &str) {
    docs.sort_by_key(|doc| std::cmp::Reverse(field_date(doc, field)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venue(age_min: i64, age_max: i64) -> serde_json::Value {
        json!({
            "name": "Somewhere",
            "description": "A place",
            "category": "Outdoor",
            "age_range": {"min": age_min, "max": age_max},
            "pricing": {"type": "free", "amount": 0.0}
        })
    }

    #[test]
    fn no_parameters_builds_empty_filter() {
        assert!(VenueQuery::default().into_filter().is_empty());
        assert!(EventQuery::default().into_filter().is_empty());
    }

    #[test]
    fn age_filter_is_overlap_not_containment() {
        // Venue 2..10 overlaps the queried band 8..15 even though it is not
        // contained in it.
        let query = VenueQuery {
            min_age: Some(8),
            max_age: Some(15),
            ..Default::default()
        };
        assert!(query.into_filter().matches(&venue(2, 10)));

        // A venue entirely below the band does not match.
        let query = VenueQuery {
            min_age: Some(12),
            ..Default::default()
        };
        assert!(!query.into_filter().matches(&venue(2, 10)));

        // A venue entirely above the band does not match.
        let query = VenueQuery {
            max_age: Some(3),
            ..Default::default()
        };
        assert!(!query.into_filter().matches(&venue(5, 10)));
    }

    #[test]
    fn price_type_uses_wire_name() {
        let query = VenueQuery {
            price_type: Some(PriceType::Free),
            ..Default::default()
        };
        assert!(query.into_filter().matches(&venue(0, 12)));

        let query = VenueQuery {
            price_type: Some(PriceType::Paid),
            ..Default::default()
        };
        assert!(!query.into_filter().matches(&venue(0, 12)));
    }

    #[test]
    fn event_filter_combines_with_and() {
        let doc = json!({
            "event_type": "playdate",
            "is_public": true,
            "host_id": "h1"
        });

        let query = EventQuery {
            event_type: Some(EventType::Playdate),
            is_public: Some(true),
            host_id: Some("h1".to_string()),
        };
        assert!(query.into_filter().matches(&doc));

        let query = EventQuery {
            event_type: Some(EventType::VenueEvent),
            is_public: Some(true),
            host_id: Some("h1".to_string()),
        };
        assert!(!query.into_filter().matches(&doc));
    }

    #[test]
    fn date_sorting() {
        let mut docs = vec![
            Document {
                id: "b".into(),
                data: json!({"date": "2026-03-02T10:00:00Z"}),
            },
            Document {
                id: "a".into(),
                data: json!({"date": "2026-03-01T10:00:00Z"}),
            },
            Document {
                id: "c".into(),
                data: json!({"date": "2026-03-03T10:00:00Z"}),
            },
        ];

        sort_by_date_asc(&mut docs, "date");
        let order: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);

        sort_by_date_desc(&mut docs, "date");
        let order: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }
}
