// Recommendation gateway - bounded venue summaries plus user context, wrapped
// into a prompt for the chat-completion seam. Pure passthrough: no local
// ranking happens here.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::Coordinates;
use crate::store::Document;

/// At most this many venues are summarized into the prompt.
pub const VENUE_SUMMARY_LIMIT: usize = 10;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub const SYSTEM_PROMPT: &str = "You are a helpful family activity recommendation assistant \
for the Famigo app. Recommend the best activities based on user context.";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub user_location: Option<UserLocation>,
    #[serde(default)]
    pub kids_ages: Vec<i64>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Recommendation {
    pub venue_id: String,
    pub reason: String,
}

/// Projection of a venue document sent to the model: name, category, a
/// 100-character description preview, age range, pricing, rating, and the
/// public id.
pub fn venue_summary(doc: &Document) -> Value {
    let data = &doc.data;
    let description: String = data
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();

    json!({
        "name": data.get("name"),
        "category": data.get("category"),
        "description": description,
        "age_range": data.get("age_range"),
        "pricing": data.get("pricing"),
        "rating": data.get("rating"),
        "id": doc.id,
    })
}

pub fn build_prompt(request: &RecommendationRequest, venues: &[Value]) -> String {
    let city = request
        .user_location
        .as_ref()
        .and_then(|location| location.city.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let weather = request.weather.as_deref().unwrap_or("unknown");
    let time_of_day = request.time_of_day.as_deref().unwrap_or("unknown");
    let venue_block =
        serde_json::to_string_pretty(venues).unwrap_or_else(|_| "[]".to_string());

    format!(
        "User Context:\n\
         - Location: {city}\n\
         - Kids Ages: {kids_ages:?}\n\
         - Weather: {weather}\n\
         - Time: {time_of_day}\n\
         \n\
         Available Venues:\n\
         {venue_block}\n\
         \n\
         Please recommend top 3 activities from the available venues. Consider:\n\
         1. Age appropriateness for the kids\n\
         2. Weather conditions (indoor for rain, outdoor for sunshine)\n\
         3. Time of day\n\
         4. Ratings and reviews\n\
         \n\
         Return ONLY a JSON array with this structure:\n\
         [{{\n    \"venue_id\": \"id\",\n    \"reason\": \"brief explanation why this is good for them\"\n}}]",
        kids_ages = request.kids_ages,
    )
}

/// None when the reply is not the requested JSON array; the caller then
/// returns an empty recommendation list with the raw text for diagnostics.
pub fn parse_recommendations(text: &str) -> Option<Vec<Recommendation>> {
    serde_json::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_doc(description: &str) -> Document {
        Document {
            id: "v1".to_string(),
            data: json!({
                "name": "Sunshine Play Centre",
                "category": "Indoor",
                "description": description,
                "age_range": {"min": 1, "max": 10},
                "pricing": {"type": "paid", "amount": 15.0, "currency": "AUD"},
                "rating": 4.5,
            }),
        }
    }

    #[test]
    fn summary_truncates_description_by_chars() {
        let long = "x".repeat(250);
        let summary = venue_summary(&venue_doc(&long));
        assert_eq!(summary["description"].as_str().map(str::len), Some(100));
        assert_eq!(summary["id"], json!("v1"));
        assert_eq!(summary["rating"], json!(4.5));
    }

    #[test]
    fn summary_tolerates_missing_fields() {
        let doc = Document {
            id: "v2".to_string(),
            data: json!({"name": "Bare"}),
        };
        let summary = venue_summary(&doc);
        assert_eq!(summary["description"], json!(""));
        assert_eq!(summary["pricing"], json!(null));
    }

    #[test]
    fn prompt_carries_context_and_venues() {
        let request = RecommendationRequest {
            user_location: Some(UserLocation {
                city: Some("Melbourne".to_string()),
                coordinates: None,
            }),
            kids_ages: vec![3, 7],
            weather: Some("sunny".to_string()),
            time_of_day: Some("morning".to_string()),
        };
        let venues = vec![venue_summary(&venue_doc("soft play"))];
        let prompt = build_prompt(&request, &venues);

        assert!(prompt.contains("Location: Melbourne"));
        assert!(prompt.contains("Kids Ages: [3, 7]"));
        assert!(prompt.contains("Weather: sunny"));
        assert!(prompt.contains("Sunshine Play Centre"));
        assert!(prompt.contains("Return ONLY a JSON array"));
    }

    #[test]
    fn prompt_defaults_for_absent_context() {
        let prompt = build_prompt(&RecommendationRequest::default(), &[]);
        assert!(prompt.contains("Location: Unknown"));
        assert!(prompt.contains("Weather: unknown"));
        assert!(prompt.contains("Time: unknown"));
    }

    #[test]
    fn parses_the_requested_array_shape() {
        let parsed = parse_recommendations(
            r#"[{"venue_id": "v1", "reason": "great for toddlers"}]"#,
        );
        let parsed = parsed.expect("valid array should parse");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].venue_id, "v1");
    }

    #[test]
    fn conversational_reply_does_not_parse() {
        assert!(parse_recommendations("Sure! I'd recommend the farm.").is_none());
        assert!(parse_recommendations("").is_none());
    }
}
