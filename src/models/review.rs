// src/models/review.rs
// DOCUMENTATION: Compact reviews payload returned to the listing page
// PURPOSE: Reshape the upstream place record, substituting fallbacks for missing fields

use crate::models::place::{PlaceDetails, PlaceReview};
use serde::Serialize;

/// Shown when a review carries no author name
pub const ANONYMOUS_AUTHOR: &str = "Google user";

/// Response body of `GET /api/reviews`
#[derive(Debug, Clone, Serialize)]
pub struct ReviewsPayload {
    pub place: PlaceSummary,
    pub reviews: Vec<ReviewResponse>,
}

/// Place header; absent upstream values are omitted rather than nulled
#[derive(Debug, Clone, Serialize)]
pub struct PlaceSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<serde_json::Number>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_time: Option<String>,
    pub author: ReviewAuthor,
}

/// Author links serialize as `null` when unknown
#[derive(Debug, Clone, Serialize)]
pub struct ReviewAuthor {
    pub name: String,
    pub url: Option<String>,
    pub photo: Option<String>,
}

impl From<PlaceReview> for ReviewResponse {
    fn from(review: PlaceReview) -> Self {
        let attribution = review.author_attribution.unwrap_or_default();

        ReviewResponse {
            rating: review.rating,
            text: review.text.and_then(|t| t.text).unwrap_or_default(),
            relative_time: review.relative_publish_time_description,
            author: ReviewAuthor {
                name: attribution
                    .display_name
                    .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
                url: attribution.uri,
                photo: attribution.photo_uri,
            },
        }
    }
}

impl From<PlaceDetails> for ReviewsPayload {
    fn from(details: PlaceDetails) -> Self {
        ReviewsPayload {
            place: PlaceSummary {
                id: details.id,
                name: details.display_name.and_then(|n| n.text),
                rating: details.rating,
                total: details.user_rating_count,
            },
            reviews: details
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(ReviewResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transform(upstream: serde_json::Value) -> serde_json::Value {
        let details: PlaceDetails = serde_json::from_value(upstream).unwrap();
        serde_json::to_value(ReviewsPayload::from(details)).unwrap()
    }

    #[test]
    fn test_full_record_mapping() {
        let output = transform(json!({
            "id": "places/X",
            "displayName": { "text": "Café Z" },
            "rating": 4.5,
            "userRatingCount": 12,
            "reviews": [{
                "rating": 5,
                "text": { "text": "Great" },
                "relativePublishTimeDescription": "a week ago",
                "authorAttribution": {
                    "displayName": "Jane",
                    "uri": "http://u",
                    "photoUri": "http://p"
                }
            }]
        }));

        assert_eq!(
            output,
            json!({
                "place": { "id": "places/X", "name": "Café Z", "rating": 4.5, "total": 12 },
                "reviews": [{
                    "rating": 5,
                    "text": "Great",
                    "relativeTime": "a week ago",
                    "author": { "name": "Jane", "url": "http://u", "photo": "http://p" }
                }]
            })
        );
    }

    #[test]
    fn test_missing_attribution_uses_fallbacks() {
        let output = transform(json!({
            "id": "places/X",
            "reviews": [{ "rating": 3 }]
        }));

        assert_eq!(
            output["reviews"][0]["author"],
            json!({ "name": "Google user", "url": null, "photo": null })
        );
        assert_eq!(output["reviews"][0]["text"], json!(""));
    }

    #[test]
    fn test_missing_reviews_become_empty_list() {
        let output = transform(json!({ "id": "places/X", "rating": 4.1 }));
        assert_eq!(output["reviews"], json!([]));
    }

    #[test]
    fn test_absent_pass_through_fields_are_omitted() {
        let output = transform(json!({ "reviews": [{ "text": { "text": "ok" } }] }));

        assert_eq!(output["place"], json!({}));
        let review = output["reviews"][0].as_object().unwrap();
        assert!(!review.contains_key("rating"));
        assert!(!review.contains_key("relativeTime"));
    }
}
