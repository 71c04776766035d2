// src/models/place.rs
// DOCUMENTATION: Upstream Places API (New) payloads
// PURPOSE: Deserialize only the fields the proxy consumes; everything is optional

use serde::Deserialize;

/// Tag every canonical place resource name starts with
pub const PLACE_RESOURCE_PREFIX: &str = "places/";

/// Localized string as returned by the Places API; only `text` is used
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
}

/// Author block attached to each review
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttribution {
    pub display_name: Option<String>,
    pub uri: Option<String>,
    pub photo_uri: Option<String>,
}

/// Review record from the details endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceReview {
    /// Kept as a JSON number so integer ratings stay integers on the way out
    pub rating: Option<serde_json::Number>,
    pub text: Option<LocalizedText>,
    pub relative_publish_time_description: Option<String>,
    pub author_attribution: Option<AuthorAttribution>,
}

/// Place record from `GET /v1/places/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub id: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub rating: Option<serde_json::Number>,
    pub user_rating_count: Option<u64>,
    pub reviews: Option<Vec<PlaceReview>>,
}

/// Body of `POST /v1/places:searchText`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<SearchTextPlace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTextPlace {
    pub id: Option<String>,
}

impl SearchTextResponse {
    /// Identifier of the best match, if the search returned anything
    pub fn first_id(&self) -> Option<&str> {
        self.places
            .first()
            .and_then(|p| p.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// True when the input already names a place resource
pub fn is_canonical_id(place_id: &str) -> bool {
    place_id.starts_with(PLACE_RESOURCE_PREFIX)
}

/// Turn a search result id into a resource name usable in `/v1/{name}`
pub fn to_resource_name(id: &str) -> String {
    if is_canonical_id(id) {
        id.to_string()
    } else {
        format!("{}{}", PLACE_RESOURCE_PREFIX, id)
    }
}
