// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API (New) client
// PURPOSE: Text search resolution and place details lookup behind a swappable trait

use crate::errors::ReviewsError;
use crate::models::{to_resource_name, SearchTextResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Fields requested from the details endpoint
pub const DETAILS_FIELD_MASK: &str = "id,displayName,rating,userRatingCount,reviews";

/// Fields requested from text search; the id is all resolution needs
pub const SEARCH_FIELD_MASK: &str = "places.id,places.displayName";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Raw upstream answer, status and body untouched
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound calls the reviews proxy makes
/// DOCUMENTATION: Implemented by GooglePlacesClient; tests substitute a fake
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Resolve free text to a place resource name (`places/...`).
    /// A non-2xx answer or an empty result list yields Ok(None);
    /// failing to reach the endpoint is SearchUnavailable.
    async fn search_text(
        &self,
        api_key: &str,
        text_query: &str,
    ) -> Result<Option<String>, ReviewsError>;

    /// Fetch details for a resource name; any status is returned as-is
    async fn place_details(
        &self,
        api_key: &str,
        resource_name: &str,
    ) -> Result<UpstreamResponse, ReviewsError>;
}

/// Google Places API client
/// DOCUMENTATION: One reqwest client shared across requests; the key travels per call
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL for the Places API, without trailing slash
    base_url: String,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/v1/places:searchText", self.base_url)
    }

    fn details_url(&self, resource_name: &str) -> String {
        format!("{}/v1/{}", self.base_url, resource_name)
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn search_text(
        &self,
        api_key: &str,
        text_query: &str,
    ) -> Result<Option<String>, ReviewsError> {
        log::debug!("Google Places text search: query={}", text_query);

        let response = self
            .client
            .post(self.search_url())
            .header(API_KEY_HEADER, api_key)
            .header(FIELD_MASK_HEADER, SEARCH_FIELD_MASK)
            .json(&json!({ "textQuery": text_query }))
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places text search request failed: {}", e);
                ReviewsError::SearchUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("Google Places text search error {}: {}", status, body);
            return Ok(None);
        }

        let parsed: SearchTextResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Places text search response: {}", e);
            ReviewsError::from(e)
        })?;

        let resolved = parsed.first_id().map(to_resource_name);
        log::info!(
            "Google Places text search returned {} results (resolved: {:?})",
            parsed.places.len(),
            resolved
        );
        Ok(resolved)
    }

    async fn place_details(
        &self,
        api_key: &str,
        resource_name: &str,
    ) -> Result<UpstreamResponse, ReviewsError> {
        log::debug!("Google Places details lookup: {}", resource_name);

        let response = self
            .client
            .get(self.details_url(resource_name))
            .header(API_KEY_HEADER, api_key)
            .header(FIELD_MASK_HEADER, DETAILS_FIELD_MASK)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places details request failed: {}", e);
                ReviewsError::from(e)
            })?;

        let upstream = UpstreamResponse {
            status: response.status().as_u16(),
            body: response.text().await?,
        };

        if !upstream.is_success() {
            log::error!(
                "Google Places details error {}: {}",
                upstream.status,
                upstream.body
            );
        }

        Ok(upstream)
    }
}
