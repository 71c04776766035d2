// src/services/reviews_service.rs
// DOCUMENTATION: Reviews lookup orchestration
// PURPOSE: Validate input, resolve the place, fetch details and reshape them

use crate::errors::ReviewsError;
use crate::models::{is_canonical_id, PlaceDetails, ReviewsPayload};
use crate::services::google_places_client::PlacesApi;

/// Reviews service
/// DOCUMENTATION: Stateless; every call runs the full chain for one request
pub struct ReviewsService;

impl ReviewsService {
    /// Build the reviews payload for one request
    ///
    /// # Arguments
    /// * `api` - Upstream Places API
    /// * `api_key` - Configured key; None fails before any network call
    /// * `place_id` - Raw query value, either `places/...` or free text
    ///
    /// # Returns
    /// The compact payload, or the error the handler should answer with
    pub async fn fetch_reviews(
        api: &dyn PlacesApi,
        api_key: Option<&str>,
        place_id: Option<&str>,
    ) -> Result<ReviewsPayload, ReviewsError> {
        let api_key = api_key.ok_or(ReviewsError::MissingApiKey)?;

        let place_id = place_id
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(ReviewsError::MissingPlaceId)?;

        let resource_name = Self::resolve(api, api_key, place_id).await?;

        let upstream = api.place_details(api_key, &resource_name).await?;
        if !upstream.is_success() {
            return Err(ReviewsError::UpstreamDetails {
                status: upstream.status,
                detail: upstream.body,
            });
        }

        let details: PlaceDetails = serde_json::from_str(&upstream.body)?;
        let payload = ReviewsPayload::from(details);

        log::info!(
            "Returning {} reviews for {}",
            payload.reviews.len(),
            resource_name
        );
        Ok(payload)
    }

    /// Canonical ids pass through; anything else goes through text search
    async fn resolve(
        api: &dyn PlacesApi,
        api_key: &str,
        place_id: &str,
    ) -> Result<String, ReviewsError> {
        if is_canonical_id(place_id) {
            return Ok(place_id.to_string());
        }

        match api.search_text(api_key, place_id).await? {
            Some(resource_name) => {
                log::debug!("Resolved '{}' to {}", place_id, resource_name);
                Ok(resource_name)
            }
            None => {
                log::info!("No place matched '{}'", place_id);
                Err(ReviewsError::PlaceNotFound)
            }
        }
    }
}
