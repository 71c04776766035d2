// src/handlers/reviews.rs
// DOCUMENTATION: HTTP handlers for the reviews proxy endpoint
// PURPOSE: Parse the query, run the reviews service, attach response headers

use crate::config::Config;
use crate::errors::ReviewsError;
use crate::handlers::headers::{apply_preflight, apply_success};
use crate::services::{PlacesApi, ReviewsService};
use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use std::sync::Arc;

pub const REVIEWS_PATH: &str = "/api/reviews";

/// First `place_id` value in the query string; repeated keys keep the first
fn first_place_id(query_string: &str) -> Option<String> {
    web::Query::<Vec<(String, String)>>::from_query(query_string)
        .ok()?
        .into_inner()
        .into_iter()
        .find(|(key, _)| key == "place_id")
        .map(|(_, value)| value)
}

/// GET /api/reviews?place_id=...
/// Place id is either `places/...` or free text to resolve
pub async fn get_reviews(
    config: web::Data<Config>,
    api: web::Data<Arc<dyn PlacesApi>>,
    req: HttpRequest,
) -> Result<HttpResponse, ReviewsError> {
    // A malformed query string is treated like a missing place_id
    let place_id = first_place_id(req.query_string());

    let payload =
        ReviewsService::fetch_reviews(api.get_ref().as_ref(), config.api_key(), place_id.as_deref())
            .await
            .map_err(|e| {
                log::warn!("Reviews request failed: {} ({:?})", e, e.detail());
                e
            })?;

    Ok(apply_success(&mut HttpResponse::Ok()).json(payload))
}

/// OPTIONS /api/reviews
pub async fn preflight() -> HttpResponse {
    apply_preflight(&mut HttpResponse::Ok()).finish()
}

/// Any other method on /api/reviews
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ReviewsError> {
    log::debug!("Rejected {} {}", req.method(), req.path());
    Err(ReviewsError::MethodNotAllowed)
}

/// Configuration for reviews routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(REVIEWS_PATH)
            .route(web::get().to(get_reviews))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}
