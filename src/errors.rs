// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the reviews proxy

use crate::handlers::headers::apply_cors;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure a reviews request can end in.
/// Each variant maps to an HTTP status and a `{error}` / `{error, detail}` body.
#[derive(Error, Debug)]
pub enum ReviewsError {
    #[error("Missing GOOGLE_MAPS_API_KEY")]
    MissingApiKey,

    #[error("Missing place_id query parameter")]
    MissingPlaceId,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Place not found")]
    PlaceNotFound,

    /// Text search could not be reached at all
    #[error("Places Search unavailable")]
    SearchUnavailable(String),

    /// Non-2xx from the details endpoint, passed through verbatim
    #[error("Places Details error")]
    UpstreamDetails { status: u16, detail: String },

    #[error("Unhandled error")]
    Unhandled(String),
}

impl ReviewsError {
    /// Diagnostic text carried alongside the message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ReviewsError::SearchUnavailable(detail) => Some(detail),
            ReviewsError::UpstreamDetails { detail, .. } => Some(detail),
            ReviewsError::Unhandled(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReviewsError {
    fn from(e: reqwest::Error) -> Self {
        ReviewsError::Unhandled(e.to_string())
    }
}

impl From<serde_json::Error> for ReviewsError {
    fn from(e: serde_json::Error) -> Self {
        ReviewsError::Unhandled(e.to_string())
    }
}

/// Convert ReviewsError to HTTP response
/// DOCUMENTATION: Maps error types to status codes and JSON bodies, CORS always attached
impl ResponseError for ReviewsError {
    fn error_response(&self) -> HttpResponse {
        let body = match self.detail() {
            Some(detail) => json!({ "error": self.to_string(), "detail": detail }),
            None => json!({ "error": self.to_string() }),
        };

        apply_cors(&mut HttpResponse::build(self.status_code())).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ReviewsError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ReviewsError::MissingPlaceId => StatusCode::BAD_REQUEST,
            ReviewsError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ReviewsError::PlaceNotFound => StatusCode::NOT_FOUND,
            ReviewsError::SearchUnavailable(_) => StatusCode::BAD_GATEWAY,
            ReviewsError::UpstreamDetails { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ReviewsError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
