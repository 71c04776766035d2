// src/handlers/headers.rs
// DOCUMENTATION: Response header sets shared by every reviews code path
// PURPOSE: CORS on all responses, hardening and cache hints on success

use actix_web::HttpResponseBuilder;

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Fresh for an hour, stale copies acceptable for a day while revalidating
pub const CACHE_CONTROL: &str = "public, max-age=3600, stale-while-revalidate=86400";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Attached to every response, errors included
pub fn apply_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", ALLOWED_METHODS))
}

/// CORS preflight answer (permissive variant)
pub fn apply_preflight(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    apply_cors(builder)
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .insert_header(("Access-Control-Max-Age", "86400"))
}

/// Successful reviews payload: CORS, caching and hardening headers
pub fn apply_success(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    apply_cors(builder)
        .insert_header(("Cache-Control", CACHE_CONTROL))
        .insert_header(("Content-Type", JSON_CONTENT_TYPE))
        .insert_header(("Content-Security-Policy", "default-src 'none'"))
        .insert_header(("X-Content-Type-Options", "nosniff"))
        .insert_header(("X-Frame-Options", "DENY"))
        .insert_header(("X-XSS-Protection", "0"))
        .insert_header(("Referrer-Policy", "no-referrer"))
        .insert_header(("X-Robots-Tag", "noindex"))
        .insert_header(("Vary", "Origin"))
        .insert_header(("Timing-Allow-Origin", "*"))
        .insert_header(("X-Accel-Buffering", "no"))
}
