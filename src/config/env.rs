// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Default upstream for the Places API (New)
pub const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup, then inject via web::Data
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps Platform key used for Places API calls.
    /// None when unset or blank; every reviews request then fails with 500.
    pub google_maps_api_key: Option<String>,

    /// Base URL of the Places API, without trailing slash
    pub places_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8003".to_string())
                .parse()
                .unwrap_or(8003),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_maps_api_key: non_blank(env::var("GOOGLE_MAPS_API_KEY").ok()),

            places_base_url: normalize_base_url(
                &env::var("PLACES_API_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_PLACES_BASE_URL.to_string()),
            ),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: A missing API key is not fatal here; requests report it as 500
    pub fn validate(&self) -> Result<(), String> {
        if self.places_base_url.is_empty() {
            return Err("PLACES_API_BASE_URL must not be empty".to_string());
        }

        if self.google_maps_api_key.is_none() {
            log::warn!("GOOGLE_MAPS_API_KEY not configured - review requests will fail");
        }

        Ok(())
    }

    /// API key for the current request, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.google_maps_api_key.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
impl Config {
    /// Config with a fixed key and no environment lookups
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 0,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            google_maps_api_key: api_key.map(str::to_string),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
        }
    }
}
