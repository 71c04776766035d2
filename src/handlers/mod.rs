// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod headers;
pub mod health;
pub mod reviews;

pub use health::config as health_config;
pub use reviews::config as reviews_config;
