//! Provider abstraction layer for upstream weather data sources
//!
//! This module defines the trait the relay handler depends on, so tests can
//! substitute a fake provider without performing real network I/O.

use crate::models::weather::WeatherReport;
use async_trait::async_trait;
use thiserror::Error;

/// Error types for provider operations
///
/// `Upstream` carries the stringified transport failure and is passed
/// through verbatim to the caller.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("City not found")]
    CityNotFound,

    #[error("{0}")]
    Upstream(String),
}

/// Trait for weather data providers
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current weather for a city
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
