//! Relay API data models
//!
//! Request and response structures for the `/weather` endpoint served to
//! the frontend client.

use serde::{Deserialize, Serialize};

/// Query parameters for a weather lookup
///
/// A missing `city` parameter deserializes to the empty string, so absent
/// and empty share the single validation branch in the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: String,
}

/// Simplified weather report returned to the caller
///
/// Temperature is degrees Celsius, humidity a percentage. All fields are
/// extracted verbatim from the upstream payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
}
