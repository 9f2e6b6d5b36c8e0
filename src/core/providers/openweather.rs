//! OpenWeatherMap provider implementation

use crate::core::provider::{ProviderError, WeatherProvider};
use crate::models::openweather::OwCurrentResponse;
use crate::models::weather::WeatherReport;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// OpenWeatherMap provider for current weather
///
/// No request timeout is configured; an unresponsive upstream blocks the
/// calling task until the transport gives up on its own.
pub struct OpenWeatherProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherProvider {
    /// Create a new OpenWeatherMap provider
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenWeatherMap access credential
    /// * `base_url` - API base URL (injectable so tests can point at a mock server)
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        let status = response.status();

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        // The presence of the "main" section is the real success signal;
        // the raw status code alone is not trusted.
        if !status.is_success() || body.get("main").is_none() {
            debug!("Upstream reported no data for city={} (status {})", city, status);
            return Err(ProviderError::CityNotFound);
        }

        let parsed: OwCurrentResponse =
            serde_json::from_value(body).map_err(|_| ProviderError::CityNotFound)?;

        // Entries past index 0 of the condition list are ignored.
        let condition = parsed.weather.first().ok_or(ProviderError::CityNotFound)?;

        Ok(WeatherReport {
            city: parsed.name,
            country: parsed.sys.country,
            temperature: parsed.main.temp,
            humidity: parsed.main.humidity,
            description: condition.description.clone(),
            icon: condition.icon.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "OpenWeatherMap"
    }
}
