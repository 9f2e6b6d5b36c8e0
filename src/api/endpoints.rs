//! API endpoint handlers
//!
//! This module implements the HTTP endpoints for the weather relay: the
//! `/weather` lookup itself plus service-info and health checks.

use crate::core::config::Config;
use crate::core::provider::{ProviderError, WeatherProvider};
use crate::models::weather::WeatherQuery;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn WeatherProvider>,
}

/// Create the API router with all endpoints
///
/// CORS admits only the configured frontend origin; all methods and headers
/// are allowed for that origin.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .allowed_origin
                .parse::<HeaderValue>()
                .expect("ALLOWED_ORIGIN is not a valid header value"),
        )
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/weather", get(get_weather))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

/// Build a `{"detail": ...}` error body with the given status
fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

/// GET /weather - Look up current weather for a city
async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    // Short-circuits before any outbound call.
    if query.city.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "City name is required.");
    }

    info!("Weather lookup: city={}", query.city);

    match state.provider.current_weather(&query.city).await {
        Ok(report) => Json(report).into_response(),
        Err(ProviderError::CityNotFound) => {
            error_response(StatusCode::NOT_FOUND, "City not found")
        }
        Err(ProviderError::Upstream(message)) => {
            error!("Upstream weather request failed: {}", message);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &message)
        }
    }
}

/// GET / - Root endpoint
async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Weather Relay v0.1.0",
        "status": "running",
        "config": {
            "provider": state.provider.provider_name(),
            "allowed_origin": state.config.allowed_origin,
            "api_key_configured": !state.config.api_key.is_empty(),
        },
        "endpoints": {
            "weather": "/weather",
            "health": "/health",
        },
    }))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "api_key_configured": !state.config.api_key.is_empty(),
    }))
}
