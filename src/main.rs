//! Weather Relay
//!
//! A single-endpoint HTTP relay that forwards a city-name query to the
//! OpenWeatherMap API and reshapes the response into a simplified JSON
//! payload for a frontend client.

mod api;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::provider::WeatherProvider;
use crate::core::providers::OpenWeatherProvider;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Pick up a local .env file if present
    dotenv::dotenv().ok();

    // Load configuration; the process refuses to start without API_KEY
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // Create the upstream provider
    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
    ));

    info!("Using provider: {}", provider.provider_name());

    // Create application state
    let app_state = AppState {
        config: config.clone(),
        provider,
    };

    // Create router
    let app = create_router(app_state);

    // Bind to address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🌤  Weather Relay v0.1.0");
    println!("✅ Configuration loaded successfully");
    println!("   Upstream: {}", config.base_url);
    println!("   Allowed Origin: {}", config.allowed_origin);
    println!("   Server: {}:{}", config.host, config.port);
    println!();
}

/// Print help message
fn print_help() {
    println!("Weather Relay v0.1.0");
    println!();
    println!("Usage: weather-relay [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  API_KEY - OpenWeatherMap access credential (required)");
    println!("  OPENWEATHER_BASE_URL - Upstream API base URL");
    println!("                         (default: https://api.openweathermap.org/data/2.5)");
    println!("  ALLOWED_ORIGIN - Frontend origin permitted by CORS");
    println!("  HOST - Server host (default: 0.0.0.0)");
    println!("  PORT - Server port (default: 8000)");
    println!("  LOG_LEVEL - Logging level (default: info)");
}
