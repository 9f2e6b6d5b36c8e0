//! OpenWeatherMap API data models
//!
//! Typed structures for the subset of the current-weather payload the relay
//! consumes. Everything else in the upstream response is ignored.

use serde::Deserialize;

/// Current-weather response from `/data/2.5/weather`
#[derive(Debug, Deserialize)]
pub struct OwCurrentResponse {
    pub name: String,
    pub sys: OwSys,
    pub main: OwMain,
    pub weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
pub struct OwSys {
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub humidity: u8,
}

/// One entry of the upstream weather-condition list; only the first entry
/// is ever used.
#[derive(Debug, Deserialize)]
pub struct OwCondition {
    pub description: String,
    pub icon: String,
}
