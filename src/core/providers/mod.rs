//! Provider implementations

pub mod openweather;

pub use openweather::OpenWeatherProvider;
