//! Core library for the `skycast` weather viewer.
//!
//! This crate defines:
//! - Configuration holding the browsable location list
//! - The Open-Meteo current-weather client
//! - Shared domain models (locations, forecasts, weather codes)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod weather_code;

pub use config::Config;
pub use model::{CurrentForecast, Location, LocationList};
pub use provider::{FetchError, ForecastClient};
pub use weather_code::WeatherCode;
