use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::model::CurrentForecast;

const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// A fetch failure the caller can act on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or transport failure before a response was received.
    #[error("failed to reach the weather service: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("weather service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not the expected JSON shape.
    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentForecast,
}

/// Client for Open-Meteo current-weather lookups.
///
/// Each call issues one GET and is independent; there is no retry and no
/// caching. Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_FORECAST_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a mock server in tests.
    pub fn with_base_url(base_url: String) -> Self {
        Self { http: Client::new(), base_url }
    }

    /// Fetch the current weather for a coordinate pair.
    ///
    /// Latitude/longitude are passed through unvalidated; the API rejects
    /// out-of-range coordinates itself.
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentForecast, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: ForecastResponse = serde_json::from_str(&body)?;
        Ok(parsed.current_weather)
    }
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multi-byte bodies never panic the slice.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
