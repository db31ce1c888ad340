// src/weather/provider.rs

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::WeatherReport;
use crate::common::AppError;

// ============================================================================
// Weather Collaborator Seam
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// Generic display message; the underlying cause is only logged
    #[error("Failed to fetch weather data.")]
    Fetch,
}

impl From<WeatherError> for AppError {
    fn from(error: WeatherError) -> Self {
        AppError::Fetch(error.to_string())
    }
}

/// External collaborator that resolves a city name to its current
/// conditions. Single-shot request/response; retrying is just calling
/// again.
#[async_trait]
pub trait WeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

// ============================================================================
// Widget Display State
// ============================================================================

/// What the weather widget renders from
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherView {
    /// No city picked yet, nothing to fetch
    #[default]
    Idle,
    Ready(WeatherReport),
    Failed(String),
}

/// Fire one request and resolve it to a display state. Recomputation is
/// idempotent, so superseding a stale result with a fresh call is
/// always safe.
pub async fn load_weather<P>(provider: &P, city: &str) -> WeatherView
where
    P: WeatherProvider + ?Sized,
{
    if city.trim().is_empty() {
        return WeatherView::Idle;
    }

    match provider.current(city).await {
        Ok(report) => {
            debug!(city, temp_c = report.temp_celsius(), "weather applied");
            WeatherView::Ready(report)
        }
        Err(error) => {
            warn!(city, %error, "weather fetch failed");
            WeatherView::Failed(error.to_string())
        }
    }
}
