//! Weather Collaborator
//!
//! Turns raw daily observations into the `WeatherSummary` aggregate the
//! engine consumes, and defines the async provider seam the pipeline fetches
//! through. Fetching itself (HTTP, station APIs) lives outside this crate;
//! providers here wrap recorded series or precomputed summaries.

use async_trait::async_trait;
use tracing::warn;

use crate::pipeline::ProviderError;
use crate::types::{DailyForecast, DailyHistory, FieldLocation, RainfallTrend, WeatherSummary};

/// Collaborator-side flag thresholds. These belong to the weather analysis,
/// not the engine's risk rules: the engine only sees the resulting booleans.
mod collector_thresholds {
    /// Trailing rainfall below this raises the drought flag (mm / 30d)
    pub const DROUGHT_RAINFALL_MM: f64 = 20.0;
    /// Forecast rainfall above this raises the flood flag (mm / 7d)
    pub const FLOOD_FORECAST_MM: f64 = 100.0;
    /// Mean temperature above this raises the stress flag (degC)
    pub const STRESS_TEMP_HIGH_C: f64 = 35.0;
    /// Mean temperature below this raises the stress flag (degC)
    pub const STRESS_TEMP_LOW_C: f64 = 10.0;
    /// Last-7-day rainfall vs prior 7 days: above this ratio is "increasing"
    pub const TREND_INCREASE_RATIO: f64 = 1.5;
    /// Below this ratio is "decreasing"
    pub const TREND_DECREASE_RATIO: f64 = 0.5;
}

/// Aggregate raw daily series into the engine-facing summary.
///
/// Temperature readings the station missed (`None`) are skipped; a window
/// with no readings at all leaves `avg_temperature` unset so the engine
/// substitutes its documented default. The rainfall trend needs at least 14
/// daily totals, otherwise it stays `unknown`.
pub fn summarize(history: &DailyHistory, forecast: &DailyForecast) -> WeatherSummary {
    let total_rainfall_30d: f64 = history.precipitation_mm.iter().sum();
    let drought_risk = !history.precipitation_mm.is_empty()
        && total_rainfall_30d < collector_thresholds::DROUGHT_RAINFALL_MM;

    let temps: Vec<f64> = history.temp_mean_c.iter().flatten().copied().collect();
    let avg_temperature = if temps.is_empty() {
        None
    } else {
        Some(temps.iter().sum::<f64>() / temps.len() as f64)
    };
    let temperature_stress = avg_temperature.is_some_and(|t| {
        t > collector_thresholds::STRESS_TEMP_HIGH_C || t < collector_thresholds::STRESS_TEMP_LOW_C
    });

    let forecast_rain_7d: f64 = forecast.precipitation_mm.iter().sum();
    let flood_risk = forecast_rain_7d > collector_thresholds::FLOOD_FORECAST_MM;

    let rainfall_trend = rainfall_trend(&history.precipitation_mm);

    WeatherSummary {
        total_rainfall_30d: if history.precipitation_mm.is_empty() {
            None
        } else {
            Some(total_rainfall_30d)
        },
        avg_temperature,
        forecast_rain_7d: if forecast.precipitation_mm.is_empty() {
            None
        } else {
            Some(forecast_rain_7d)
        },
        rainfall_trend,
        drought_risk,
        flood_risk,
        temperature_stress,
    }
}

/// Compare the last 7 daily totals with the prior 7.
fn rainfall_trend(precipitation_mm: &[f64]) -> RainfallTrend {
    if precipitation_mm.len() < 14 {
        return RainfallTrend::Unknown;
    }
    let recent: f64 = precipitation_mm[precipitation_mm.len() - 7..].iter().sum();
    let previous: f64 = precipitation_mm[precipitation_mm.len() - 14..precipitation_mm.len() - 7]
        .iter()
        .sum();

    if recent > previous * collector_thresholds::TREND_INCREASE_RATIO {
        RainfallTrend::Increasing
    } else if recent < previous * collector_thresholds::TREND_DECREASE_RATIO {
        RainfallTrend::Decreasing
    } else {
        RainfallTrend::Stable
    }
}

/// Degraded summary used when the collaborator is unavailable: neutral
/// temperature, no rainfall data, no stress flags.
pub fn fallback_summary() -> WeatherSummary {
    WeatherSummary {
        total_rainfall_30d: Some(0.0),
        avg_temperature: Some(25.0),
        forecast_rain_7d: Some(0.0),
        rainfall_trend: RainfallTrend::Unknown,
        drought_risk: false,
        flood_risk: false,
        temperature_stress: false,
    }
}

/// Async seam to the weather data source.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn weather_summary(&self, location: FieldLocation)
        -> Result<WeatherSummary, ProviderError>;
}

/// Provider wrapping an already-computed summary (tests, file-driven runs).
#[derive(Debug, Clone)]
pub struct StaticWeather {
    summary: WeatherSummary,
}

impl StaticWeather {
    pub fn new(summary: WeatherSummary) -> Self {
        Self { summary }
    }
}

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn weather_summary(
        &self,
        _location: FieldLocation,
    ) -> Result<WeatherSummary, ProviderError> {
        Ok(self.summary.clone())
    }
}

/// Provider summarizing a recorded daily series on every call.
#[derive(Debug, Clone)]
pub struct RecordedWeather {
    history: DailyHistory,
    forecast: DailyForecast,
}

impl RecordedWeather {
    pub fn new(history: DailyHistory, forecast: DailyForecast) -> Self {
        Self { history, forecast }
    }
}

#[async_trait]
impl WeatherProvider for RecordedWeather {
    async fn weather_summary(
        &self,
        _location: FieldLocation,
    ) -> Result<WeatherSummary, ProviderError> {
        if self.history.precipitation_mm.is_empty() && self.forecast.precipitation_mm.is_empty() {
            warn!("Recorded weather series is empty");
            return Err(ProviderError::Unavailable(
                "no recorded weather observations".to_string(),
            ));
        }
        Ok(summarize(&self.history, &self.forecast))
    }
}
