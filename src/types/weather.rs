//! Weather collaborator types: WeatherSummary, RainfallTrend, raw daily series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Qualitative rainfall trend over the trailing window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RainfallTrend {
    Increasing,
    Decreasing,
    Stable,
    #[default]
    Unknown,
}

/// Derived weather aggregate handed to the assessment engine.
///
/// Every numeric field is optional: the collaborator contract tolerates
/// partial upstream data, and the engine substitutes documented defaults
/// (recording the substitution in the assessment metrics). All fields are
/// serde-defaulted so a sparse JSON payload deserializes cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    /// Total precipitation over the trailing 30 days (mm)
    #[serde(default)]
    pub total_rainfall_30d: Option<f64>,
    /// Mean temperature over the trailing 30 days (degC)
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    /// Forecast precipitation over the next 7 days (mm)
    #[serde(default)]
    pub forecast_rain_7d: Option<f64>,
    /// Qualitative rainfall trend
    #[serde(default)]
    pub rainfall_trend: RainfallTrend,
    /// Collaborator-side drought flag (trailing rainfall below 20mm)
    #[serde(default)]
    pub drought_risk: bool,
    /// Collaborator-side flood flag (forecast rainfall above 100mm)
    #[serde(default)]
    pub flood_risk: bool,
    /// Collaborator-side temperature stress flag (mean above 35C or below 10C)
    #[serde(default)]
    pub temperature_stress: bool,
}

/// Raw trailing daily observations, as fetched by the weather collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyHistory {
    /// Observation dates, oldest first
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    /// Daily precipitation totals (mm), oldest first
    #[serde(default)]
    pub precipitation_mm: Vec<f64>,
    /// Daily mean temperatures (degC); `None` for days the station missed
    #[serde(default)]
    pub temp_mean_c: Vec<Option<f64>>,
}

/// Raw forecast daily values for the upcoming window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast dates, nearest first
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    /// Forecast daily precipitation totals (mm)
    #[serde(default)]
    pub precipitation_mm: Vec<f64>,
}
