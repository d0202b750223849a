//! Shared domain types for the FieldMon assessment engine.

pub mod assessment;
pub mod satellite;
pub mod weather;

pub use assessment::{
    Advisory, Assessment, AssessmentMetrics, GrowthStage, HealthStatus, RiskLevel, RiskProfile,
    Sourced, ADVISORY_SEPARATOR,
};
pub use satellite::{FieldLocation, ImageryMeta, SatelliteSummary};
pub use weather::{DailyForecast, DailyHistory, RainfallTrend, WeatherSummary};
