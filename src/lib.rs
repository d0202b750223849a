//! FieldMon: Agronomic Field Intelligence
//!
//! Derives a human-actionable crop assessment from remotely-sensed
//! vegetation/moisture indices and meteorological aggregates.
//!
//! ## Architecture
//!
//! - **Assessment Engine**: pure decision core (growth stage, health
//!   classification, risk assessment, recommendation composition)
//! - **Weather Collaborator**: daily-series aggregation behind an async seam
//! - **Satellite Collaborator**: index summaries, synthetic when no imagery
//!   source is available
//! - **Report Pipeline**: concurrent collaborator resolution feeding the engine

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod satellite;
pub mod types;
pub mod weather;

// Re-export configuration
pub use config::{AgroConfig, CropProfile, CropTable};

// Re-export commonly used types
pub use types::{
    Advisory, Assessment, AssessmentMetrics, GrowthStage, HealthStatus, RiskLevel, RiskProfile,
    SatelliteSummary, WeatherSummary,
};

// Re-export the engine and pipeline entry points
pub use engine::AssessmentEngine;
pub use pipeline::{FieldReport, FieldRequest, ProviderError, ReportPipeline};
