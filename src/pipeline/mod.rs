//! Report Pipeline
//!
//! Resolves the two upstream collaborators concurrently, degrades to the
//! documented fallbacks when either is unavailable, and invokes the
//! assessment engine. Report generation is infallible: a field request
//! always yields a report, possibly derived from defaulted inputs (which
//! the assessment metrics record).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::engine::AssessmentEngine;
use crate::satellite::SatelliteProvider;
use crate::types::{Assessment, FieldLocation, SatelliteSummary};
use crate::weather::{fallback_summary, WeatherProvider};

/// Upstream collaborator failure. Never fatal to report generation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("collaborator returned invalid data: {0}")]
    Invalid(String),
}

/// A field assessment request, as validated by the API boundary.
///
/// The boundary owns rejecting empty crop types and non-positive areas;
/// the pipeline and engine assume those preconditions hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRequest {
    pub field_name: String,
    pub crop_type: String,
    #[serde(default)]
    pub planting_date: Option<String>,
    pub area_ha: f64,
    pub location: FieldLocation,
}

/// Engine output wrapped with request identification for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
    pub field_name: String,
    pub crop_type: String,
    pub area_ha: f64,
    pub generated_at: DateTime<Utc>,
    pub assessment: Assessment,
}

/// Orchestrates collaborator resolution and engine invocation.
pub struct ReportPipeline {
    weather: Arc<dyn WeatherProvider>,
    satellite: Arc<dyn SatelliteProvider>,
    engine: AssessmentEngine,
}

impl ReportPipeline {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        satellite: Arc<dyn SatelliteProvider>,
        engine: AssessmentEngine,
    ) -> Self {
        Self {
            weather,
            satellite,
            engine,
        }
    }

    /// Generate a report for one field.
    ///
    /// The two collaborators are independent upstream calls and resolve
    /// concurrently. A failed weather fetch degrades to the neutral fallback
    /// summary; a failed satellite fetch degrades to an empty summary whose
    /// indices the engine defaults (and records as defaulted).
    pub async fn generate(&self, request: &FieldRequest) -> FieldReport {
        let (weather, satellite) = tokio::join!(
            self.weather.weather_summary(request.location),
            self.satellite.index_summary(request.location),
        );

        let weather = weather.unwrap_or_else(|error| {
            warn!(%error, field = %request.field_name, "Weather collaborator failed, using fallback summary");
            fallback_summary()
        });
        let satellite = satellite.unwrap_or_else(|error| {
            warn!(%error, field = %request.field_name, "Satellite collaborator failed, using empty summary");
            SatelliteSummary::default()
        });

        let generated_at = Utc::now();
        let assessment = self.engine.assess(
            &weather,
            &satellite,
            &request.crop_type,
            request.planting_date.as_deref(),
            request.area_ha,
            generated_at.date_naive(),
        );

        info!(
            field = %request.field_name,
            crop = %request.crop_type,
            health = %assessment.health_status,
            overall_risk = %assessment.risks.overall,
            "Field report generated"
        );

        FieldReport {
            field_name: request.field_name.clone(),
            crop_type: request.crop_type.clone(),
            area_ha: request.area_ha,
            generated_at,
            assessment,
        }
    }
}
