//! Satellite Collaborator
//!
//! Async provider seam for vegetation/moisture index summaries, plus the
//! synthetic generator used when no imagery source is wired in. The engine
//! never distinguishes synthetic from measured input; synthetic summaries
//! are flagged in their metadata for the report reader only.

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::pipeline::ProviderError;
use crate::types::{FieldLocation, ImageryMeta, SatelliteSummary};

/// Generate a plausible mid-season summary: NDVI mean in 0.40-0.70, NDMI
/// mean in 0.20-0.50, with consistent min/max/std and light cloud cover.
pub fn synthetic_summary<R: Rng>(rng: &mut R) -> SatelliteSummary {
    let ndvi_mean = rng.gen_range(0.4..0.7);
    let ndmi_mean = rng.gen_range(0.2..0.5);
    SatelliteSummary {
        ndvi_mean: Some(round3(ndvi_mean)),
        ndvi_min: Some(round3(ndvi_mean - 0.1)),
        ndvi_max: Some(round3(ndvi_mean + 0.1)),
        ndvi_std: Some(round3(rng.gen_range(0.05..0.15))),
        ndmi_mean: Some(round3(ndmi_mean)),
        ndmi_min: Some(round3(rng.gen_range(0.1..0.3))),
        ndmi_max: Some(round3(rng.gen_range(0.4..0.6))),
        meta: Some(ImageryMeta {
            acquisition_ms: Some(Utc::now().timestamp_millis()),
            cloud_cover_percent: Some(rng.gen_range(5.0..15.0)),
            source: "Sentinel-2 (synthetic)".to_string(),
            synthetic: true,
        }),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Async seam to the imagery source.
#[async_trait]
pub trait SatelliteProvider: Send + Sync {
    async fn index_summary(&self, location: FieldLocation)
        -> Result<SatelliteSummary, ProviderError>;
}

/// Provider wrapping a precomputed summary (tests, file-driven runs).
#[derive(Debug, Clone)]
pub struct StaticSatellite {
    summary: SatelliteSummary,
}

impl StaticSatellite {
    pub fn new(summary: SatelliteSummary) -> Self {
        Self { summary }
    }
}

#[async_trait]
impl SatelliteProvider for StaticSatellite {
    async fn index_summary(
        &self,
        _location: FieldLocation,
    ) -> Result<SatelliteSummary, ProviderError> {
        Ok(self.summary.clone())
    }
}

/// Provider generating a fresh synthetic summary per call.
#[derive(Debug, Clone, Default)]
pub struct SyntheticSatellite;

#[async_trait]
impl SatelliteProvider for SyntheticSatellite {
    async fn index_summary(
        &self,
        _location: FieldLocation,
    ) -> Result<SatelliteSummary, ProviderError> {
        Ok(synthetic_summary(&mut rand::thread_rng()))
    }
}
