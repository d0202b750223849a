//! Satellite collaborator types: SatelliteSummary and acquisition metadata

use serde::{Deserialize, Serialize};

/// Vegetation/moisture index aggregate over a field polygon.
///
/// Mean indices drive the engine; min/max/std and metadata are accepted for
/// the report but never interpreted. The engine operates purely on the
/// numeric contract and does not distinguish real imagery from synthetic
/// fallback data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SatelliteSummary {
    /// Mean vegetation index (NDVI-equivalent) over the field
    #[serde(default)]
    pub ndvi_mean: Option<f64>,
    #[serde(default)]
    pub ndvi_min: Option<f64>,
    #[serde(default)]
    pub ndvi_max: Option<f64>,
    #[serde(default)]
    pub ndvi_std: Option<f64>,
    /// Mean moisture index (NDMI-equivalent) over the field
    #[serde(default)]
    pub ndmi_mean: Option<f64>,
    #[serde(default)]
    pub ndmi_min: Option<f64>,
    #[serde(default)]
    pub ndmi_max: Option<f64>,
    /// Acquisition metadata, passed through to the report untouched
    #[serde(default)]
    pub meta: Option<ImageryMeta>,
}

/// Acquisition metadata from the imagery provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageryMeta {
    /// Acquisition timestamp (Unix ms)
    #[serde(default)]
    pub acquisition_ms: Option<i64>,
    /// Scene cloud cover percentage
    #[serde(default)]
    pub cloud_cover_percent: Option<f64>,
    /// Imagery source tag (e.g. "Sentinel-2")
    #[serde(default)]
    pub source: String,
    /// Set when the summary was generated rather than measured
    #[serde(default)]
    pub synthetic: bool,
}

/// Field center coordinates handed to the collaborators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FieldLocation {
    pub lat: f64,
    pub lng: f64,
}
