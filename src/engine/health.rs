//! Health Classifier
//!
//! Maps a mean vegetation index to the five-level health status using
//! crop-specific cut points. Evaluated top-down so every real-valued index
//! lands in exactly one category with no overlap and no gap.

use crate::config::CropProfile;
use crate::types::HealthStatus;

/// Classify crop health from the mean vegetation index.
///
/// The index is not clamped: values outside `[-1, 1]` still classify (the
/// engine trusts the numeric contract, not the physical range).
pub fn classify_health(ndvi: f64, profile: &CropProfile) -> HealthStatus {
    if ndvi >= profile.excellent {
        HealthStatus::Excellent
    } else if ndvi >= profile.good {
        HealthStatus::Good
    } else if ndvi >= profile.moderate {
        HealthStatus::Moderate
    } else if ndvi >= profile.poor {
        HealthStatus::Poor
    } else {
        HealthStatus::Critical
    }
}
