//! Recommendation Composer
//!
//! A fixed, ordered checklist of advisory rules. Each rule is evaluated
//! independently and appends its advisory when triggered; rules are not
//! mutually exclusive, and the output is never empty (a default advisory
//! fills an otherwise quiet report).

use crate::config::RiskThresholds;
use crate::types::{Advisory, GrowthStage, HealthStatus};

use super::ResolvedWeather;

/// Compose the ordered advisory list, most urgent first.
///
/// `fungal` is the shared [`super::risk::fungal_conditions`] result, so the
/// scouting advisory fires exactly when disease risk is rated High.
pub fn compose_recommendations(
    thresholds: &RiskThresholds,
    health: HealthStatus,
    growth_stage: GrowthStage,
    ndmi: f64,
    weather: &ResolvedWeather,
    fungal: bool,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    // Vegetation health
    if health <= HealthStatus::Poor {
        advisories.push(Advisory::FieldInspection);
    } else if health == HealthStatus::Excellent {
        advisories.push(Advisory::MaintainPractices);
    }

    // Canopy moisture
    if ndmi < thresholds.moisture_low {
        advisories.push(Advisory::Irrigation);
    } else if ndmi > thresholds.moisture_high {
        advisories.push(Advisory::Drainage);
    }

    // Collaborator stress flags
    if weather.drought_flag {
        advisories.push(Advisory::WaterConservation);
    }
    if weather.flood_flag {
        advisories.push(Advisory::FloodPreparation);
    }
    if weather.temperature_stress {
        if weather.avg_temperature > thresholds.heat_advisory_temp_c {
            advisories.push(Advisory::HeatStress);
        } else if weather.avg_temperature < thresholds.cold_advisory_temp_c {
            advisories.push(Advisory::ColdStress);
        }
    }

    // Forecast window
    if weather.forecast_rain_7d == 0.0 {
        advisories.push(Advisory::IrrigationPlanning);
    } else if weather.forecast_rain_7d > thresholds.forecast_rain_heavy_mm {
        advisories.push(Advisory::DelayApplication);
    }

    // Stage-specific care
    if growth_stage == GrowthStage::Flowering && health >= HealthStatus::Good {
        advisories.push(Advisory::FloweringCare);
    }

    // Disease scouting, same signal as the disease risk rating
    if fungal {
        advisories.push(Advisory::FungalScouting);
    }

    if advisories.is_empty() {
        advisories.push(Advisory::RoutineMonitoring);
    }

    advisories
}
