//! Risk Assessor
//!
//! Independent Low/Medium/High ratings for drought, flood, disease, and heat
//! stress, aggregated into an overall rating by a counting vote. The fungal
//! predicate is the single source for the "high rain + moderate temperature"
//! signal shared with the recommendation composer.

use crate::config::RiskThresholds;
use crate::types::{RiskLevel, RiskProfile};

use super::ResolvedWeather;

/// High rainfall combined with moderate temperatures favors fungal disease.
///
/// The temperature window is exclusive on both ends.
pub fn fungal_conditions(thresholds: &RiskThresholds, rainfall_30d: f64, avg_temp: f64) -> bool {
    rainfall_30d > thresholds.rainfall_disease_high_mm
        && avg_temp > thresholds.disease_temp_min_c
        && avg_temp < thresholds.disease_temp_max_c
}

/// Rate the four risk categories and the overall aggregate.
///
/// `fungal` is the precomputed [`fungal_conditions`] result so the disease
/// rating and the scouting advisory can never diverge.
pub fn assess_risks(
    thresholds: &RiskThresholds,
    weather: &ResolvedWeather,
    ndmi: f64,
    fungal: bool,
) -> RiskProfile {
    let drought = if weather.drought_flag || ndmi < thresholds.moisture_low {
        RiskLevel::High
    } else if weather.rainfall_30d < thresholds.rainfall_drought_medium_mm {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let flood = if weather.flood_flag {
        RiskLevel::High
    } else if weather.forecast_rain_7d > thresholds.forecast_rain_heavy_mm {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let disease = if fungal {
        RiskLevel::High
    } else if weather.rainfall_30d > thresholds.rainfall_disease_medium_mm {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    // No medium tier for heat stress: the collaborator flag is binary.
    let heat_stress = if weather.temperature_stress {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    RiskProfile {
        drought,
        flood,
        disease,
        heat_stress,
        overall: overall_risk([drought, flood, disease, heat_stress]),
    }
}

/// Counting-vote aggregation over the four category ratings.
///
/// High when at least two categories are High; Medium when one is High or at
/// least two are Medium; otherwise Low.
pub fn overall_risk(levels: [RiskLevel; 4]) -> RiskLevel {
    let high = levels.iter().filter(|l| **l == RiskLevel::High).count();
    let medium = levels.iter().filter(|l| **l == RiskLevel::Medium).count();

    if high >= 2 {
        RiskLevel::High
    } else if high >= 1 || medium >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
