//! Agronomic Assessment Engine
//!
//! The decision core: four pure sub-functions (growth stage, health
//! classification, risk assessment, recommendation composition) over
//! immutable, already-fetched inputs. Stateless per invocation, no I/O,
//! total over well-typed inputs; safe to call concurrently without
//! coordination.

pub mod health;
pub mod recommend;
pub mod risk;
pub mod stage;

pub use health::classify_health;
pub use recommend::compose_recommendations;
pub use risk::{assess_risks, fungal_conditions, overall_risk};
pub use stage::estimate_growth_stage;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AgroConfig;
use crate::types::{
    Assessment, AssessmentMetrics, SatelliteSummary, Sourced, WeatherSummary,
};

/// Weather inputs after default substitution, shared by the risk assessor
/// and the recommendation composer.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedWeather {
    pub rainfall_30d: f64,
    pub forecast_rain_7d: f64,
    pub avg_temperature: f64,
    pub drought_flag: bool,
    pub flood_flag: bool,
    pub temperature_stress: bool,
}

/// The assessment engine: crop profiles and rule thresholds bound at
/// construction, pure computation thereafter.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: AgroConfig,
}

impl AssessmentEngine {
    pub fn new(config: AgroConfig) -> Self {
        Self { config }
    }

    /// Engine bound to the global configuration.
    pub fn from_global_config() -> Self {
        Self::new(crate::config::get().clone())
    }

    /// Derive a complete assessment for one field.
    ///
    /// `today` is caller-supplied so the computation stays deterministic:
    /// identical inputs always produce identical assessments. Absent
    /// upstream numeric fields are substituted with the configured defaults
    /// and recorded by name in the metrics snapshot. `area_ha` is echoed
    /// into the metrics; validating it is the caller's responsibility.
    pub fn assess(
        &self,
        weather: &WeatherSummary,
        satellite: &SatelliteSummary,
        crop_type: &str,
        planting_date: Option<&str>,
        area_ha: f64,
        today: NaiveDate,
    ) -> Assessment {
        let defaults = &self.config.input_defaults;
        let thresholds = &self.config.risk;

        let ndvi = Sourced::resolve(satellite.ndvi_mean, defaults.ndvi_mean, "ndvi_mean");
        let ndmi = Sourced::resolve(satellite.ndmi_mean, defaults.ndmi_mean, "ndmi_mean");
        let rainfall_30d = Sourced::resolve(
            weather.total_rainfall_30d,
            defaults.total_rainfall_30d,
            "total_rainfall_30d",
        );
        let forecast_rain_7d = Sourced::resolve(
            weather.forecast_rain_7d,
            defaults.forecast_rain_7d,
            "forecast_rain_7d",
        );
        let avg_temperature = Sourced::resolve(
            weather.avg_temperature,
            defaults.avg_temperature,
            "avg_temperature",
        );

        let resolved = ResolvedWeather {
            rainfall_30d: rainfall_30d.value(),
            forecast_rain_7d: forecast_rain_7d.value(),
            avg_temperature: avg_temperature.value(),
            drought_flag: weather.drought_risk,
            flood_flag: weather.flood_risk,
            temperature_stress: weather.temperature_stress,
        };

        let growth_stage = estimate_growth_stage(planting_date, today);
        let health_status = classify_health(ndvi.value(), self.config.profiles.profile(crop_type));

        // Single source for the rain+temperature fungal signal (consumed by
        // both the disease risk rating and the scouting advisory).
        let fungal = fungal_conditions(thresholds, resolved.rainfall_30d, resolved.avg_temperature);

        let recommendations = compose_recommendations(
            thresholds,
            health_status,
            growth_stage,
            ndmi.value(),
            &resolved,
            fungal,
        );
        let risks = assess_risks(thresholds, &resolved, ndmi.value(), fungal);

        let defaulted: Vec<String> = [
            ndvi.defaulted_field(),
            ndmi.defaulted_field(),
            rainfall_30d.defaulted_field(),
            forecast_rain_7d.defaulted_field(),
            avg_temperature.defaulted_field(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

        debug!(
            crop_type,
            health = %health_status,
            stage = %growth_stage,
            overall_risk = %risks.overall,
            advisories = recommendations.len(),
            defaulted_inputs = defaulted.len(),
            "Assessment derived"
        );

        Assessment {
            health_status,
            growth_stage,
            recommendations,
            risks,
            metrics: AssessmentMetrics {
                ndvi: ndvi.value(),
                ndmi: ndmi.value(),
                rainfall_30d: rainfall_30d.value(),
                forecast_rain_7d: forecast_rain_7d.value(),
                avg_temperature: avg_temperature.value(),
                area_ha,
                defaulted,
            },
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(AgroConfig::default())
    }
}
