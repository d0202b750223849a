//! Risk-rule constants and engine input defaults as operator-tunable values
//!
//! Each struct implements `Default` with values matching the historical
//! constants, ensuring zero-change behavior when no config file is present.

use serde::{Deserialize, Serialize};

/// Thresholds driving the risk assessor and the recommendation composer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskThresholds {
    /// Moisture index below this is high drought risk / irrigation advisory
    pub moisture_low: f64,
    /// Moisture index above this triggers the drainage advisory
    pub moisture_high: f64,
    /// Trailing 30-day rainfall below this is medium drought risk (mm)
    pub rainfall_drought_medium_mm: f64,
    /// Forecast 7-day rainfall above this is medium flood risk and delays
    /// chemical applications (mm)
    pub forecast_rain_heavy_mm: f64,
    /// Trailing rainfall above this combines with moderate temperature into
    /// high disease risk (mm)
    pub rainfall_disease_high_mm: f64,
    /// Trailing rainfall above this alone is medium disease risk (mm)
    pub rainfall_disease_medium_mm: f64,
    /// Fungal window lower temperature bound, exclusive (degC)
    pub disease_temp_min_c: f64,
    /// Fungal window upper temperature bound, exclusive (degC)
    pub disease_temp_max_c: f64,
    /// Mean temperature above this turns the stress flag into a heat advisory (degC)
    pub heat_advisory_temp_c: f64,
    /// Mean temperature below this turns the stress flag into a cold advisory (degC)
    pub cold_advisory_temp_c: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moisture_low: 0.2,
            moisture_high: 0.5,
            rainfall_drought_medium_mm: 30.0,
            forecast_rain_heavy_mm: 50.0,
            rainfall_disease_high_mm: 80.0,
            rainfall_disease_medium_mm: 50.0,
            disease_temp_min_c: 20.0,
            disease_temp_max_c: 30.0,
            heat_advisory_temp_c: 35.0,
            cold_advisory_temp_c: 10.0,
        }
    }
}

/// Documented defaults substituted for absent upstream fields.
///
/// Chosen to assume benign conditions: mid-range vegetation, moderate
/// moisture, neutral temperature, zero rainfall. Partial upstream failures
/// degrade to a plausible report instead of crashing the assessment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputDefaults {
    pub ndvi_mean: f64,
    pub ndmi_mean: f64,
    pub total_rainfall_30d: f64,
    pub forecast_rain_7d: f64,
    pub avg_temperature: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            ndvi_mean: 0.5,
            ndmi_mean: 0.3,
            total_rainfall_30d: 0.0,
            forecast_rain_7d: 0.0,
            avg_temperature: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_historical_constants() {
        let t = RiskThresholds::default();
        assert_eq!(t.moisture_low, 0.2);
        assert_eq!(t.rainfall_disease_high_mm, 80.0);
        assert_eq!(t.disease_temp_min_c, 20.0);
        assert_eq!(t.disease_temp_max_c, 30.0);

        let d = InputDefaults::default();
        assert_eq!(d.ndvi_mean, 0.5);
        assert_eq!(d.ndmi_mean, 0.3);
        assert_eq!(d.avg_temperature, 25.0);
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let t: RiskThresholds = toml::from_str("moisture_low = 0.25").unwrap();
        assert_eq!(t.moisture_low, 0.25);
        assert_eq!(t.moisture_high, 0.5);
    }
}
