//! End-to-end assessment scenarios
//!
//! Exercises the engine through its public API with realistic field
//! conditions, pinning the exact classifications, risk ratings, and advisory
//! ordering the report renderer depends on.

use chrono::NaiveDate;
use fieldmon::engine::AssessmentEngine;
use fieldmon::types::{
    Advisory, GrowthStage, HealthStatus, RiskLevel, SatelliteSummary, WeatherSummary,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
}

fn weather(rain_30d: f64, temp: f64, forecast_7d: f64) -> WeatherSummary {
    WeatherSummary {
        total_rainfall_30d: Some(rain_30d),
        avg_temperature: Some(temp),
        forecast_rain_7d: Some(forecast_7d),
        ..WeatherSummary::default()
    }
}

fn satellite(ndvi: f64, ndmi: f64) -> SatelliteSummary {
    SatelliteSummary {
        ndvi_mean: Some(ndvi),
        ndmi_mean: Some(ndmi),
        ..SatelliteSummary::default()
    }
}

#[test]
fn healthy_wheat_mid_season() {
    let engine = AssessmentEngine::default();
    let assessment = engine.assess(
        &weather(45.0, 22.0, 10.0),
        &satellite(0.72, 0.35),
        "wheat",
        Some("2026-04-17"), // 59 days before `today`
        12.0,
        today(),
    );

    assert_eq!(assessment.health_status, HealthStatus::Excellent);
    assert_eq!(assessment.growth_stage, GrowthStage::Vegetative);
    assert_eq!(assessment.risks.drought, RiskLevel::Low);
    assert_eq!(assessment.risks.flood, RiskLevel::Low);
    assert_eq!(assessment.risks.disease, RiskLevel::Low);
    assert_eq!(assessment.risks.heat_stress, RiskLevel::Low);
    assert_eq!(assessment.risks.overall, RiskLevel::Low);
    assert_eq!(assessment.recommendations, vec![Advisory::MaintainPractices]);
}

#[test]
fn drought_stricken_rice() {
    let engine = AssessmentEngine::default();
    let mut conditions = weather(10.0, 24.0, 0.0);
    conditions.drought_risk = true;

    let assessment = engine.assess(
        &conditions,
        &satellite(0.15, 0.1),
        "rice",
        None,
        3.0,
        today(),
    );

    assert_eq!(assessment.health_status, HealthStatus::Critical);
    assert_eq!(assessment.risks.drought, RiskLevel::High);

    // The four advisories must appear in this relative order
    let expected = [
        Advisory::FieldInspection,
        Advisory::Irrigation,
        Advisory::WaterConservation,
        Advisory::IrrigationPlanning,
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|advisory| {
            assessment
                .recommendations
                .iter()
                .position(|a| a == advisory)
                .unwrap_or_else(|| panic!("{advisory:?} missing from recommendations"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "advisories out of order: {positions:?}"
    );
}

#[test]
fn fungal_conditions_rate_disease_high_and_advise_scouting() {
    let engine = AssessmentEngine::default();
    let assessment = engine.assess(
        &weather(95.0, 24.0, 10.0),
        &satellite(0.55, 0.35),
        "corn",
        None,
        8.0,
        today(),
    );
    assert_eq!(assessment.risks.disease, RiskLevel::High);
    assert!(assessment.recommendations.contains(&Advisory::FungalScouting));
}

#[test]
fn two_high_categories_make_overall_high() {
    let engine = AssessmentEngine::default();
    let mut conditions = weather(10.0, 38.0, 5.0);
    conditions.drought_risk = true;
    conditions.temperature_stress = true;

    let assessment = engine.assess(
        &conditions,
        &satellite(0.45, 0.25),
        "cotton",
        None,
        20.0,
        today(),
    );
    assert_eq!(assessment.risks.drought, RiskLevel::High);
    assert_eq!(assessment.risks.heat_stress, RiskLevel::High);
    assert_eq!(assessment.risks.overall, RiskLevel::High);
}

#[test]
fn recommendations_are_never_empty() {
    let engine = AssessmentEngine::default();
    let ndvi_samples = [-0.5, 0.1, 0.35, 0.55, 0.9];
    let ndmi_samples = [0.05, 0.3, 0.6];
    let rain_samples = [0.0, 45.0, 95.0];
    let temp_samples = [5.0, 22.0, 38.0];
    let forecast_samples = [0.0, 10.0, 60.0];

    for ndvi in ndvi_samples {
        for ndmi in ndmi_samples {
            for rain in rain_samples {
                for temp in temp_samples {
                    for forecast in forecast_samples {
                        for flags in 0..8u8 {
                            let mut conditions = weather(rain, temp, forecast);
                            conditions.drought_risk = flags & 1 != 0;
                            conditions.flood_risk = flags & 2 != 0;
                            conditions.temperature_stress = flags & 4 != 0;
                            let assessment = engine.assess(
                                &conditions,
                                &satellite(ndvi, ndmi),
                                "soybean",
                                Some("2026-03-01"),
                                5.0,
                                today(),
                            );
                            assert!(
                                !assessment.recommendations.is_empty(),
                                "empty advisories for ndvi={ndvi} ndmi={ndmi} rain={rain} \
                                 temp={temp} forecast={forecast} flags={flags:#05b}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn classification_is_exhaustive_and_monotonic_per_profile() {
    let engine = AssessmentEngine::default();
    let conditions = weather(45.0, 22.0, 10.0);
    for crop in ["wheat", "corn", "rice", "soybean", "cotton", "vegetables", "fruit", "other"] {
        let mut previous = HealthStatus::Critical;
        for step in -1000..=1000 {
            let ndvi = f64::from(step) / 1000.0;
            let assessment =
                engine.assess(&conditions, &satellite(ndvi, 0.35), crop, None, 1.0, today());
            assert!(
                assessment.health_status >= previous,
                "non-monotonic at {crop} ndvi={ndvi}"
            );
            previous = assessment.health_status;
        }
    }
}
