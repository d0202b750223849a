//! Assessment output types: HealthStatus, GrowthStage, RiskLevel, RiskProfile,
//! Advisory, AssessmentMetrics, Assessment, Sourced

use serde::{Deserialize, Serialize};

// ============================================================================
// Health Status
// ============================================================================

/// Five-level crop health classification derived from the vegetation index.
///
/// Ordered ascending so comparisons read naturally: a higher vegetation index
/// never yields a lower status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Critical = 0,
    Poor = 1,
    Moderate = 2,
    Good = 3,
    Excellent = 4,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Critical => write!(f, "Critical"),
            HealthStatus::Poor => write!(f, "Poor"),
            HealthStatus::Moderate => write!(f, "Moderate"),
            HealthStatus::Good => write!(f, "Good"),
            HealthStatus::Excellent => write!(f, "Excellent"),
        }
    }
}

// ============================================================================
// Growth Stage
// ============================================================================

/// Coarse phenological stage derived from elapsed days since planting.
///
/// Serialized with the report-facing labels (`"Fruiting/Grain Fill"`,
/// `"Maturity/Harvest"`) that downstream renderers display verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GrowthStage {
    #[serde(rename = "Not Planted")]
    NotPlanted,
    #[serde(rename = "Early Growth")]
    EarlyGrowth,
    Vegetative,
    Flowering,
    #[serde(rename = "Fruiting/Grain Fill")]
    GrainFill,
    #[serde(rename = "Maturity/Harvest")]
    Maturity,
    Unknown,
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthStage::NotPlanted => write!(f, "Not Planted"),
            GrowthStage::EarlyGrowth => write!(f, "Early Growth"),
            GrowthStage::Vegetative => write!(f, "Vegetative"),
            GrowthStage::Flowering => write!(f, "Flowering"),
            GrowthStage::GrainFill => write!(f, "Fruiting/Grain Fill"),
            GrowthStage::Maturity => write!(f, "Maturity/Harvest"),
            GrowthStage::Unknown => write!(f, "Unknown"),
        }
    }
}

// ============================================================================
// Risk Levels
// ============================================================================

/// Qualitative risk rating for a single category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Per-category risk ratings plus the aggregate overall rating.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskProfile {
    pub drought: RiskLevel,
    pub flood: RiskLevel,
    pub disease: RiskLevel,
    pub heat_stress: RiskLevel,
    pub overall: RiskLevel,
}

// ============================================================================
// Advisories
// ============================================================================

/// Separator used by `Assessment::recommendation_text`. Legacy renderers split
/// on this string, so no advisory message may contain it.
pub const ADVISORY_SEPARATOR: &str = " | ";

/// Closed set of agronomic advisories the composer can emit.
///
/// Each variant carries a fixed message; the composer's output is an ordered
/// sequence of these, most urgent first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    FieldInspection,
    MaintainPractices,
    Irrigation,
    Drainage,
    WaterConservation,
    FloodPreparation,
    HeatStress,
    ColdStress,
    IrrigationPlanning,
    DelayApplication,
    FloweringCare,
    FungalScouting,
    RoutineMonitoring,
}

impl Advisory {
    /// Human-readable advisory text shown in the field report.
    pub fn message(self) -> &'static str {
        match self {
            Advisory::FieldInspection => {
                "Low vegetation health detected. Inspect field for: \
                 (1) nutrient deficiencies - consider soil testing, \
                 (2) pest or disease pressure, (3) water stress."
            }
            Advisory::MaintainPractices => {
                "Crops showing excellent health. Maintain current practices."
            }
            Advisory::Irrigation => {
                "Low moisture detected (NDMI < 0.2). Consider irrigation if water \
                 is available. Monitor crop water stress symptoms."
            }
            Advisory::Drainage => {
                "High moisture levels detected. Ensure proper drainage to prevent \
                 waterlogging."
            }
            Advisory::WaterConservation => {
                "Drought risk: minimal rainfall in the past 30 days. Implement water \
                 conservation: mulching, reduce tillage, consider irrigation."
            }
            Advisory::FloodPreparation => {
                "Heavy rainfall expected in the next 7 days. Prepare drainage \
                 systems, avoid field operations until soil dries."
            }
            Advisory::HeatStress => {
                "High temperature stress (average above 35C). Ensure adequate \
                 irrigation, monitor for heat stress symptoms."
            }
            Advisory::ColdStress => {
                "Low temperatures detected (average below 10C). Monitor for frost \
                 damage, delay sensitive operations."
            }
            Advisory::IrrigationPlanning => {
                "No rainfall expected in the next 7 days. Plan irrigation \
                 accordingly."
            }
            Advisory::DelayApplication => {
                "Significant rainfall expected. Delay fertilizer and pesticide \
                 applications."
            }
            Advisory::FloweringCare => {
                "Critical flowering stage. Ensure optimal water and nutrients; \
                 avoid stress during this period for maximum yield."
            }
            Advisory::FungalScouting => {
                "Conditions favorable for fungal diseases (high rainfall and \
                 moderate temperatures). Scout regularly, consider preventive \
                 fungicide if disease pressure is high."
            }
            Advisory::RoutineMonitoring => {
                "Crops appear healthy. Continue regular monitoring and maintain \
                 good agricultural practices."
            }
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// Input Provenance
// ============================================================================

/// A resolved engine input, tracking whether the upstream collaborator
/// supplied the value or the documented default was substituted.
///
/// The engine still degrades gracefully on partial upstream data, but the
/// substitution is no longer silent: defaulted fields are listed by name in
/// `AssessmentMetrics::defaulted`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sourced<T> {
    Resolved(T),
    Defaulted { value: T, field: &'static str },
}

impl<T: Copy> Sourced<T> {
    /// Resolve an optional upstream value against its documented default.
    pub fn resolve(upstream: Option<T>, default: T, field: &'static str) -> Self {
        match upstream {
            Some(value) => Sourced::Resolved(value),
            None => Sourced::Defaulted {
                value: default,
                field,
            },
        }
    }

    pub fn value(&self) -> T {
        match self {
            Sourced::Resolved(v) => *v,
            Sourced::Defaulted { value, .. } => *value,
        }
    }

    /// Field name if the default was substituted.
    pub fn defaulted_field(&self) -> Option<&'static str> {
        match self {
            Sourced::Resolved(_) => None,
            Sourced::Defaulted { field, .. } => Some(field),
        }
    }
}

// ============================================================================
// Assessment (engine output)
// ============================================================================

/// Raw numeric snapshot the assessment was derived from, kept for audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentMetrics {
    /// Mean vegetation index used for classification
    pub ndvi: f64,
    /// Mean moisture index used for risk and advisories
    pub ndmi: f64,
    /// Trailing 30-day rainfall total (mm)
    pub rainfall_30d: f64,
    /// Forecast 7-day rainfall total (mm)
    pub forecast_rain_7d: f64,
    /// Trailing 30-day mean temperature (degC)
    pub avg_temperature: f64,
    /// Field area (ha), echoed from the request
    pub area_ha: f64,
    /// Names of inputs that were absent upstream and defaulted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaulted: Vec<String>,
}

/// Complete agronomic assessment for one field.
///
/// An immutable snapshot re-derived fresh on every request; there is no
/// cached or persisted state behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub health_status: HealthStatus,
    pub growth_stage: GrowthStage,
    /// Ordered advisories, most urgent first. Never empty.
    pub recommendations: Vec<Advisory>,
    pub risks: RiskProfile,
    pub metrics: AssessmentMetrics,
}

impl Assessment {
    /// Advisory messages joined with [`ADVISORY_SEPARATOR`] for renderers that
    /// still consume the flat form.
    pub fn recommendation_text(&self) -> String {
        self.recommendations
            .iter()
            .map(|a| a.message())
            .collect::<Vec<_>>()
            .join(ADVISORY_SEPARATOR)
    }
}
