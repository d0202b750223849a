//! Crop NDVI profiles - the classification cut points as tunable data
//!
//! Adding a crop is a data change: drop a `[profiles.<crop>]` section into
//! the TOML file. The built-in table ships the stock profiles and is always
//! present underneath user overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ConfigError;

/// Lookup key for the mandatory fallback profile.
pub const FALLBACK_CROP: &str = "other";

/// Four ascending NDVI cut points for one crop category.
///
/// Classification walks the cut points top-down: the first one the index
/// meets or exceeds wins; below `poor` is Critical. Invariant:
/// `excellent > good > moderate > poor >= 0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub excellent: f64,
    pub good: f64,
    pub moderate: f64,
    pub poor: f64,
}

impl CropProfile {
    /// Enforce the strict descending cut-point invariant.
    pub fn validate(&self, crop: &str) -> Result<(), ConfigError> {
        let ordered = self.excellent > self.good
            && self.good > self.moderate
            && self.moderate > self.poor
            && self.poor >= 0.0;
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::InvalidProfile {
                crop: crop.to_string(),
                reason: format!(
                    "cut points must satisfy excellent > good > moderate > poor >= 0, \
                     got {:.3} / {:.3} / {:.3} / {:.3}",
                    self.excellent, self.good, self.moderate, self.poor
                ),
            })
        }
    }
}

/// Immutable crop profile table with case-insensitive lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CropTable {
    profiles: BTreeMap<String, CropProfile>,
}

impl CropTable {
    /// Stock profile table matching the historical threshold constants.
    pub fn builtin() -> Self {
        let mut profiles = BTreeMap::new();
        let mut insert = |crop: &str, excellent, good, moderate, poor| {
            profiles.insert(
                crop.to_string(),
                CropProfile {
                    excellent,
                    good,
                    moderate,
                    poor,
                },
            );
        };
        insert("wheat", 0.70, 0.50, 0.30, 0.20);
        insert("corn", 0.75, 0.55, 0.35, 0.25);
        insert("rice", 0.80, 0.60, 0.40, 0.30);
        insert("soybean", 0.70, 0.50, 0.30, 0.20);
        insert("cotton", 0.65, 0.45, 0.30, 0.20);
        insert("vegetables", 0.70, 0.50, 0.35, 0.25);
        insert("fruit", 0.75, 0.55, 0.40, 0.30);
        insert(FALLBACK_CROP, 0.70, 0.50, 0.30, 0.20);
        Self { profiles }
    }

    /// Overlay user-supplied profiles (lowercased keys) on the built-in table.
    pub fn with_overrides(overrides: BTreeMap<String, CropProfile>) -> Self {
        let mut table = Self::builtin();
        for (crop, profile) in overrides {
            table.profiles.insert(crop.to_lowercase(), profile);
        }
        table
    }

    /// Profile for a crop type, case-insensitive, falling back to `other`
    /// for unrecognized crops. Total: a table that somehow lost its fallback
    /// entry still resolves to the stock fallback cut points.
    pub fn profile(&self, crop_type: &str) -> &CropProfile {
        const STOCK_FALLBACK: CropProfile = CropProfile {
            excellent: 0.70,
            good: 0.50,
            moderate: 0.30,
            poor: 0.20,
        };
        let key = crop_type.trim().to_lowercase();
        self.profiles
            .get(&key)
            .or_else(|| self.profiles.get(FALLBACK_CROP))
            .unwrap_or(&STOCK_FALLBACK)
    }

    /// Validate every profile and the presence of the fallback entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(FALLBACK_CROP) {
            return Err(ConfigError::MissingFallbackProfile);
        }
        for (crop, profile) in &self.profiles {
            profile.validate(crop)?;
        }
        Ok(())
    }

    /// Iterate all (crop, profile) pairs, e.g. for exhaustive tests.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CropProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for CropTable {
    fn default() -> Self {
        Self::builtin()
    }
}
