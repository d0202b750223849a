//! Growth-Stage Estimator
//!
//! Buckets elapsed days since planting into a coarse phenological stage.
//! Pure and total: the only failure path is an unparsable planting date,
//! which degrades to `Unknown` (logged, never surfaced).

use chrono::NaiveDate;
use tracing::warn;

use crate::types::GrowthStage;

/// Planting dates arrive as `YYYY-MM-DD` strings from the request boundary.
const PLANTING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Estimate the growth stage from an optional planting date and the
/// caller-supplied current date.
///
/// Stage buckets are half-open 30-day intervals:
/// `[0,30)` Early Growth, `[30,60)` Vegetative, `[60,90)` Flowering,
/// `[90,120)` Fruiting/Grain Fill, `[120,inf)` Maturity/Harvest.
/// A planting date in the future yields `Not Planted`.
pub fn estimate_growth_stage(planting_date: Option<&str>, today: NaiveDate) -> GrowthStage {
    let Some(raw) = planting_date else {
        return GrowthStage::Unknown;
    };

    let planted = match NaiveDate::parse_from_str(raw.trim(), PLANTING_DATE_FORMAT) {
        Ok(date) => date,
        Err(error) => {
            warn!(planting_date = raw, %error, "Unparsable planting date, stage Unknown");
            return GrowthStage::Unknown;
        }
    };

    let days = (today - planted).num_days();
    if days < 0 {
        GrowthStage::NotPlanted
    } else if days < 30 {
        GrowthStage::EarlyGrowth
    } else if days < 60 {
        GrowthStage::Vegetative
    } else if days < 90 {
        GrowthStage::Flowering
    } else if days < 120 {
        GrowthStage::GrainFill
    } else {
        GrowthStage::Maturity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn planted_days_ago(days: i64) -> String {
        (today() - Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    #[test]
    fn missing_date_is_unknown() {
        assert_eq!(estimate_growth_stage(None, today()), GrowthStage::Unknown);
    }

    #[test]
    fn unparsable_date_is_unknown() {
        assert_eq!(
            estimate_growth_stage(Some("last spring"), today()),
            GrowthStage::Unknown
        );
        assert_eq!(
            estimate_growth_stage(Some("2026-13-40"), today()),
            GrowthStage::Unknown
        );
        assert_eq!(estimate_growth_stage(Some(""), today()), GrowthStage::Unknown);
    }

    #[test]
    fn future_date_is_not_planted() {
        assert_eq!(
            estimate_growth_stage(Some(&planted_days_ago(-5)), today()),
            GrowthStage::NotPlanted
        );
    }

    #[test]
    fn bucket_boundaries_are_half_open() {
        let expected = [
            (0, GrowthStage::EarlyGrowth),
            (29, GrowthStage::EarlyGrowth),
            (30, GrowthStage::Vegetative),
            (59, GrowthStage::Vegetative),
            (60, GrowthStage::Flowering),
            (89, GrowthStage::Flowering),
            (90, GrowthStage::GrainFill),
            (119, GrowthStage::GrainFill),
            (120, GrowthStage::Maturity),
        ];
        for (days, stage) in expected {
            assert_eq!(
                estimate_growth_stage(Some(&planted_days_ago(days)), today()),
                stage,
                "day count {days}"
            );
        }
    }

    #[test]
    fn long_past_planting_is_maturity() {
        assert_eq!(
            estimate_growth_stage(Some("2020-01-01"), today()),
            GrowthStage::Maturity
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(
            estimate_growth_stage(Some(" 2026-05-01 "), today()),
            GrowthStage::Vegetative
        );
    }
}
