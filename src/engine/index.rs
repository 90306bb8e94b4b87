//! Quick glycemic index: statistics plus classification for one period.

use std::borrow::Borrow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::classification::{classify, ClassificationResult};
use crate::engine::config::ThresholdPreset;
use crate::engine::period::{select, Period};
use crate::engine::statistics::{compute_statistics, StatisticsResult};
use crate::models::Reading;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexResult {
    pub period: Period,
    pub period_days: i64,
    /// Display copy, rounded to one decimal
    pub statistics: StatisticsResult,
    pub classification: ClassificationResult,
    /// pt-BR tier text and badge color shown by the index view
    pub tier_label: String,
    pub tier_color: String,
    pub trend_label: String,
}

pub fn compute_index<R: Borrow<Reading>>(
    readings: &[R],
    period: &Period,
    preset: &ThresholdPreset,
) -> IndexResult {
    let selected = select(readings, period);
    let stats = compute_statistics(&selected);
    let classification = classify(&selected, &stats, preset);

    IndexResult {
        period: *period,
        period_days: period.span_days(),
        statistics: stats.rounded(),
        tier_label: classification.tier.label().to_string(),
        tier_color: classification.tier.color().to_string(),
        trend_label: classification.trend.label().to_string(),
        classification,
    }
}

pub fn compute_index_last_days<R: Borrow<Reading>>(
    readings: &[R],
    days: u32,
    today: NaiveDate,
    preset: &ThresholdPreset,
) -> IndexResult {
    compute_index(readings, &Period::last_days(days, today), preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_readings;
    use crate::engine::classification::ControlTier;
    use crate::engine::trend::Trend;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 14).unwrap()
    }

    #[test]
    fn demo_week_is_well_controlled() {
        let readings = demo_readings(today());
        let index = compute_index_last_days(&readings, 7, today(), &ThresholdPreset::quick());
        let stats = &index.statistics;

        assert_eq!(stats.count, 21);
        assert!((88.0..=105.0).contains(&stats.fasting_mean), "{}", stats.fasting_mean);
        assert!(
            (120.0..=145.0).contains(&stats.post_prandial_mean),
            "{}",
            stats.post_prandial_mean
        );
        assert!(matches!(
            index.classification.tier,
            ControlTier::Good | ControlTier::Excellent
        ));
        assert_eq!(index.classification.trend, Trend::Stable);
        assert_eq!(index.period_days, 7);
    }

    #[test]
    fn empty_period_reports_no_data() {
        let readings = demo_readings(today());
        let period = Period::parse("2020-01-01", "2020-01-31").unwrap();
        let index = compute_index(&readings, &period, &ThresholdPreset::quick());
        assert_eq!(index.statistics.count, 0);
        assert_eq!(index.classification.tier, ControlTier::NoData);
        assert_eq!(index.classification.recommendations.len(), 1);
        assert_eq!(index.tier_label, "sem dados");
        assert_eq!(index.tier_color, "#95a5a6");
    }

    #[test]
    fn display_labels_travel_with_the_result() {
        let readings = vec![
            Reading::new(100, "2024-09-10", "08:00", None),
            Reading::new(105, "2024-09-11", "08:00", None),
            Reading::new(110, "2024-09-12", "08:00", None),
            Reading::new(150, "2024-09-13", "08:00", None),
            Reading::new(155, "2024-09-14", "08:00", None),
            Reading::new(160, "2024-09-14", "20:00", None),
        ];
        let index = compute_index_last_days(&readings, 30, today(), &ThresholdPreset::quick());
        assert_eq!(index.classification.trend, Trend::Rising);
        assert_eq!(index.trend_label, "crescendo 📈");
        assert_eq!(index.tier_label, index.classification.tier.label());
        assert_eq!(index.tier_color, index.classification.tier.color());

        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["trendLabel"], "crescendo 📈");
        assert!(json["tierColor"].as_str().unwrap().starts_with('#'));
    }

    #[test]
    fn statistics_are_rounded_for_display() {
        let readings = vec![
            Reading::new(95, "2024-09-10", "08:00", None),
            Reading::new(120, "2024-09-10", "12:00", None),
            Reading::new(110, "2024-09-10", "18:00", None),
        ];
        let index = compute_index_last_days(&readings, 30, today(), &ThresholdPreset::quick());
        assert_eq!(index.statistics.mean, 108.3);
    }
}
