//! Aggregate statistics over a set of glucose readings.

use std::borrow::Borrow;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::Reading;

/// Lower bound of the target band, inclusive (mg/dL)
pub const TARGET_LOW: i32 = 70;
/// Upper bound of the target band, inclusive (mg/dL)
pub const TARGET_HIGH: i32 = 180;

const FASTING_HOURS: [(u32, u32); 1] = [(6, 9)];
const POST_PRANDIAL_HOURS: [(u32, u32); 2] = [(12, 14), (19, 21)];

/// Derived statistics for one selection of readings. Recomputed on demand,
/// never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResult {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
    pub min: i32,
    pub max: i32,
    pub time_in_range_count: usize,
    /// Percentage in `[70, 180]`, rounded to one decimal
    pub time_in_range_percent: f64,
    /// RMS variability, read by the quick preset and the tier bands
    pub variability_sd: f64,
    /// Mean absolute deviation, read by the clinical preset
    pub variability_mad: f64,
    /// Mean of readings taken 06:00-09:59, `0` if none
    pub fasting_mean: f64,
    /// Mean of readings taken 12:00-14:59 or 19:00-21:59, `0` if none
    pub post_prandial_mean: f64,
    pub hypo_count: usize,
    pub hyper_count: usize,
}

impl StatisticsResult {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Copy with display fields rounded to one decimal.
    pub fn rounded(&self) -> Self {
        Self {
            mean: round1(self.mean),
            standard_deviation: round1(self.standard_deviation),
            time_in_range_percent: round1(self.time_in_range_percent),
            variability_sd: round1(self.variability_sd),
            variability_mad: round1(self.variability_mad),
            fasting_mean: round1(self.fasting_mean),
            post_prandial_mean: round1(self.post_prandial_mean),
            ..self.clone()
        }
    }

    /// Readings that are neither hypo nor hyper.
    pub fn in_range_count(&self) -> usize {
        self.count - self.hypo_count - self.hyper_count
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn in_windows(hour: Option<u32>, windows: &[(u32, u32)]) -> bool {
    hour.is_some_and(|h| windows.iter().any(|(from, to)| h >= *from && h <= *to))
}

/// `sqrt(mean((v - mean)^2))`, zero for fewer than two values.
pub fn rms_variability(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let Some(m) = mean(values.iter().copied()) else {
        return 0.0;
    };
    mean(values.iter().map(|v| (v - m).powi(2)))
        .map(f64::sqrt)
        .unwrap_or(0.0)
}

/// `mean(|v - mean|)`, zero for fewer than two values.
pub fn mad_variability(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let Some(m) = mean(values.iter().copied()) else {
        return 0.0;
    };
    mean(values.iter().map(|v| (v - m).abs())).unwrap_or(0.0)
}

/// One-decimal share of in-range readings. Only a fully in-range selection
/// reaches `100.0`.
fn in_range_percent(in_range: usize, count: usize) -> f64 {
    let percent = round1(in_range as f64 / count as f64 * 100.0);
    if in_range < count {
        percent.min(99.9)
    } else {
        percent
    }
}

/// Computes the aggregate metrics for `readings`.
///
/// An empty input yields the zero result with `count == 0`.
pub fn compute_statistics<R: Borrow<Reading>>(readings: &[R]) -> StatisticsResult {
    if readings.is_empty() {
        return StatisticsResult::default();
    }

    let values: Vec<f64> = readings
        .iter()
        .map(|r| f64::from(r.borrow().glucose_value))
        .collect();
    let count = values.len();
    let mean_value = values.iter().sum::<f64>() / count as f64;

    let standard_deviation =
        (values.iter().map(|v| (v - mean_value).powi(2)).sum::<f64>() / count as f64).sqrt();

    let mut min = i32::MAX;
    let mut max = i32::MIN;
    let mut hypo_count = 0;
    let mut hyper_count = 0;
    let mut time_in_range_count = 0;
    for reading in readings {
        let value = reading.borrow().glucose_value;
        min = min.min(value);
        max = max.max(value);
        if value < TARGET_LOW {
            hypo_count += 1;
        } else if value > TARGET_HIGH {
            hyper_count += 1;
        } else {
            time_in_range_count += 1;
        }
    }

    let fasting_mean = mean(
        readings
            .iter()
            .map(|r| r.borrow())
            .filter(|r| in_windows(r.hour(), &FASTING_HOURS))
            .map(|r| f64::from(r.glucose_value)),
    )
    .unwrap_or(0.0);

    let post_prandial_mean = mean(
        readings
            .iter()
            .map(|r| r.borrow())
            .filter(|r| in_windows(r.hour(), &POST_PRANDIAL_HOURS))
            .map(|r| f64::from(r.glucose_value)),
    )
    .unwrap_or(0.0);

    let result = StatisticsResult {
        count,
        mean: mean_value,
        standard_deviation,
        min,
        max,
        time_in_range_count,
        time_in_range_percent: in_range_percent(time_in_range_count, count),
        variability_sd: rms_variability(&values),
        variability_mad: mad_variability(&values),
        fasting_mean,
        post_prandial_mean,
        hypo_count,
        hyper_count,
    };

    debug!(
        "statistics over {} readings: tir={}%, hypo={}, hyper={}",
        result.count, result.time_in_range_percent, result.hypo_count, result.hyper_count
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(values: &[(i32, &str)]) -> Vec<Reading> {
        values
            .iter()
            .map(|(v, t)| Reading::new(*v, "2024-04-02", *t, None))
            .collect()
    }

    fn flat(values: &[i32]) -> Vec<Reading> {
        values
            .iter()
            .map(|v| Reading::new(*v, "2024-04-02", "10:00", None))
            .collect()
    }

    #[test]
    fn empty_input_is_zero_result() {
        let stats = compute_statistics::<Reading>(&[]);
        assert_eq!(stats, StatisticsResult::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn one_day_in_range() {
        let stats = compute_statistics(&flat(&[95, 120, 110]));
        let shown = stats.rounded();

        assert_eq!(shown.count, 3);
        assert_eq!(shown.mean, 108.3);
        assert_eq!(shown.min, 95);
        assert_eq!(shown.max, 120);
        assert_eq!(shown.time_in_range_percent, 100.0);
        assert_eq!(shown.hypo_count, 0);
        assert_eq!(shown.hyper_count, 0);
    }

    #[test]
    fn extremes_are_out_of_range() {
        let stats = compute_statistics(&flat(&[50, 300]));
        assert_eq!(stats.hypo_count, 1);
        assert_eq!(stats.hyper_count, 1);
        assert_eq!(stats.time_in_range_count, 0);
        assert_eq!(stats.time_in_range_percent, 0.0);
    }

    #[test]
    fn band_counts_partition_the_input() {
        let values = [40, 69, 70, 71, 150, 180, 181, 250, 251, 599];
        let stats = compute_statistics(&flat(&values));
        assert_eq!(
            stats.hypo_count + stats.time_in_range_count + stats.hyper_count,
            stats.count
        );
        assert_eq!(stats.in_range_count(), 4);
        assert_eq!(stats.time_in_range_percent, 40.0);
    }

    #[test]
    fn standard_deviation_is_population_estimator() {
        let stats = compute_statistics(&flat(&[100, 200]));
        assert_eq!(stats.standard_deviation, 50.0);
        assert_eq!(stats.variability_sd, 50.0);
        assert_eq!(stats.variability_mad, 50.0);

        let stats = compute_statistics(&flat(&[100, 100, 160]));
        // mean 120, deviations 20, 20, 40
        assert!((stats.variability_mad - 26.666_666).abs() < 1e-3);
        assert!((stats.standard_deviation - 800f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn constant_values_have_no_dispersion() {
        let stats = compute_statistics(&flat(&[123, 123, 123, 123]));
        assert_eq!(stats.standard_deviation, 0.0);
        assert_eq!(stats.variability_mad, 0.0);

        let stats = compute_statistics(&flat(&[123, 124]));
        assert!(stats.standard_deviation > 0.0);
    }

    #[test]
    fn single_reading_has_zero_variability() {
        let stats = compute_statistics(&flat(&[140]));
        assert_eq!(stats.variability_sd, 0.0);
        assert_eq!(stats.variability_mad, 0.0);
        assert_eq!(stats.mean, 140.0);
    }

    #[test]
    fn time_in_range_percent_rounds_to_one_decimal() {
        let stats = compute_statistics(&flat(&[100, 100, 200]));
        assert_eq!(stats.time_in_range_percent, 66.7);
    }

    #[test]
    fn fasting_and_post_prandial_windows() {
        let stats = compute_statistics(&readings(&[
            (90, "05:59"),
            (100, "06:00"),
            (110, "09:59"),
            (200, "10:00"),
            (140, "12:00"),
            (150, "14:30"),
            (160, "19:15"),
            (170, "21:59"),
            (300, "22:00"),
        ]));
        assert_eq!(stats.fasting_mean, 105.0);
        assert_eq!(stats.post_prandial_mean, 155.0);
    }

    #[test]
    fn sub_means_default_to_zero() {
        let stats = compute_statistics(&readings(&[(100, "10:00"), (120, "16:00"), (0, "junk")]));
        assert_eq!(stats.fasting_mean, 0.0);
        assert_eq!(stats.post_prandial_mean, 0.0);
    }

    #[test]
    fn accepts_borrowed_readings() {
        let owned = flat(&[80, 90, 100]);
        let borrowed: Vec<&Reading> = owned.iter().collect();
        assert_eq!(compute_statistics(&borrowed), compute_statistics(&owned));
    }

    #[test]
    fn one_outlier_in_a_large_window_keeps_tir_below_100() {
        let mut values = vec![100; 1999];
        values.push(300);
        let stats = compute_statistics(&flat(&values));

        assert_eq!(stats.hyper_count, 1);
        assert!(stats.time_in_range_percent < 100.0);
        assert_eq!(stats.time_in_range_percent, 99.9);
        assert_eq!(stats.rounded().time_in_range_percent, 99.9);

        let all_in_range = compute_statistics(&flat(&[100; 2000]));
        assert_eq!(all_in_range.time_in_range_percent, 100.0);
    }
}
