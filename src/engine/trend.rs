use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::engine::period::sort_chronologically;
use crate::models::Reading;

/// Minimum head/tail mean difference (mg/dL) that counts as a trend.
pub const TREND_THRESHOLD: f64 = 15.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "crescendo 📈",
            Trend::Falling => "decrescendo 📉",
            Trend::Stable => "estável →",
        }
    }
}

/// Compares the mean of the first third of the readings with the mean of the
/// last third, in chronological order. Fewer than three readings are `Stable`.
pub fn detect_trend<R: Borrow<Reading>>(readings: &[R]) -> Trend {
    if readings.len() < 3 {
        return Trend::Stable;
    }

    let mut ordered: Vec<&Reading> = readings.iter().map(|r| r.borrow()).collect();
    sort_chronologically(&mut ordered);

    let third = ordered.len() / 3;
    let head = &ordered[..third];
    let tail = &ordered[ordered.len() - third..];

    let difference = mean_value(tail) - mean_value(head);
    if difference > TREND_THRESHOLD {
        Trend::Rising
    } else if difference < -TREND_THRESHOLD {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

fn mean_value(readings: &[&Reading]) -> f64 {
    let sum: f64 = readings.iter().map(|r| f64::from(r.glucose_value)).sum();
    sum / readings.len() as f64
}
