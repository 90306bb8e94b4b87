//! Control-quality tier and recommendation lines.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::engine::config::{ThresholdPreset, VariabilityMeasure};
use crate::engine::statistics::StatisticsResult;
use crate::engine::trend::{detect_trend, Trend};
use crate::models::Reading;

pub const NO_DATA_MESSAGE: &str = "Nenhum registro encontrado no período selecionado.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ControlTier {
    Excellent,
    Good,
    Regular,
    NeedsAdjustment,
    NoData,
}

impl ControlTier {
    pub fn label(&self) -> &'static str {
        match self {
            ControlTier::Excellent => "Excelente 👑",
            ControlTier::Good => "Bom 👍",
            ControlTier::Regular => "Regular ⚠️",
            ControlTier::NeedsAdjustment => "Precisa de Ajuste 🚨",
            ControlTier::NoData => "sem dados",
        }
    }

    /// Badge color for the index view.
    pub fn color(&self) -> &'static str {
        match self {
            ControlTier::Excellent => "#2ecc71",
            ControlTier::Good => "#3498db",
            ControlTier::Regular => "#f39c12",
            ControlTier::NeedsAdjustment => "#e74c3c",
            ControlTier::NoData => "#95a5a6",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub tier: ControlTier,
    pub trend: Trend,
    pub recommendations: Vec<String>,
}

/// (min time-in-range %, max mean, max RMS variability, tier), checked top-down.
const TIER_BANDS: [(f64, f64, f64, ControlTier); 3] = [
    (70.0, 154.0, 36.0, ControlTier::Excellent),
    (50.0, 180.0, 50.0, ControlTier::Good),
    (30.0, 200.0, 70.0, ControlTier::Regular),
];

/// First band whose three limits all hold; `NoData` for an empty result.
pub fn control_tier(stats: &StatisticsResult) -> ControlTier {
    if stats.is_empty() {
        return ControlTier::NoData;
    }

    TIER_BANDS
        .iter()
        .find(|(min_tir, max_mean, max_var, _)| {
            stats.time_in_range_percent >= *min_tir
                && stats.mean <= *max_mean
                && stats.variability_sd <= *max_var
        })
        .map(|(_, _, _, tier)| *tier)
        .unwrap_or(ControlTier::NeedsAdjustment)
}

/// Every rule that applies appends its line, in a fixed order, followed by the
/// preset's closing lines.
pub fn recommendations(stats: &StatisticsResult, preset: &ThresholdPreset) -> Vec<String> {
    if stats.is_empty() {
        return vec![NO_DATA_MESSAGE.to_string()];
    }

    let mut lines = Vec::new();

    if stats.mean > preset.high_mean {
        lines.push(preset.high_mean_message.to_string());
    }
    if stats.mean < preset.low_mean {
        lines.push(preset.low_mean_message.to_string());
    }
    if stats.time_in_range_percent < preset.min_time_in_range {
        lines.push(preset.monitoring_message.to_string());
    }

    let variability = match preset.variability_measure {
        VariabilityMeasure::Rms => stats.variability_sd,
        VariabilityMeasure::Mad => stats.variability_mad,
    };
    if variability > preset.variability_limit {
        lines.push(preset.variability_message.to_string());
    }

    if stats.hypo_count > 0 {
        lines.push(
            preset
                .hypo_message
                .replace("{count}", &stats.hypo_count.to_string()),
        );
    }

    if let Some(limit) = preset.hyper_share_limit {
        if stats.hyper_count as f64 > stats.count as f64 * limit {
            lines.push(preset.hyper_message.to_string());
        }
    }

    lines.extend(preset.closing_messages.iter().map(|m| m.to_string()));
    lines
}

/// Qualitative layer over `stats`. Pure: identical input gives identical output.
pub fn classify<R: Borrow<Reading>>(
    readings: &[R],
    stats: &StatisticsResult,
    preset: &ThresholdPreset,
) -> ClassificationResult {
    ClassificationResult {
        tier: control_tier(stats),
        trend: detect_trend(readings),
        recommendations: recommendations(stats, preset),
    }
}
