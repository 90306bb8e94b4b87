//! Report assembly. Produces plain data plus a text summary; layout and PDF
//! export belong to the frontend.

use std::borrow::Borrow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::bands::{
    assess_fasting, assess_mean, assess_time_in_range, assess_variability, MetricAssessment,
    ReadingBand,
};
use crate::engine::classification::{classify, ClassificationResult};
use crate::engine::config::ThresholdPreset;
use crate::engine::period::{select, Period};
use crate::engine::statistics::{compute_statistics, StatisticsResult};
use crate::models::Reading;

/// Rows shown in the report's reading table.
pub const SAMPLE_ROWS: usize = 15;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    #[default]
    Complete,
    GlucoseOnly,
    Simple,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Complete => "Relatório Completo",
            ReportKind::GlucoseOnly => "Apenas Dados de Glicemia",
            ReportKind::Simple => "Relatório Simples",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// `dd/mm/yyyy`
    pub date: String,
    pub time: String,
    pub value: i32,
    pub band: ReadingBand,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricInterpretations {
    pub mean: MetricAssessment,
    pub time_in_range: MetricAssessment,
    pub variability: MetricAssessment,
    pub fasting: MetricAssessment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub kind: ReportKind,
    pub period: Period,
    pub generated_on: NaiveDate,
    /// Display copy, rounded to one decimal
    pub statistics: StatisticsResult,
    pub classification: ClassificationResult,
    pub interpretations: MetricInterpretations,
    pub rows: Vec<ReportRow>,
    pub total_readings: usize,
}

/// `YYYY-MM-DD` to `DD/MM/YYYY`; anything else is returned unchanged.
pub fn format_date_br(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{day}/{month}/{year}"),
        _ => date.to_string(),
    }
}

pub fn build_report<R: Borrow<Reading>>(
    readings: &[R],
    period: &Period,
    kind: ReportKind,
    preset: &ThresholdPreset,
    generated_on: NaiveDate,
) -> Report {
    let selected = select(readings, period);
    let stats = compute_statistics(&selected);
    let classification = classify(&selected, &stats, preset);
    let shown = stats.rounded();

    let interpretations = MetricInterpretations {
        mean: assess_mean(shown.mean),
        time_in_range: assess_time_in_range(shown.time_in_range_percent),
        variability: assess_variability(shown.variability_mad),
        fasting: assess_fasting(shown.fasting_mean),
    };

    let rows = selected
        .iter()
        .take(SAMPLE_ROWS)
        .map(|reading| ReportRow {
            date: format_date_br(&reading.date),
            time: reading.time.clone(),
            value: reading.glucose_value,
            band: ReadingBand::of(reading.glucose_value),
            note: reading.note.clone(),
        })
        .collect();

    Report {
        kind,
        period: *period,
        generated_on,
        statistics: shown,
        classification,
        interpretations,
        rows,
        total_readings: selected.len(),
    }
}

impl Report {
    pub fn recommendations_text(&self) -> String {
        self.classification.recommendations.join(" ")
    }

    /// Executive summary and recommendations as printable lines.
    pub fn summary_text(&self) -> String {
        let stats = &self.statistics;
        let start = self.period.start.format("%Y-%m-%d").to_string();
        let end = self.period.end.format("%Y-%m-%d").to_string();

        let mut lines = vec![
            format!("RELATÓRIO DE MONITORAMENTO GLICÊMICO - {}", self.kind.title()),
            format!(
                "Período: {} a {}",
                format_date_br(&start),
                format_date_br(&end)
            ),
            format!(
                "Data de Geração: {}",
                self.generated_on.format("%d/%m/%Y")
            ),
            String::new(),
            "RESUMO EXECUTIVO".to_string(),
            format!("• Média Glicêmica: {} mg/dL", stats.mean),
            format!("• Glicemia Mínima: {} mg/dL", stats.min),
            format!("• Glicemia Máxima: {} mg/dL", stats.max),
            format!("• Tempo no Alvo: {}%", stats.time_in_range_percent),
            format!("• Hipoglicemias: {}", stats.hypo_count),
            format!("• Hiperglicemias: {}", stats.hyper_count),
            format!("• Variabilidade: {}", stats.variability_mad),
            format!("• Total de Registros: {}", stats.count),
            String::new(),
            "RECOMENDAÇÕES MÉDICAS".to_string(),
        ];
        lines.extend(
            self.classification
                .recommendations
                .iter()
                .map(|rec| format!("• {rec}")),
        );

        lines.join("\n")
    }
}
