//! Threshold bands used by the chart, the history list and the report.

use serde::{Deserialize, Serialize};

use crate::engine::statistics::{TARGET_HIGH, TARGET_LOW};

/// Upper bound of the `High` band, inclusive (mg/dL)
pub const HIGH_LIMIT: i32 = 250;

/// Band of a single reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ReadingBand {
    Low,
    Normal,
    High,
    VeryHigh,
}

impl ReadingBand {
    pub fn of(value: i32) -> Self {
        if value < TARGET_LOW {
            ReadingBand::Low
        } else if value <= TARGET_HIGH {
            ReadingBand::Normal
        } else if value <= HIGH_LIMIT {
            ReadingBand::High
        } else {
            ReadingBand::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadingBand::Low => "Baixa",
            ReadingBand::Normal => "Normal",
            ReadingBand::High => "Alta",
            ReadingBand::VeryHigh => "Muito Alta",
        }
    }

    /// Chart point color.
    pub fn color(&self) -> &'static str {
        match self {
            ReadingBand::Low => "#4cc9f0",
            ReadingBand::Normal => "#2ecc71",
            ReadingBand::High => "#ff9e00",
            ReadingBand::VeryHigh => "#e74c3c",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ReadingBand::Low => "baixa",
            ReadingBand::Normal => "normal",
            ReadingBand::High => "alta",
            ReadingBand::VeryHigh => "muito-alta",
        }
    }
}

/// A report metric placed in its band, with the sentence printed beside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricAssessment {
    pub css_class: String,
    pub label: String,
    pub interpretation: String,
}

impl MetricAssessment {
    fn new(css_class: &str, label: &str, interpretation: &str) -> Self {
        Self {
            css_class: css_class.to_string(),
            label: label.to_string(),
            interpretation: interpretation.to_string(),
        }
    }
}

pub fn assess_mean(mean: f64) -> MetricAssessment {
    if mean < 100.0 {
        MetricAssessment::new(
            "excelente",
            "Excelente",
            "Controle glicêmico excelente, dentro dos parâmetros ideais para controle rigoroso.",
        )
    } else if mean < 130.0 {
        MetricAssessment::new(
            "bom",
            "Bom",
            "Controle adequado para a maioria dos pacientes diabéticos. Mantenha o acompanhamento.",
        )
    } else if mean < 150.0 {
        MetricAssessment::new(
            "regular",
            "Regular",
            "Controle regular. Considere ajustes na terapia e intensifique as medidas não farmacológicas.",
        )
    } else {
        MetricAssessment::new(
            "precisa-ajuste",
            "Precisa Ajuste",
            "Controle abaixo do ideal. Necessita revisão do tratamento com profissional de saúde.",
        )
    }
}

pub fn assess_time_in_range(percent: f64) -> MetricAssessment {
    if percent >= 70.0 {
        MetricAssessment::new(
            "excelente",
            "Excelente",
            "Excelente tempo no alvo glicêmico. Continue com o tratamento atual.",
        )
    } else if percent >= 50.0 {
        MetricAssessment::new(
            "bom",
            "Bom",
            "Tempo no alvo satisfatório. Mantenha o monitoramento regular.",
        )
    } else {
        MetricAssessment::new(
            "precisa-melhorar",
            "Precisa Melhorar",
            "Tempo no alvo abaixo do ideal. Otimização do tratamento pode ser necessária.",
        )
    }
}

/// Bands for the mean-absolute-deviation variability.
pub fn assess_variability(variability: f64) -> MetricAssessment {
    if variability < 20.0 {
        MetricAssessment::new(
            "baixa",
            "Baixa",
            "Excelente estabilidade glicêmica. Padrão muito consistente.",
        )
    } else if variability < 40.0 {
        MetricAssessment::new(
            "moderada",
            "Moderada",
            "Estabilidade glicêmica aceitável. Continue monitorando.",
        )
    } else {
        MetricAssessment::new(
            "alta",
            "Alta",
            "Alta variabilidade glicêmica. Pode indicar necessidade de ajuste no tratamento.",
        )
    }
}

/// Fasting mean uses the mean bands; `0` means no fasting readings.
pub fn assess_fasting(fasting_mean: f64) -> MetricAssessment {
    if fasting_mean > 0.0 {
        assess_mean(fasting_mean)
    } else {
        MetricAssessment::new("sem-dados", "Sem dados", "Insuficientes dados em jejum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_band_edges() {
        assert_eq!(ReadingBand::of(69), ReadingBand::Low);
        assert_eq!(ReadingBand::of(70), ReadingBand::Normal);
        assert_eq!(ReadingBand::of(180), ReadingBand::Normal);
        assert_eq!(ReadingBand::of(181), ReadingBand::High);
        assert_eq!(ReadingBand::of(250), ReadingBand::High);
        assert_eq!(ReadingBand::of(251), ReadingBand::VeryHigh);
    }

    #[test]
    fn reading_band_colors() {
        assert_eq!(ReadingBand::of(50).color(), "#4cc9f0");
        assert_eq!(ReadingBand::of(120).color(), "#2ecc71");
        assert_eq!(ReadingBand::of(200).color(), "#ff9e00");
        assert_eq!(ReadingBand::of(320).color(), "#e74c3c");
    }

    #[test]
    fn metric_bands() {
        assert_eq!(assess_mean(99.9).label, "Excelente");
        assert_eq!(assess_mean(100.0).label, "Bom");
        assert_eq!(assess_mean(149.9).label, "Regular");
        assert_eq!(assess_mean(150.0).label, "Precisa Ajuste");

        assert_eq!(assess_time_in_range(70.0).css_class, "excelente");
        assert_eq!(assess_time_in_range(69.9).css_class, "bom");
        assert_eq!(assess_time_in_range(49.9).css_class, "precisa-melhorar");

        assert_eq!(assess_variability(19.9).label, "Baixa");
        assert_eq!(assess_variability(20.0).label, "Moderada");
        assert_eq!(assess_variability(40.0).label, "Alta");
    }

    #[test]
    fn fasting_without_data() {
        assert_eq!(assess_fasting(0.0).interpretation, "Insuficientes dados em jejum");
        assert_eq!(assess_fasting(95.0).label, "Excelente");
    }
}
