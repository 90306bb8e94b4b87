use serde::{Deserialize, Serialize};

/// Which dispersion measure a preset's variability rule reads.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VariabilityMeasure {
    /// Population standard deviation (`variability_sd`)
    Rms,
    /// Mean absolute deviation (`variability_mad`)
    Mad,
}

/// Named preset selector, as stored in settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PresetKind {
    /// Index / trend view sensitivity
    #[default]
    Quick,
    /// Full report sensitivity
    Clinical,
}

impl PresetKind {
    pub fn preset(&self) -> ThresholdPreset {
        match self {
            PresetKind::Quick => ThresholdPreset::quick(),
            PresetKind::Clinical => ThresholdPreset::clinical(),
        }
    }
}

/// Recommendation thresholds and texts for one call site.
///
/// The two presets are intentionally distinct severity sensitivities; they are
/// not meant to be merged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdPreset {
    pub kind: PresetKind,

    /// Mean strictly above this triggers the high-mean message
    pub high_mean: f64,
    /// Mean strictly below this triggers the low-mean message
    pub low_mean: f64,
    /// Time-in-range strictly below this asks for more monitoring
    pub min_time_in_range: f64,

    pub variability_measure: VariabilityMeasure,
    pub variability_limit: f64,

    /// Share of readings above 180 (0..1) that triggers a therapy review
    pub hyper_share_limit: Option<f64>,

    pub high_mean_message: &'static str,
    pub low_mean_message: &'static str,
    pub monitoring_message: &'static str,
    pub variability_message: &'static str,
    /// `{count}` is replaced with the number of hypoglycemia episodes
    pub hypo_message: &'static str,
    pub hyper_message: &'static str,
    pub closing_messages: &'static [&'static str],
}

impl ThresholdPreset {
    pub fn quick() -> Self {
        Self {
            kind: PresetKind::Quick,
            high_mean: 180.0,
            low_mean: 70.0,
            min_time_in_range: 50.0,
            variability_measure: VariabilityMeasure::Rms,
            variability_limit: 50.0,
            hyper_share_limit: None,
            high_mean_message:
                "Considere ajustar a medicação ou dieta para reduzir a glicemia média",
            low_mean_message:
                "Atenção: risco de hipoglicemia. Avalie necessidade de reduzir medicação",
            monitoring_message: "Aumente o monitoramento para identificar padrões de variação",
            variability_message:
                "Alta variabilidade: tente manter horários regulares de refeições e medicação",
            hypo_message:
                "{count} episódio(s) de hipoglicemia registrado(s). Fique atento aos sintomas",
            hyper_message: "",
            closing_messages: &[
                "Continue monitorando regularmente",
                "Compartilhe esses dados com seu médico na próxima consulta",
            ],
        }
    }

    pub fn clinical() -> Self {
        Self {
            kind: PresetKind::Clinical,
            high_mean: 150.0,
            low_mean: 80.0,
            min_time_in_range: 50.0,
            variability_measure: VariabilityMeasure::Mad,
            variability_limit: 40.0,
            hyper_share_limit: Some(0.3),
            high_mean_message: "Considerar ajuste de medicação ou intensificar medidas não farmacológicas (dieta e exercícios).",
            low_mean_message: "Atenção: média glicêmica baixa. Avaliar risco de hipoglicemia.",
            monitoring_message: "Aumentar frequência de monitoramento para melhor identificação de padrões glicêmicos.",
            variability_message: "Alta variabilidade glicêmica detectada. Tentar manter horários regulares de refeições, medicação e atividade física.",
            hypo_message: "Foram registrados {count} episódio(s) de hipoglicemia. Revisar doses de medicação e horários das refeições.",
            hyper_message:
                "Frequência elevada de hiperglicemias. Avaliar necessidade de ajuste terapêutico.",
            closing_messages: &[
                "Continuar com acompanhamento regular com profissional de saúde.",
                "Manter registro diário no sistema para melhor acompanhamento.",
                "Retornar para reavaliação em 3 meses ou conforme orientação médica.",
            ],
        }
    }
}

impl Default for ThresholdPreset {
    fn default() -> Self {
        Self::quick()
    }
}
