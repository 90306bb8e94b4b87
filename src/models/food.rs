//! Food entry data model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::glycemic_index::estimate_glycemic_index;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FoodCategory {
    Cereals,
    Fruits,
    Vegetables,
    Proteins,
    Dairy,
    Sweets,
    Beverages,
    Other,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Cereals => "Cereais",
            FoodCategory::Fruits => "Frutas",
            FoodCategory::Vegetables => "Vegetais",
            FoodCategory::Proteins => "Proteínas",
            FoodCategory::Dairy => "Laticínios",
            FoodCategory::Sweets => "Doces",
            FoodCategory::Beverages => "Bebidas",
            FoodCategory::Other => "Outros",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GlycemicIndex {
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
}

impl GlycemicIndex {
    pub fn label(&self) -> &'static str {
        match self {
            GlycemicIndex::Low => "Baixo",
            GlycemicIndex::MediumLow => "Baixo-Médio",
            GlycemicIndex::Medium => "Médio",
            GlycemicIndex::MediumHigh => "Médio-Alto",
            GlycemicIndex::High => "Alto",
        }
    }

    /// Badge color shown next to the entry.
    pub fn color(&self) -> &'static str {
        match self {
            GlycemicIndex::Low => "#2ecc71",
            GlycemicIndex::High => "#e74c3c",
            _ => "#f39c12",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    /// grams
    pub quantity: Option<f64>,
    /// grams
    pub carbohydrates: Option<f64>,
    pub category: FoodCategory,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub estimated_glycemic_index: GlycemicIndex,
}

/// Input data for registering a food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodInput {
    pub name: String,
    pub quantity: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub category: FoodCategory,
    pub date: String,
    pub time: String,
    pub note: Option<String>,
}

impl From<FoodInput> for FoodEntry {
    fn from(input: FoodInput) -> Self {
        let name = input.name.trim().to_string();
        let estimated_glycemic_index = estimate_glycemic_index(&name, input.category);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            quantity: input.quantity,
            carbohydrates: input.carbohydrates,
            category: input.category,
            date: input.date,
            time: input.time,
            note: input.note.filter(|n| !n.trim().is_empty()),
            estimated_glycemic_index,
        }
    }
}
