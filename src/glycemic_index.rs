//! Rough glycemic-index estimation for a food entry.

use crate::models::{FoodCategory, GlycemicIndex};

const LOW_GI_FOODS: [&str; 10] = [
    "maçã",
    "pera",
    "laranja",
    "amêndoa",
    "noz",
    "aveia",
    "batata-doce",
    "feijão",
    "lentilha",
    "grão-de-bico",
];

const HIGH_GI_FOODS: [&str; 8] = [
    "arroz branco",
    "pão branco",
    "batata",
    "mel",
    "açúcar",
    "refrigerante",
    "sorvete",
    "bolacha",
];

/// Name keywords win over the category; the low list is checked first, so
/// "batata-doce" is low even though it contains "batata".
pub fn estimate_glycemic_index(name: &str, category: FoodCategory) -> GlycemicIndex {
    let name = name.to_lowercase();

    if LOW_GI_FOODS.iter().any(|food| name.contains(food)) {
        return GlycemicIndex::Low;
    }
    if HIGH_GI_FOODS.iter().any(|food| name.contains(food)) {
        return GlycemicIndex::High;
    }

    match category {
        FoodCategory::Cereals => GlycemicIndex::MediumHigh,
        FoodCategory::Fruits => GlycemicIndex::MediumLow,
        FoodCategory::Vegetables | FoodCategory::Proteins | FoodCategory::Dairy => {
            GlycemicIndex::Low
        }
        FoodCategory::Sweets => GlycemicIndex::High,
        FoodCategory::Beverages | FoodCategory::Other => GlycemicIndex::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_take_precedence() {
        assert_eq!(
            estimate_glycemic_index("Batata-doce assada", FoodCategory::Cereals),
            GlycemicIndex::Low
        );
        assert_eq!(
            estimate_glycemic_index("Batata frita", FoodCategory::Vegetables),
            GlycemicIndex::High
        );
        assert_eq!(
            estimate_glycemic_index("Suco de LARANJA", FoodCategory::Beverages),
            GlycemicIndex::Low
        );
    }

    #[test]
    fn falls_back_to_category() {
        assert_eq!(
            estimate_glycemic_index("Granola", FoodCategory::Cereals),
            GlycemicIndex::MediumHigh
        );
        assert_eq!(
            estimate_glycemic_index("Manga", FoodCategory::Fruits),
            GlycemicIndex::MediumLow
        );
        assert_eq!(
            estimate_glycemic_index("Iogurte", FoodCategory::Dairy),
            GlycemicIndex::Low
        );
        assert_eq!(
            estimate_glycemic_index("Brigadeiro", FoodCategory::Sweets),
            GlycemicIndex::High
        );
        assert_eq!(
            estimate_glycemic_index("Café", FoodCategory::Beverages),
            GlycemicIndex::Medium
        );
    }
}
