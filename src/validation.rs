//! Input-side checks for new records. The engine itself never rejects data.

use anyhow::{bail, Result};

use crate::engine::period::parse_date;
use crate::models::{FoodInput, GoalInput, ReadingInput};

pub const MIN_GLUCOSE: i32 = 20;
pub const MAX_GLUCOSE: i32 = 600;

pub fn validate_reading(input: &ReadingInput) -> Result<()> {
    if !(MIN_GLUCOSE..=MAX_GLUCOSE).contains(&input.glucose_value) {
        bail!("Valor de glicemia inválido ({MIN_GLUCOSE}-{MAX_GLUCOSE} mg/dL)");
    }
    if input.date.trim().is_empty() {
        bail!("Selecione uma data");
    }
    if parse_date(&input.date).is_err() {
        bail!("Data inválida: {}", input.date);
    }
    if input.time.trim().is_empty() {
        bail!("Selecione uma hora");
    }
    Ok(())
}

pub fn validate_goal(input: &GoalInput) -> Result<()> {
    if input.description.trim().is_empty() {
        bail!("Digite uma descrição para a meta");
    }
    Ok(())
}

pub fn validate_food(input: &FoodInput) -> Result<()> {
    if input.name.trim().is_empty() {
        bail!("Informe o nome do alimento");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, GoalCategory};

    fn reading(value: i32, date: &str, time: &str) -> ReadingInput {
        ReadingInput {
            glucose_value: value,
            date: date.into(),
            time: time.into(),
            note: None,
        }
    }

    #[test]
    fn glucose_bounds_are_inclusive() {
        assert!(validate_reading(&reading(20, "2024-01-01", "08:00")).is_ok());
        assert!(validate_reading(&reading(600, "2024-01-01", "08:00")).is_ok());

        let err = validate_reading(&reading(19, "2024-01-01", "08:00")).unwrap_err();
        assert_eq!(err.to_string(), "Valor de glicemia inválido (20-600 mg/dL)");
        assert!(validate_reading(&reading(601, "2024-01-01", "08:00")).is_err());
    }

    #[test]
    fn date_and_time_are_required() {
        let err = validate_reading(&reading(100, "", "08:00")).unwrap_err();
        assert_eq!(err.to_string(), "Selecione uma data");
        let err = validate_reading(&reading(100, "2024-01-01", " ")).unwrap_err();
        assert_eq!(err.to_string(), "Selecione uma hora");
        assert!(validate_reading(&reading(100, "01/01/2024", "08:00")).is_err());
    }

    #[test]
    fn goal_and_food_need_text() {
        let goal = GoalInput {
            description: "  ".into(),
            category: GoalCategory::Monitoring,
            due_date: None,
        };
        assert!(validate_goal(&goal).is_err());

        let food = FoodInput {
            name: String::new(),
            quantity: None,
            carbohydrates: None,
            category: FoodCategory::Other,
            date: "2024-01-01".into(),
            time: "12:00".into(),
            note: None,
        };
        assert!(validate_food(&food).is_err());
    }
}
