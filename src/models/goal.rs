//! Goal data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GoalCategory {
    Exercise,
    Diet,
    Medication,
    Monitoring,
}

impl GoalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Exercise => "Exercício",
            GoalCategory::Diet => "Alimentação",
            GoalCategory::Medication => "Medicação",
            GoalCategory::Monitoring => "Controle",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub description: String,
    pub category: GoalCategory,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(
        description: impl Into<String>,
        category: GoalCategory,
        due_date: Option<NaiveDate>,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            category,
            due_date,
            completed: false,
            created_date,
            completed_date: None,
        }
    }

    pub fn complete(&mut self, on: NaiveDate) {
        self.completed = true;
        self.completed_date = Some(on);
    }
}

/// Input data for creating a goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    pub description: String,
    pub category: GoalCategory,
    pub due_date: Option<NaiveDate>,
}

/// Splits goals into `(pending, completed)`, keeping their stored order.
pub fn partition_goals(goals: &[Goal]) -> (Vec<&Goal>, Vec<&Goal>) {
    goals.iter().partition(|goal| !goal.completed)
}
