use anyhow::Result;
use chrono::NaiveDate;

use crate::db::{
    helpers::{read_collection, update_collection},
    Database, GOALS_KEY,
};
use crate::models::{Goal, GoalInput};
use crate::validation::validate_goal;

impl Database {
    pub async fn insert_goal(&self, input: GoalInput, today: NaiveDate) -> Result<Goal> {
        validate_goal(&input)?;
        let goal = Goal::new(input.description.trim(), input.category, input.due_date, today);
        let record = goal.clone();

        self.execute(move |conn| {
            update_collection::<Goal, _, _>(conn, GOALS_KEY, |goals| goals.push(record))
        })
        .await?;

        Ok(goal)
    }

    /// Marks the goal completed on `today`; `None` if it does not exist.
    pub async fn complete_goal(&self, goal_id: &str, today: NaiveDate) -> Result<Option<Goal>> {
        let goal_id = goal_id.to_string();
        self.execute(move |conn| {
            update_collection::<Goal, _, _>(conn, GOALS_KEY, |goals| {
                goals.iter_mut().find(|g| g.id == goal_id).map(|goal| {
                    goal.complete(today);
                    goal.clone()
                })
            })
        })
        .await
    }

    pub async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let goal_id = goal_id.to_string();
        self.execute(move |conn| {
            update_collection::<Goal, _, _>(conn, GOALS_KEY, |goals| {
                let before = goals.len();
                goals.retain(|g| g.id != goal_id);
                goals.len() != before
            })
        })
        .await
    }

    pub async fn get_goals(&self) -> Result<Vec<Goal>> {
        self.execute(|conn| read_collection(conn, GOALS_KEY)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{partition_goals, GoalCategory};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[tokio::test]
    async fn goal_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("glucolog.sqlite3")).unwrap();

        let walk = db
            .insert_goal(
                GoalInput {
                    description: " Caminhar 30 minutos ".into(),
                    category: GoalCategory::Exercise,
                    due_date: None,
                },
                today(),
            )
            .await
            .unwrap();
        assert_eq!(walk.description, "Caminhar 30 minutos");

        let done = db.complete_goal(&walk.id, today()).await.unwrap().unwrap();
        assert_eq!(done.completed_date, Some(today()));
        assert!(db.complete_goal("missing", today()).await.unwrap().is_none());

        let goals = db.get_goals().await.unwrap();
        let (pending, completed) = partition_goals(&goals);
        assert!(pending.is_empty());
        assert_eq!(completed.len(), 1);

        assert!(db.delete_goal(&walk.id).await.unwrap());
        assert!(db.get_goals().await.unwrap().is_empty());
    }
}
