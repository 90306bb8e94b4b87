use anyhow::Result;

use crate::db::{
    helpers::{read_collection, update_collection},
    Database, FOODS_KEY,
};
use crate::engine::period::combine;
use crate::models::{FoodCategory, FoodEntry, FoodInput};
use crate::validation::validate_food;

impl Database {
    /// Validates the entry and stores it with its estimated glycemic index.
    pub async fn insert_food(&self, input: FoodInput) -> Result<FoodEntry> {
        validate_food(&input)?;
        let entry = FoodEntry::from(input);
        let record = entry.clone();

        self.execute(move |conn| {
            update_collection::<FoodEntry, _, _>(conn, FOODS_KEY, |foods| foods.push(record))
        })
        .await?;

        Ok(entry)
    }

    pub async fn delete_food(&self, food_id: &str) -> Result<bool> {
        let food_id = food_id.to_string();
        self.execute(move |conn| {
            update_collection::<FoodEntry, _, _>(conn, FOODS_KEY, |foods| {
                let before = foods.len();
                foods.retain(|f| f.id != food_id);
                foods.len() != before
            })
        })
        .await
    }

    /// Entries, optionally limited to one category, newest first.
    pub async fn get_foods(&self, category: Option<FoodCategory>) -> Result<Vec<FoodEntry>> {
        let mut foods: Vec<FoodEntry> = self
            .execute(|conn| read_collection(conn, FOODS_KEY))
            .await?;

        if let Some(category) = category {
            foods.retain(|f| f.category == category);
        }
        foods.sort_by(|a, b| combine(&b.date, &b.time).cmp(&combine(&a.date, &a.time)));
        Ok(foods)
    }
}
