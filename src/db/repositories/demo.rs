use anyhow::Result;
use chrono::NaiveDate;
use log::info;

use crate::db::{helpers::update_collection, Database, GOALS_KEY, READINGS_KEY};
use crate::demo::{demo_goals, demo_readings};
use crate::models::{Goal, Reading};

impl Database {
    /// Appends the demonstration week and sample goals to the store.
    pub async fn seed_demo_data(&self, today: NaiveDate) -> Result<()> {
        let readings = demo_readings(today);
        let goals = demo_goals(today);

        self.execute(move |conn| {
            update_collection::<Reading, _, _>(conn, READINGS_KEY, |stored| {
                stored.extend(readings)
            })?;
            update_collection::<Goal, _, _>(conn, GOALS_KEY, |stored| stored.extend(goals))
        })
        .await?;

        info!("Demo data added");
        Ok(())
    }
}
