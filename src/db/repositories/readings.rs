use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::db::{
    helpers::{read_collection, update_collection},
    Database, READINGS_KEY,
};
use crate::engine::bands::ReadingBand;
use crate::engine::period::chronological;
use crate::models::{Reading, ReadingInput};
use crate::validation::validate_reading;
use crate::{log_error, log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// History list filters; `None` fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    pub date: Option<String>,
    pub band: Option<ReadingBand>,
}

/// Applies `filter` and orders the result newest first.
pub fn filter_history(readings: Vec<Reading>, filter: &HistoryFilter) -> Vec<Reading> {
    let mut history: Vec<Reading> = readings
        .into_iter()
        .filter(|r| filter.date.as_ref().map_or(true, |d| &r.date == d))
        .filter(|r| {
            filter
                .band
                .map_or(true, |band| ReadingBand::of(r.glucose_value) == band)
        })
        .collect();
    history.sort_by(|a, b| chronological(b, a));
    history
}

impl Database {
    /// Validates and appends a reading.
    pub async fn insert_reading(&self, input: ReadingInput) -> Result<Reading> {
        validate_reading(&input)?;
        let reading = Reading::from(input);
        let record = reading.clone();

        if let Err(err) = self
            .execute(move |conn| {
                update_collection::<Reading, _, _>(conn, READINGS_KEY, |readings| {
                    readings.push(record)
                })
            })
            .await
        {
            log_error!("Failed to store reading {}: {err:#}", reading.id);
            return Err(err);
        }

        log_info!(
            "Recorded reading {} ({})",
            reading.id,
            ReadingBand::of(reading.glucose_value).label()
        );
        Ok(reading)
    }

    /// Returns `false` when no reading has `reading_id`.
    pub async fn delete_reading(&self, reading_id: &str) -> Result<bool> {
        let reading_id = reading_id.to_string();
        let id_for_log = reading_id.clone();
        let removed = self
            .execute(move |conn| {
                update_collection::<Reading, _, _>(conn, READINGS_KEY, |readings| {
                    let before = readings.len();
                    readings.retain(|r| r.id != reading_id);
                    readings.len() != before
                })
            })
            .await?;

        if !removed {
            log_warn!("Reading {id_for_log} not found for deletion");
        }
        Ok(removed)
    }

    /// All readings in insertion order.
    pub async fn get_readings(&self) -> Result<Vec<Reading>> {
        self.execute(|conn| read_collection(conn, READINGS_KEY))
            .await
    }

    pub async fn reading_history(&self, filter: HistoryFilter) -> Result<Vec<Reading>> {
        let readings = self.get_readings().await?;
        Ok(filter_history(readings, &filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: i32, date: &str, time: &str) -> ReadingInput {
        ReadingInput {
            glucose_value: value,
            date: date.into(),
            time: time.into(),
            note: None,
        }
    }

    async fn open() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("glucolog.sqlite3")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn insert_list_and_delete() {
        let (_dir, db) = open().await;

        let first = db.insert_reading(input(95, "2024-05-01", "08:00")).await.unwrap();
        db.insert_reading(input(210, "2024-05-01", "13:00")).await.unwrap();
        assert_eq!(db.get_readings().await.unwrap().len(), 2);

        assert!(db.delete_reading(&first.id).await.unwrap());
        assert!(!db.delete_reading(&first.id).await.unwrap());

        let remaining = db.get_readings().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].glucose_value, 210);
    }

    #[tokio::test]
    async fn invalid_reading_is_not_stored() {
        let (_dir, db) = open().await;
        assert!(db.insert_reading(input(700, "2024-05-01", "08:00")).await.is_err());
        assert!(db.get_readings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_collection_fails_insert() {
        let (_dir, db) = open().await;
        db.save_blob(READINGS_KEY, "not json".into()).await.unwrap();

        let err = db
            .insert_reading(input(95, "2024-05-01", "08:00"))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("not valid JSON"));
        assert_eq!(
            db.load_blob(READINGS_KEY).await.unwrap().as_deref(),
            Some("not json")
        );
    }

    #[tokio::test]
    async fn history_filters_and_orders_newest_first() {
        let (_dir, db) = open().await;
        db.insert_reading(input(60, "2024-05-01", "07:00")).await.unwrap();
        db.insert_reading(input(120, "2024-05-01", "12:00")).await.unwrap();
        db.insert_reading(input(130, "2024-05-02", "08:00")).await.unwrap();

        let all = db.reading_history(HistoryFilter::default()).await.unwrap();
        let values: Vec<i32> = all.iter().map(|r| r.glucose_value).collect();
        assert_eq!(values, vec![130, 120, 60]);

        let day = db
            .reading_history(HistoryFilter {
                date: Some("2024-05-01".into()),
                band: None,
            })
            .await
            .unwrap();
        assert_eq!(day.len(), 2);

        let low = db
            .reading_history(HistoryFilter {
                date: None,
                band: Some(ReadingBand::Low),
            })
            .await
            .unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].glucose_value, 60);
    }
}
