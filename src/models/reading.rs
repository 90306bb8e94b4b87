//! Glucose reading data model.
//!
//! A reading is immutable once recorded; edits are a delete followed by a new
//! insert.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::period::combine;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: String,
    /// mg/dL
    pub glucose_value: i32,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    /// Local `HH:MM`
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Reading {
    pub fn new(
        glucose_value: i32,
        date: impl Into<String>,
        time: impl Into<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            glucose_value,
            date: date.into(),
            time: time.into(),
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }

    /// Instant derived from `date` + `time`. `None` when the date is unparsable.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        combine(&self.date, &self.time)
    }

    /// Hour of day from the leading digits of `time` (`"08:30"`, `"8h"`),
    /// `None` when there are none.
    pub fn hour(&self) -> Option<u32> {
        let time = self.time.trim_start();
        let digits = time
            .find(|c: char| !c.is_ascii_digit())
            .map_or(time, |end| &time[..end]);
        digits.parse::<u32>().ok().filter(|h| *h < 24)
    }
}

/// Input data for recording a new reading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingInput {
    pub glucose_value: i32,
    pub date: String,
    pub time: String,
    pub note: Option<String>,
}

impl From<ReadingInput> for Reading {
    fn from(input: ReadingInput) -> Self {
        Reading::new(input.glucose_value, input.date, input.time, input.note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn timestamp_combines_date_and_time() {
        let reading = Reading::new(110, "2024-03-05", "07:45", None);
        let ts = reading.timestamp().unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(ts.hour(), 7);
        assert_eq!(ts.minute(), 45);
    }

    #[test]
    fn hour_reads_leading_segment() {
        assert_eq!(Reading::new(90, "2024-03-05", "19:30", None).hour(), Some(19));
        assert_eq!(Reading::new(90, "2024-03-05", "6:05", None).hour(), Some(6));
        assert_eq!(Reading::new(90, "2024-03-05", "", None).hour(), None);
        assert_eq!(Reading::new(90, "2024-03-05", "27:00", None).hour(), None);
    }

    #[test]
    fn hour_reads_leading_digits_of_loose_times() {
        assert_eq!(Reading::new(90, "2024-03-05", "8h", None).hour(), Some(8));
        assert_eq!(Reading::new(90, "2024-03-05", " 07h30", None).hour(), Some(7));
        assert_eq!(Reading::new(90, "2024-03-05", "manhã", None).hour(), None);
    }

    #[test]
    fn blank_note_is_dropped() {
        let reading = Reading::new(90, "2024-03-05", "08:00", Some("   ".into()));
        assert!(reading.note.is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let reading = Reading::new(95, "2024-03-05", "08:00", Some("Em jejum".into()));
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["glucoseValue"], 95);
        assert_eq!(json["note"], "Em jejum");
    }
}
