//! Chart series for the trend view.

use std::borrow::Borrow;
use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::engine::bands::ReadingBand;
use crate::engine::period::{parse_date, select, Period};
use crate::models::Reading;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: i32,
    pub band: ReadingBand,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Points for every reading in `period`, oldest first. Labels are `d/m`, with
/// the time appended when the day has more than one reading.
pub fn chart_series<R: Borrow<Reading>>(readings: &[R], period: &Period) -> ChartSeries {
    let selected = select(readings, period);

    let mut per_day: HashMap<&str, usize> = HashMap::new();
    for reading in &selected {
        *per_day.entry(reading.date.as_str()).or_insert(0) += 1;
    }

    let points = selected
        .iter()
        .map(|reading| {
            let mut label = match parse_date(&reading.date) {
                Ok(date) => format!("{}/{}", date.day(), date.month()),
                Err(_) => reading.date.clone(),
            };
            if per_day.get(reading.date.as_str()).copied().unwrap_or(0) > 1 {
                label.push(' ');
                label.push_str(reading.time.get(..5).unwrap_or(&reading.time));
            }

            let band = ReadingBand::of(reading.glucose_value);
            ChartPoint {
                label,
                value: reading.glucose_value,
                band,
                color: band.color().to_string(),
            }
        })
        .collect();

    ChartSeries {
        title: format!("Glicemia ({} registros)", selected.len()),
        points,
    }
}
