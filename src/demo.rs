//! Demonstration dataset: one week of readings and three sample goals.

use chrono::{Days, NaiveDate};

use crate::models::{Goal, GoalCategory, Reading};

/// Readings per day as (value, time, note), oldest day first.
const DEMO_WEEK: [[(i32, &str, &str); 3]; 7] = [
    [(95, "08:00", "Em jejum"), (120, "12:30", "Após almoço"), (110, "18:00", "Antes do jantar")],
    [(98, "08:15", "Em jejum"), (135, "13:00", "Após almoço"), (115, "19:30", "Antes do jantar")],
    [(105, "07:45", "Em jejum"), (128, "12:45", "Após almoço"), (105, "18:30", "Antes do jantar")],
    [(92, "08:30", "Em jejum"), (142, "13:15", "Após almoço"), (118, "19:00", "Antes do jantar")],
    [(102, "07:30", "Em jejum"), (125, "12:15", "Após almoço"), (112, "18:45", "Antes do jantar")],
    [(88, "08:45", "Em jejum"), (138, "13:30", "Após almoço"), (122, "19:15", "Antes do jantar")],
    [(96, "07:15", "Em jejum"), (132, "12:00", "Após almoço"), (108, "18:15", "Antes do jantar")],
];

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

/// 21 readings over the seven days ending `today`.
pub fn demo_readings(today: NaiveDate) -> Vec<Reading> {
    DEMO_WEEK
        .iter()
        .enumerate()
        .flat_map(|(i, day)| {
            let date = days_before(today, (DEMO_WEEK.len() - 1 - i) as u64)
                .format("%Y-%m-%d")
                .to_string();
            day.iter().map(move |(value, time, note)| {
                Reading::new(*value, date.clone(), *time, Some(note.to_string()))
            })
        })
        .collect()
}

pub fn demo_goals(today: NaiveDate) -> Vec<Goal> {
    let walk = Goal::new(
        "Caminhar 30 minutos por dia",
        GoalCategory::Exercise,
        Some(days_after(today, 7)),
        days_before(today, 2),
    );
    let mut sugar = Goal::new(
        "Reduzir consumo de açúcar",
        GoalCategory::Diet,
        Some(days_after(today, 14)),
        days_before(today, 4),
    );
    let medication = Goal::new(
        "Tomar medicação corretamente",
        GoalCategory::Medication,
        Some(days_after(today, 30)),
        days_before(today, 6),
    );

    sugar.complete(today);

    vec![walk, sugar, medication]
}
