//! Period selection: date-range filtering and chronological ordering.

use std::borrow::Borrow;
use std::cmp::Ordering;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::Reading;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a period from two ISO `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_date(start).with_context(|| format!("invalid start date '{start}'"))?;
        let end = parse_date(end).with_context(|| format!("invalid end date '{end}'"))?;
        Ok(Self { start, end })
    }

    /// `[today - days, today]`
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Explicit bounds when both are given, otherwise the last `default_days`.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        default_days: u32,
        today: NaiveDate,
    ) -> Result<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Self::parse(start, end),
            _ => Ok(Self::last_days(default_days, today)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Last instant covered by the period (end date at 23:59:59).
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end.and_hms_opt(23, 59, 59).unwrap_or_else(|| self.end.and_time(NaiveTime::MIN))
    }

    /// Number of days between the bounds, as shown next to the index.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .with_context(|| format!("expected YYYY-MM-DD, got '{value}'"))
}

/// Combines an ISO date and a local `HH:MM[:SS]` time into one instant.
///
/// An unreadable time falls back to midnight of the date so ordering degrades
/// to date-only; an unreadable date yields `None`.
pub fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date).ok()?;
    let time = time.trim();
    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .unwrap_or(NaiveTime::MIN);
    Some(date.and_time(parsed))
}

/// Chronological order by derived timestamp, date string as tie-breaker.
pub fn chronological(a: &Reading, b: &Reading) -> Ordering {
    a.timestamp()
        .cmp(&b.timestamp())
        .then_with(|| a.date.cmp(&b.date))
}

/// Sorts borrowed readings in place; stable, so equal instants keep input order.
pub fn sort_chronologically<R: Borrow<Reading>>(readings: &mut [R]) {
    readings.sort_by(|a, b| chronological(a.borrow(), b.borrow()));
}

/// Readings whose date lies in `period`, ascending by timestamp.
///
/// Readings with an unparsable date are excluded rather than failing the
/// whole selection.
pub fn select<'a, R: Borrow<Reading>>(readings: &'a [R], period: &Period) -> Vec<&'a Reading> {
    let mut selected: Vec<&Reading> = readings
        .iter()
        .map(|r| r.borrow())
        .filter(|r| match parse_date(&r.date) {
            Ok(date) => period.contains(date),
            Err(_) => false,
        })
        .collect();

    sort_chronologically(&mut selected);

    debug!(
        "selected {} of {} readings for {}..={}",
        selected.len(),
        readings.len(),
        period.start,
        period.end
    );

    selected
}

/// Shorthand for `select` over the last `days` days ending `today`.
pub fn select_last_days<'a, R: Borrow<Reading>>(
    readings: &'a [R],
    days: u32,
    today: NaiveDate,
) -> Vec<&'a Reading> {
    select(readings, &Period::last_days(days, today))
}
