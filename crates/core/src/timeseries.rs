//! Zero-filled daily time series for the donation activity charts.
//!
//! Aggregate queries only return rows for days that had at least one
//! qualifying donation. Charts need one point per calendar day, so
//! [`build_daily_series`] walks the closed range `[start, end]` and fills
//! every missing day with zeros.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;

/// Label format used for chart dates.
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Default length of the rolling chart window, in days before today.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Upper bound on an explicitly requested range, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Longest rolling window: the window also includes today, so it spans
/// `days + 1` points and must stay within [`MAX_RANGE_DAYS`].
pub const MAX_WINDOW_DAYS: u64 = (MAX_RANGE_DAYS - 1) as u64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl From<SeriesError> for CoreError {
    fn from(err: SeriesError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Sum and count of donations for a single day, as returned by the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyAggregate {
    pub total: i64,
    pub count: i64,
}

/// Dense per-day series, stored as the three parallel arrays the chart
/// front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    pub dates: Vec<String>,
    pub amounts: Vec<f64>,
    pub counts: Vec<i64>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Sum of all amounts in the series.
    pub fn total_amount(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

/// Build a gap-free series covering every day in `[start, end]`.
///
/// Days present in `aggregates` take their total (as `f64`) and count; all
/// other days are `0.0` / `0`. Keys outside the range are ignored.
pub fn build_daily_series(
    start: NaiveDate,
    end: NaiveDate,
    aggregates: &HashMap<NaiveDate, DailyAggregate>,
) -> Result<DailySeries, SeriesError> {
    if start > end {
        return Err(SeriesError::InvalidRange { start, end });
    }

    let len = (end - start).num_days() as usize + 1;
    let mut series = DailySeries {
        dates: Vec::with_capacity(len),
        amounts: Vec::with_capacity(len),
        counts: Vec::with_capacity(len),
    };

    for day in start.iter_days().take(len) {
        let agg = aggregates.get(&day).copied().unwrap_or_default();
        series
            .dates
            .push(day.format(DATE_LABEL_FORMAT).to_string());
        series.amounts.push(agg.total as f64);
        series.counts.push(agg.count);
    }

    Ok(series)
}

/// The rolling window ending on `today`: `[today - days, today]`.
///
/// `days` is capped at [`MAX_WINDOW_DAYS`]; the start saturates at the
/// earliest representable date.
pub fn trailing_window(today: NaiveDate, days: u64) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_days(Days::new(days.min(MAX_WINDOW_DAYS)))
        .unwrap_or(NaiveDate::MIN);
    (start, today)
}

/// Validate an explicitly requested range and reject ones longer than
/// [`MAX_RANGE_DAYS`].
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if start > end {
        return Err(SeriesError::InvalidRange { start, end }.into());
    }
    let span = (end - start).num_days() + 1;
    if span > MAX_RANGE_DAYS {
        return Err(CoreError::Validation(format!(
            "Date range spans {span} days, maximum is {MAX_RANGE_DAYS}"
        )));
    }
    Ok(())
}
