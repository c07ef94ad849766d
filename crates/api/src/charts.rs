//! Glue between the daily aggregate queries and the zero-fill builder.

use chrono::{NaiveDate, Utc};
use qonty_core::timeseries::{build_daily_series, trailing_window, validate_range, DailySeries};
use qonty_db::models::donation::DonationFilter;
use qonty_db::repositories::DonationRepo;
use qonty_db::DbPool;

use crate::config::ServerConfig;
use crate::error::AppResult;

/// The configured rolling window ending today, as `(start, end)`.
pub fn current_window(config: &ServerConfig) -> (NaiveDate, NaiveDate) {
    trailing_window(Utc::now().date_naive(), config.chart_window_days)
}

/// Load the per-day totals matching `filter` and zero-fill `[start, end]`.
///
/// Reversed ranges and ranges longer than `MAX_RANGE_DAYS` are rejected
/// before touching the database.
pub async fn daily_series(
    pool: &DbPool,
    filter: &DonationFilter,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<DailySeries> {
    validate_range(start, end)?;
    let aggregates = DonationRepo::daily_aggregates(pool, filter, start, end).await?;
    let series = build_daily_series(start, end, &aggregates)?;
    tracing::debug!(
        points = series.len(),
        days_with_data = aggregates.len(),
        "Built daily donation series"
    );
    Ok(series)
}
