//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// Free-text search parameter (`?q=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Inclusive date range (`?from=YYYY-MM-DD&to=YYYY-MM-DD`). Missing bounds
/// fall back to the configured chart window.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
