//! Campaign lifecycle status and derived values shown on campaign pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Image shown for campaigns without an uploaded picture.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+Image";

/// Maximum progress reported for a campaign, regardless of overfunding.
pub const MAX_PROGRESS_PCT: f64 = 100.0;

/// Moderation status of a campaign.
///
/// Deleting a campaign from the admin dashboard only moves it to
/// `Deleted`; rows are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Deleted,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Deleted,
    ];

    /// String stored in the `campaigns.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown campaign status '{s}'. Valid values: pending, approved, rejected, deleted"
                ))
            })
    }
}

/// Funding progress as a percentage of `goal`, rounded to one decimal and
/// capped at [`MAX_PROGRESS_PCT`]. Non-positive goals report 0.
pub fn progress_percentage(raised: i64, goal: i32) -> f64 {
    if goal <= 0 {
        return 0.0;
    }
    let pct = raised as f64 / goal as f64 * 100.0;
    let rounded = (pct * 10.0).round() / 10.0;
    rounded.min(MAX_PROGRESS_PCT)
}

/// Days left until `deadline`. Negative once the deadline has passed.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

pub fn image_url_or_placeholder(image_url: Option<&str>) -> &str {
    match image_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => PLACEHOLDER_IMAGE_URL,
    }
}
