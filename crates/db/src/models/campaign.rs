//! Campaign entity model and DTOs.

use chrono::NaiveDate;
use qonty_core::types::{DbId, EntityUuid, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: EntityUuid,
    pub title: String,
    pub description: String,
    pub user_id: DbId,
    pub category_id: DbId,
    pub created_at: Timestamp,
    /// One of `pending`, `approved`, `rejected`, `deleted`.
    pub status: String,
    pub image_url: Option<String>,
    pub goal: i32,
    pub location: String,
    pub deadline: NaiveDate,
    pub is_active: bool,
}

/// A campaign joined with its owner and category names and the sum of its
/// approved donations. Used by every listing page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignListing {
    pub id: EntityUuid,
    pub title: String,
    pub description: String,
    pub user_id: DbId,
    pub owner_username: String,
    pub category_id: DbId,
    pub category_name: String,
    pub created_at: Timestamp,
    pub status: String,
    pub image_url: Option<String>,
    pub goal: i32,
    pub location: String,
    pub deadline: NaiveDate,
    pub is_active: bool,
    pub total_raised: i64,
}

/// DTO for creating a campaign (the public "start a campaign" form).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaign {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub user_id: DbId,
    pub category_id: DbId,
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    pub goal: i32,
    #[validate(length(min = 1, max = 150))]
    pub location: String,
    pub deadline: NaiveDate,
}

/// DTO for the admin campaign edit form. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCampaign {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    pub goal: Option<i32>,
    #[validate(length(min = 1, max = 150))]
    pub location: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub is_active: Option<bool>,
}
