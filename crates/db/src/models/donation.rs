//! Donation entity model, DTOs and aggregate rows.

use chrono::NaiveDate;
use qonty_core::types::{DbId, EntityUuid};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `donations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Donation {
    pub id: EntityUuid,
    pub campaign_id: EntityUuid,
    pub fullname: String,
    pub email: String,
    pub country: String,
    pub postal_code: String,
    pub amount: i32,
    pub anonymous: bool,
    pub approved: bool,
    pub comment: Option<String>,
    pub donated_on: NaiveDate,
}

/// A donation joined with the title of the campaign it went to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DonationWithCampaign {
    pub id: EntityUuid,
    pub campaign_id: EntityUuid,
    pub campaign_title: String,
    pub fullname: String,
    pub email: String,
    pub country: String,
    pub postal_code: String,
    pub amount: i32,
    pub anonymous: bool,
    pub approved: bool,
    pub comment: Option<String>,
    pub donated_on: NaiveDate,
}

/// DTO for the public donation form.
///
/// The campaign, date and approval flag are set by the server.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDonation {
    #[validate(length(min = 1, max = 100))]
    pub fullname: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub country: String,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    #[validate(range(min = 0))]
    pub amount: i32,
    #[serde(default)]
    pub anonymous: bool,
    pub comment: Option<String>,
}

/// Sum and count of the donations matching a [`DonationFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct DonationTotals {
    pub total_amount: i64,
    pub donation_count: i64,
}

/// One row of a per-day aggregate query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct DailyTotalRow {
    pub day: NaiveDate,
    pub total: i64,
    pub count: i64,
}

/// Predicate applied to donation aggregate queries. Set fields are ANDed.
#[derive(Debug, Clone, Default)]
pub struct DonationFilter {
    pub approved: Option<bool>,
    pub campaign_id: Option<EntityUuid>,
    /// Donations received on campaigns owned by this member.
    pub campaign_owner_id: Option<DbId>,
    /// Donations given from this e-mail address.
    pub donor_email: Option<String>,
}

impl DonationFilter {
    /// Every donation.
    pub fn all() -> Self {
        Self::default()
    }

    /// Approved donations only.
    pub fn approved() -> Self {
        Self::default().with_approved(true)
    }

    /// Donations not yet approved.
    pub fn pending() -> Self {
        Self::default().with_approved(false)
    }

    pub fn for_campaign(campaign_id: EntityUuid) -> Self {
        Self {
            campaign_id: Some(campaign_id),
            ..Self::default()
        }
    }

    pub fn received_by(owner_id: DbId) -> Self {
        Self {
            campaign_owner_id: Some(owner_id),
            ..Self::default()
        }
    }

    pub fn given_by(email: impl Into<String>) -> Self {
        Self {
            donor_email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn with_approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }
}
