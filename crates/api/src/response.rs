//! Shared response envelope and presentation types for API handlers.
//!
//! List endpoints use a `{ "data": ... }` envelope. Campaign and donation
//! rows are decorated with derived display fields (progress, fees, avatars)
//! here so every page renders them the same way.

use chrono::{NaiveDate, Utc};
use qonty_core::campaign::{days_remaining, image_url_or_placeholder, progress_percentage};
use qonty_core::donation::{avatar_url, display_name, format_fee, platform_fee};
use qonty_core::types::EntityUuid;
use qonty_db::models::campaign::CampaignListing;
use qonty_db::models::donation::{Donation, DonationWithCampaign};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Plain `{ "message": ... }` body for actions with nothing else to report.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Campaign cards
// ---------------------------------------------------------------------------

/// A campaign listing with its progress bar and countdown.
#[derive(Debug, Serialize)]
pub struct CampaignCard {
    #[serde(flatten)]
    pub campaign: CampaignListing,
    pub progress_percentage: f64,
    pub days_remaining: i64,
    /// Image URL, or the placeholder when the campaign has none.
    pub display_image_url: String,
}

impl CampaignCard {
    pub fn new(campaign: CampaignListing, today: NaiveDate) -> Self {
        Self {
            progress_percentage: progress_percentage(campaign.total_raised, campaign.goal),
            days_remaining: days_remaining(campaign.deadline, today),
            display_image_url: image_url_or_placeholder(campaign.image_url.as_deref())
                .to_string(),
            campaign,
        }
    }

    /// Decorate a batch of listings against today's date.
    pub fn from_listings(listings: Vec<CampaignListing>) -> Vec<Self> {
        let today = Utc::now().date_naive();
        listings
            .into_iter()
            .map(|listing| Self::new(listing, today))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Donation rows
// ---------------------------------------------------------------------------

/// A donation as shown to the public: no e-mail, name hidden when anonymous.
#[derive(Debug, Serialize)]
pub struct PublicDonation {
    pub id: EntityUuid,
    pub name: String,
    pub avatar_url: String,
    pub amount: i32,
    pub comment: Option<String>,
    pub donated_on: NaiveDate,
}

impl From<Donation> for PublicDonation {
    fn from(donation: Donation) -> Self {
        Self {
            id: donation.id,
            name: display_name(&donation.fullname, donation.anonymous).to_string(),
            avatar_url: avatar_url(&donation.email, donation.anonymous),
            amount: donation.amount,
            comment: donation.comment,
            donated_on: donation.donated_on,
        }
    }
}

/// A donation with its campaign title and the platform's cut, for the
/// owner and admin tables.
#[derive(Debug, Serialize)]
pub struct DonationRow {
    #[serde(flatten)]
    pub donation: DonationWithCampaign,
    pub display_name: String,
    pub platform_fee: f64,
    /// Fee formatted as `$x.yy`.
    pub platform_fee_display: String,
}

impl From<DonationWithCampaign> for DonationRow {
    fn from(donation: DonationWithCampaign) -> Self {
        let amount = i64::from(donation.amount);
        Self {
            display_name: display_name(&donation.fullname, donation.anonymous).to_string(),
            platform_fee: platform_fee(amount),
            platform_fee_display: format_fee(amount),
            donation,
        }
    }
}
