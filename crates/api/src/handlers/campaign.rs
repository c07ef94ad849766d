//! Handlers for the public `/campaigns` resource and the donation form.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use qonty_core::campaign::{CampaignStatus, MAX_PROGRESS_PCT};
use qonty_core::donation::{validate_minimum, MIN_DONATION};
use qonty_core::error::CoreError;
use qonty_core::numeric::safe_div;
use qonty_core::search::{like_pattern, normalize_term};
use qonty_core::types::EntityUuid;
use qonty_db::models::campaign::{Campaign, CampaignListing, CreateCampaign};
use qonty_db::models::country::Country;
use qonty_db::models::donation::{CreateDonation, Donation, DonationFilter};
use qonty_db::repositories::{CampaignRepo, CategoryRepo, CountryRepo, DonationRepo, MemberRepo};
use qonty_db::DbPool;
use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::{CampaignCard, DataResponse, PublicDonation};
use crate::state::AppState;

/// Approved donations shown on the campaign page.
const DETAIL_DONATION_LIMIT: i64 = 10;

/// Approved donations shown next to the donation form.
const FORM_DONATION_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Campaign page payload.
#[derive(Debug, Serialize)]
pub struct CampaignDetail {
    pub campaign: CampaignCard,
    pub total_raised: i64,
    pub total_donors: i64,
    pub progress_percentage: f64,
    pub days_remaining: i64,
    pub donations: Vec<PublicDonation>,
}

/// Everything the donation form needs to render.
#[derive(Debug, Serialize)]
pub struct DonationFormContext {
    pub campaign: CampaignCard,
    pub countries: Vec<Country>,
    pub min_donation: i32,
    pub total_raised: i64,
    pub total_donors: i64,
    pub progress_percentage: f64,
    /// Whole-number progress for the form's progress bar.
    pub percentage: i64,
    pub recent_donations: Vec<PublicDonation>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/campaigns?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<CampaignCard>>>> {
    let pattern = normalize_term(params.q.as_deref()).map(|term| like_pattern(&term));
    let campaigns = CampaignRepo::list_public(&state.pool, pattern.as_deref()).await?;
    Ok(Json(DataResponse {
        data: CampaignCard::from_listings(campaigns),
    }))
}

/// POST /api/v1/campaigns
///
/// New campaigns are published straight away.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCampaign>,
) -> AppResult<(StatusCode, Json<Campaign>)> {
    input.validate()?;

    MemberRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Member", input.user_id))?;
    CategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", input.category_id))?;

    let campaign = CampaignRepo::create(&state.pool, &input, CampaignStatus::Approved, true).await?;
    tracing::info!(
        campaign_id = %campaign.id,
        user_id = campaign.user_id,
        "Campaign created"
    );
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityUuid>,
) -> AppResult<Json<CampaignDetail>> {
    let listing = find_visible(&state.pool, id).await?;
    let totals = DonationRepo::totals(
        &state.pool,
        &DonationFilter::for_campaign(id).with_approved(true),
    )
    .await?;
    let donations =
        DonationRepo::list_for_campaign(&state.pool, id, true, DETAIL_DONATION_LIMIT).await?;

    let campaign = CampaignCard::new(listing, Utc::now().date_naive());
    Ok(Json(CampaignDetail {
        total_raised: totals.total_amount,
        total_donors: totals.donation_count,
        progress_percentage: campaign.progress_percentage,
        days_remaining: campaign.days_remaining,
        donations: donations.into_iter().map(PublicDonation::from).collect(),
        campaign,
    }))
}

/// GET /api/v1/campaigns/{id}/donate
pub async fn donation_form(
    State(state): State<AppState>,
    Path(id): Path<EntityUuid>,
) -> AppResult<Json<DonationFormContext>> {
    let listing = find_visible(&state.pool, id).await?;
    let countries = CountryRepo::list(&state.pool).await?;
    let totals = DonationRepo::totals(
        &state.pool,
        &DonationFilter::for_campaign(id).with_approved(true),
    )
    .await?;
    let recent =
        DonationRepo::list_for_campaign(&state.pool, id, true, FORM_DONATION_LIMIT).await?;

    let percentage = (safe_div(totals.total_amount as f64, f64::from(listing.goal)) * 100.0)
        .min(MAX_PROGRESS_PCT) as i64;
    let campaign = CampaignCard::new(listing, Utc::now().date_naive());

    Ok(Json(DonationFormContext {
        countries,
        min_donation: MIN_DONATION,
        total_raised: totals.total_amount,
        total_donors: totals.donation_count,
        progress_percentage: campaign.progress_percentage,
        percentage,
        recent_donations: recent.into_iter().map(PublicDonation::from).collect(),
        campaign,
    }))
}

/// POST /api/v1/campaigns/{id}/donate
///
/// Records an approved donation dated today.
pub async fn donate(
    State(state): State<AppState>,
    Path(id): Path<EntityUuid>,
    Json(input): Json<CreateDonation>,
) -> AppResult<(StatusCode, Json<Donation>)> {
    input.validate()?;
    validate_minimum(input.amount)?;
    find_visible(&state.pool, id).await?;

    let today = Utc::now().date_naive();
    let donation = DonationRepo::create(&state.pool, id, &input, today, true).await?;
    tracing::info!(
        donation_id = %donation.id,
        campaign_id = %id,
        amount = donation.amount,
        "Donation recorded"
    );
    Ok((StatusCode::CREATED, Json(donation)))
}

/// Load a campaign listing, treating deleted campaigns as missing.
async fn find_visible(pool: &DbPool, id: EntityUuid) -> AppResult<CampaignListing> {
    let listing = CampaignRepo::find_listing(pool, id)
        .await?
        .filter(|c| c.status != CampaignStatus::Deleted.as_str())
        .ok_or_else(|| CoreError::not_found("Campaign", id))?;
    Ok(listing)
}
