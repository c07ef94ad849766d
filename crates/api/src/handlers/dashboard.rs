//! Handlers for a member's personal dashboard (`/users/{user_id}`).
//!
//! Shows what the member raised on their own campaigns and what they gave
//! to others. Donations given are matched by the member's e-mail address,
//! since donors do not need an account.

use axum::extract::{Path, State};
use axum::Json;
use qonty_core::error::CoreError;
use qonty_core::timeseries::DailySeries;
use qonty_core::types::DbId;
use qonty_db::models::donation::DonationFilter;
use qonty_db::models::member::Member;
use qonty_db::repositories::{CampaignRepo, DonationRepo, MemberRepo};
use qonty_db::DbPool;
use serde::Serialize;

use crate::charts::{current_window, daily_series};
use crate::error::AppResult;
use crate::response::{CampaignCard, DataResponse, DonationRow};
use crate::state::AppState;

/// Campaigns shown in the "recently supported" strip.
const DONATED_CAMPAIGNS_LIMIT: i64 = 6;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct UserDashboard {
    pub member: Member,
    pub active_campaigns: i64,
    /// Sum of every donation received on the member's campaigns.
    pub total_raised: i64,
    pub my_given_total: i64,
    pub my_given_count: i64,
    pub donated_campaigns: Vec<CampaignCard>,
    /// Donations given by the member, per day.
    pub chart: DailySeries,
    /// Donations received on the member's campaigns, per day.
    pub received_chart: DailySeries,
}

#[derive(Debug, Serialize)]
pub struct ReceivedDonations {
    pub donations: Vec<DonationRow>,
    pub total_donations: i64,
    pub total_amount: i64,
    pub approved_donations: i64,
    pub pending_donations: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users/{user_id}/dashboard
pub async fn overview(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserDashboard>> {
    let member = find_member(&state.pool, user_id).await?;

    let active_campaigns = CampaignRepo::count_active(&state.pool, Some(user_id)).await?;
    let received = DonationRepo::totals(&state.pool, &DonationFilter::received_by(user_id)).await?;
    let given_filter = DonationFilter::given_by(member.email.clone());
    let given = DonationRepo::totals(&state.pool, &given_filter).await?;
    let donated_campaigns =
        CampaignRepo::donated_to_by_email(&state.pool, &member.email, DONATED_CAMPAIGNS_LIMIT)
            .await?;

    let (start, end) = current_window(&state.config);
    let chart = daily_series(&state.pool, &given_filter, start, end).await?;
    let received_chart = daily_series(
        &state.pool,
        &DonationFilter::received_by(user_id),
        start,
        end,
    )
    .await?;

    Ok(Json(UserDashboard {
        member,
        active_campaigns,
        total_raised: received.total_amount,
        my_given_total: given.total_amount,
        my_given_count: given.donation_count,
        donated_campaigns: CampaignCard::from_listings(donated_campaigns),
        chart,
        received_chart,
    }))
}

/// GET /api/v1/users/{user_id}/campaigns
pub async fn campaigns(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CampaignCard>>>> {
    find_member(&state.pool, user_id).await?;
    let campaigns = CampaignRepo::list_by_owner(&state.pool, user_id).await?;
    Ok(Json(DataResponse {
        data: CampaignCard::from_listings(campaigns),
    }))
}

/// GET /api/v1/users/{user_id}/donations
pub async fn donations(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ReceivedDonations>> {
    find_member(&state.pool, user_id).await?;

    let received = DonationFilter::received_by(user_id);
    let all = DonationRepo::totals(&state.pool, &received).await?;
    let approved = DonationRepo::totals(&state.pool, &received.clone().with_approved(true)).await?;
    let pending = DonationRepo::totals(&state.pool, &received.with_approved(false)).await?;
    let donations = DonationRepo::list_received(&state.pool, user_id).await?;

    Ok(Json(ReceivedDonations {
        donations: donations.into_iter().map(DonationRow::from).collect(),
        total_donations: all.donation_count,
        total_amount: all.total_amount,
        approved_donations: approved.donation_count,
        pending_donations: pending.donation_count,
    }))
}

async fn find_member(pool: &DbPool, user_id: DbId) -> AppResult<Member> {
    let member = MemberRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Member", user_id))?;
    Ok(member)
}
