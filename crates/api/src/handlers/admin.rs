//! Handlers for the admin back office (`/admin`).
//!
//! Site-wide statistics plus moderation of campaigns, categories and
//! members. Access control is handled outside this service.

use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use qonty_core::campaign::CampaignStatus;
use qonty_core::donation::PLATFORM_FEE_RATE;
use qonty_core::error::CoreError;
use qonty_core::numeric::mul;
use qonty_core::timeseries::DailySeries;
use qonty_core::types::{DbId, EntityUuid};
use qonty_db::models::campaign::{Campaign, UpdateCampaign};
use qonty_db::models::category::{Category, CategoryWithCount, CreateCategory, UpdateCategory};
use qonty_db::models::donation::DonationFilter;
use qonty_db::models::member::Member;
use qonty_db::repositories::{CampaignRepo, CategoryRepo, DonationRepo, MemberRepo};
use serde::Serialize;
use validator::Validate;

use crate::charts::{current_window, daily_series};
use crate::error::AppResult;
use crate::query::DateRangeParams;
use crate::response::{CampaignCard, DataResponse, DonationRow, MessageResponse};
use crate::state::AppState;

/// Members and campaigns listed on the dashboard.
const DASHBOARD_RECENT_LIMIT: i64 = 4;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    /// Count of approved donations.
    pub total_donations: i64,
    /// Sum of approved donations.
    pub total_earnings: i64,
    pub total_members: i64,
    pub total_campaigns: i64,
    pub latest_members: Vec<Member>,
    pub recent_campaigns: Vec<CampaignCard>,
    pub chart: DailySeries,
}

#[derive(Debug, Serialize)]
pub struct AdminCampaigns {
    pub campaigns: Vec<CampaignCard>,
    pub total_campaigns: i64,
    pub active_campaigns: i64,
    /// Sum of approved donations across all campaigns.
    pub total_raised: i64,
}

#[derive(Debug, Serialize)]
pub struct AdminDonations {
    pub donations: Vec<DonationRow>,
    /// Count of approved donations.
    pub total_donations: i64,
    /// Sum of approved donations.
    pub total_amount: i64,
    pub pending_amount: i64,
    /// Platform fee on the approved sum.
    pub admin_earnings: f64,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<AdminDashboard>> {
    let approved = DonationRepo::totals(&state.pool, &DonationFilter::approved()).await?;
    let total_members = MemberRepo::count(&state.pool).await?;
    let total_campaigns = CampaignRepo::count(&state.pool).await?;
    let latest_members = MemberRepo::latest(&state.pool, DASHBOARD_RECENT_LIMIT).await?;
    let recent_campaigns = CampaignRepo::recent(&state.pool, DASHBOARD_RECENT_LIMIT).await?;

    let (start, end) = current_window(&state.config);
    let chart = daily_series(&state.pool, &DonationFilter::approved(), start, end).await?;

    Ok(Json(AdminDashboard {
        total_donations: approved.donation_count,
        total_earnings: approved.total_amount,
        total_members,
        total_campaigns,
        latest_members,
        recent_campaigns: CampaignCard::from_listings(recent_campaigns),
        chart,
    }))
}

/// GET /api/v1/admin/donations/daily?from=&to=
pub async fn daily_donations(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<Json<DailySeries>> {
    let (default_start, default_end) = current_window(&state.config);
    let start = params.from.unwrap_or(default_start);
    let end = params.to.unwrap_or(default_end);

    let series = daily_series(&state.pool, &DonationFilter::approved(), start, end).await?;
    Ok(Json(series))
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/campaigns
pub async fn list_campaigns(State(state): State<AppState>) -> AppResult<Json<AdminCampaigns>> {
    let campaigns = CampaignRepo::list_all(&state.pool).await?;
    let active_campaigns = CampaignRepo::count_active(&state.pool, None).await?;
    let approved = DonationRepo::totals(&state.pool, &DonationFilter::approved()).await?;

    Ok(Json(AdminCampaigns {
        total_campaigns: campaigns.len() as i64,
        active_campaigns,
        total_raised: approved.total_amount,
        campaigns: CampaignCard::from_listings(campaigns),
    }))
}

/// PUT /api/v1/admin/campaigns/{id}
pub async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<EntityUuid>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<Json<Campaign>> {
    input.validate()?;
    if let Some(status) = &input.status {
        CampaignStatus::from_str(status)?;
    }
    if let Some(category_id) = input.category_id {
        CategoryRepo::find_by_id(&state.pool, category_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Category", category_id))?;
    }

    let campaign = CampaignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Campaign", id))?;
    tracing::info!(campaign_id = %id, status = %campaign.status, "Campaign updated");
    Ok(Json(campaign))
}

/// DELETE /api/v1/admin/campaigns/{id}
///
/// Soft delete: the campaign is marked `deleted` and hidden from the public
/// site, but its donations are kept.
pub async fn delete_campaign(
    State(state): State<AppState>,
    Path(id): Path<EntityUuid>,
) -> AppResult<StatusCode> {
    let updated = CampaignRepo::set_status(&state.pool, id, CampaignStatus::Deleted).await?;
    if !updated {
        return Err(CoreError::not_found("Campaign", id).into());
    }
    tracing::info!(campaign_id = %id, "Campaign deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/donations
pub async fn list_donations(State(state): State<AppState>) -> AppResult<Json<AdminDonations>> {
    let donations = DonationRepo::list_all(&state.pool).await?;
    let approved = DonationRepo::totals(&state.pool, &DonationFilter::approved()).await?;
    let pending = DonationRepo::totals(&state.pool, &DonationFilter::pending()).await?;

    Ok(Json(AdminDonations {
        donations: donations.into_iter().map(DonationRow::from).collect(),
        total_donations: approved.donation_count,
        total_amount: approved.total_amount,
        pending_amount: pending.total_amount,
        admin_earnings: mul(approved.total_amount as f64, PLATFORM_FEE_RATE),
    }))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategoryWithCount>>>> {
    let categories = CategoryRepo::list_with_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    input.validate()?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", id))?;
    Ok(Json(category))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Campaigns filed under the category are deleted with it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Category", id).into());
    }
    tracing::info!(category_id = id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/members
pub async fn list_members(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Member>>>> {
    let members = MemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/admin/members/{id}/toggle
pub async fn toggle_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let member = MemberRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Member", id))?;

    let action = if member.is_active {
        "activated"
    } else {
        "deactivated"
    };
    tracing::info!(member_id = id, is_active = member.is_active, "Member toggled");
    Ok(Json(MessageResponse {
        message: format!("Member {} {action} successfully!", member.username),
    }))
}

/// DELETE /api/v1/admin/members/{id}
///
/// Fails with 409 while the member still owns campaigns.
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MemberRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::not_found("Member", id).into());
    }
    tracing::info!(member_id = id, "Member deleted");
    Ok(StatusCode::NO_CONTENT)
}
