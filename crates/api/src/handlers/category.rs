//! Handlers for the public `/categories` and `/countries` resources.

use axum::extract::{Path, State};
use axum::Json;
use qonty_core::error::CoreError;
use qonty_core::types::DbId;
use qonty_db::models::category::Category;
use qonty_db::models::country::Country;
use qonty_db::repositories::{CampaignRepo, CategoryRepo, CountryRepo};

use crate::error::AppResult;
use crate::response::{CampaignCard, DataResponse};
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}/campaigns
pub async fn campaigns(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CampaignCard>>>> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", id))?;
    let campaigns = CampaignRepo::list_by_category(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: CampaignCard::from_listings(campaigns),
    }))
}

/// GET /api/v1/countries
pub async fn countries(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Country>>>> {
    let countries = CountryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: countries }))
}
