//! Route definitions for the `/admin` back office.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /dashboard              -> dashboard
/// GET    /donations/daily        -> daily_donations (?from=&to=)
///
/// GET    /campaigns              -> list_campaigns
/// PUT    /campaigns/{id}         -> update_campaign
/// DELETE /campaigns/{id}         -> delete_campaign
///
/// GET    /donations              -> list_donations
///
/// GET    /categories             -> list_categories
/// POST   /categories             -> create_category
/// PUT    /categories/{id}        -> update_category
/// DELETE /categories/{id}        -> delete_category
///
/// GET    /members                -> list_members
/// DELETE /members/{id}           -> delete_member
/// POST   /members/{id}/toggle    -> toggle_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/donations/daily", get(admin::daily_donations))
        .route("/campaigns", get(admin::list_campaigns))
        .route(
            "/campaigns/{id}",
            put(admin::update_campaign).delete(admin::delete_campaign),
        )
        .route("/donations", get(admin::list_donations))
        .route(
            "/categories",
            get(admin::list_categories).post(admin::create_category),
        )
        .route(
            "/categories/{id}",
            put(admin::update_category).delete(admin::delete_category),
        )
        .route("/members", get(admin::list_members))
        .route("/members/{id}", axum::routing::delete(admin::delete_member))
        .route("/members/{id}/toggle", post(admin::toggle_member))
}
