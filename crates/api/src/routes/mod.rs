pub mod admin;
pub mod campaign;
pub mod category;
pub mod dashboard;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns                                       list (?q=), create
/// /campaigns/{id}                                  detail with recent donations
/// /campaigns/{id}/donate                           form context (GET), donate (POST)
///
/// /categories                                      list
/// /categories/{id}/campaigns                       campaigns in category
///
/// /countries                                       list
///
/// /users/{user_id}/dashboard                       personal totals and charts
/// /users/{user_id}/campaigns                       own campaigns
/// /users/{user_id}/donations                       donations received
///
/// /admin/dashboard                                 site totals and chart
/// /admin/donations/daily                           approved series (?from=&to=)
/// /admin/campaigns                                 list with totals
/// /admin/campaigns/{id}                            update, soft delete
/// /admin/donations                                 list with fees
/// /admin/categories                                list with counts, create
/// /admin/categories/{id}                           update, delete
/// /admin/members                                   list
/// /admin/members/{id}                              delete
/// /admin/members/{id}/toggle                       activate / deactivate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public campaign pages and the donation form.
        .nest("/campaigns", campaign::router())
        // Category browsing.
        .nest("/categories", category::router())
        // Country lookup for the donation form.
        .route("/countries", get(handlers::category::countries))
        // Personal dashboard.
        .nest("/users/{user_id}", dashboard::router())
        // Back office.
        .nest("/admin", admin::router())
}
