//! Route definitions for a member's personal dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/users/{user_id}`.
///
/// ```text
/// GET    /dashboard    -> overview
/// GET    /campaigns    -> campaigns
/// GET    /donations    -> donations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::overview))
        .route("/campaigns", get(dashboard::campaigns))
        .route("/donations", get(dashboard::donations))
}
