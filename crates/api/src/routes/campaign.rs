//! Route definitions for the public `/campaigns` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// GET    /                -> list (?q=)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// GET    /{id}/donate     -> donation_form
/// POST   /{id}/donate     -> donate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaign::list).post(campaign::create))
        .route("/{id}", get(campaign::get_by_id))
        .route(
            "/{id}/donate",
            get(campaign::donation_form).post(campaign::donate),
        )
}
