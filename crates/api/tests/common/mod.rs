#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use qonty_api::config::ServerConfig;
use qonty_api::router::build_app_router;
use qonty_api::state::AppState;
use qonty_core::campaign::CampaignStatus;
use qonty_core::types::{DbId, EntityUuid};
use qonty_db::models::campaign::{Campaign, CreateCampaign};
use qonty_db::models::category::{Category, CreateCategory};
use qonty_db::models::donation::{CreateDonation, Donation};
use qonty_db::models::member::{CreateMember, Member};
use qonty_db::repositories::{CampaignRepo, CategoryRepo, DonationRepo, MemberRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the default 30-day chart window.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        chart_window_days: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, Body::empty(), false).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Read the whole response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub async fn seed_member(pool: &PgPool, username: &str) -> Member {
    MemberRepo::create(
        pool,
        &CreateMember {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: String::new(),
            last_name: String::new(),
            country_id: None,
            is_superuser: false,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_category(pool: &PgPool, name: &str) -> Category {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            name: name.to_string(),
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_campaign(
    pool: &PgPool,
    user_id: DbId,
    category_id: DbId,
    title: &str,
    goal: i32,
) -> Campaign {
    CampaignRepo::create(
        pool,
        &CreateCampaign {
            title: title.to_string(),
            description: format!("{title} description"),
            user_id,
            category_id,
            image_url: None,
            goal,
            location: "Lisbon".to_string(),
            deadline: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap(),
        },
        CampaignStatus::Approved,
        true,
    )
    .await
    .unwrap()
}

pub async fn seed_donation(
    pool: &PgPool,
    campaign_id: EntityUuid,
    email: &str,
    amount: i32,
    donated_on: NaiveDate,
    approved: bool,
) -> Donation {
    DonationRepo::create(
        pool,
        campaign_id,
        &CreateDonation {
            fullname: "Test Donor".to_string(),
            email: email.to_string(),
            country: "Portugal".to_string(),
            postal_code: "1000-001".to_string(),
            amount,
            anonymous: false,
            comment: None,
        },
        donated_on,
        approved,
    )
    .await
    .unwrap()
}
