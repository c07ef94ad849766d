//! HTTP-level integration tests for the admin back office.

mod common;

use axum::http::StatusCode;
use chrono::Days;
use common::{
    body_json, delete, get, post_empty, post_json, put_json, seed_campaign, seed_category,
    seed_donation, seed_member,
};
use qonty_api::config::ServerConfig;
use qonty_core::timeseries::MAX_RANGE_DAYS;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Dashboard and daily series
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_reports_approved_totals(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    for name in ["m1", "m2", "m3", "m4"] {
        seed_member(&pool, name).await;
    }
    let category = seed_category(&pool, "Health").await;
    let campaign = seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;
    let today = common::today();
    seed_donation(&pool, campaign.id, "a@example.com", 20, today, true).await;
    seed_donation(&pool, campaign.id, "b@example.com", 30, today, true).await;
    seed_donation(&pool, campaign.id, "c@example.com", 99, today, false).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_donations"], 2);
    assert_eq!(json["total_earnings"], 50);
    assert_eq!(json["total_members"], 5);
    assert_eq!(json["total_campaigns"], 1);
    assert_eq!(json["latest_members"].as_array().unwrap().len(), 4);
    assert_eq!(json["recent_campaigns"][0]["title"], "Clinic");
    assert_eq!(json["chart"]["amounts"].as_array().unwrap().len(), 31);
    assert_eq!(json["chart"]["amounts"][30], 50.0);
    assert_eq!(json["chart"]["counts"][30], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_daily_donations_for_explicit_range(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let category = seed_category(&pool, "Health").await;
    let campaign = seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;
    let day = chrono::NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    seed_donation(&pool, campaign.id, "a@example.com", 12, day, true).await;
    let next = day.checked_add_days(Days::new(2)).unwrap();
    seed_donation(&pool, campaign.id, "b@example.com", 8, next, true).await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/admin/donations/daily?from=2024-02-27&to=2024-03-02",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["dates"],
        serde_json::json!(["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"])
    );
    assert_eq!(
        json["amounts"],
        serde_json::json!([0.0, 12.0, 0.0, 8.0, 0.0])
    );
    assert_eq!(json["counts"], serde_json::json!([0, 1, 0, 1, 0]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_daily_donations_rejects_reversed_range(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/admin/donations/daily?from=2024-03-02&to=2024-02-27",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_daily_donations_rejects_oversized_range(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/admin/donations/daily?from=2020-01-01&to=2024-01-01",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_chart_window_is_capped(pool: PgPool) {
    let config = ServerConfig {
        chart_window_days: 1_000_000_000,
        ..common::test_config()
    };

    let app = common::build_test_app_with_config(pool.clone(), config.clone());
    let response = get(app, "/api/v1/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let dates = json["chart"]["dates"].as_array().unwrap();
    assert_eq!(dates.len() as i64, MAX_RANGE_DAYS);
    assert_eq!(dates[dates.len() - 1], common::today().to_string());

    // Daily endpoint defaults to the same window.
    let app = common::build_test_app_with_config(pool, config);
    let response = get(app, "/api/v1/admin/donations/daily").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["dates"].as_array().unwrap().len() as i64, MAX_RANGE_DAYS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_daily_donations_single_day_range(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            "/api/v1/admin/donations/daily?from=2024-05-05&to=2024-05-05",
        )
        .await,
    )
    .await;
    assert_eq!(json["dates"], serde_json::json!(["2024-05-05"]));
    assert_eq!(json["amounts"], serde_json::json!([0.0]));
}

// ---------------------------------------------------------------------------
// Campaign moderation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_campaign_list_with_totals(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let category = seed_category(&pool, "Health").await;
    let first = seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;
    let second = seed_campaign(&pool, owner.id, category.id, "Ward", 100).await;
    seed_donation(&pool, first.id, "a@example.com", 25, common::today(), true).await;
    seed_donation(&pool, second.id, "b@example.com", 5, common::today(), false).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        &format!("/api/v1/admin/campaigns/{}", second.id),
        serde_json::json!({"is_active": false}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/admin/campaigns").await).await;
    assert_eq!(json["campaigns"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_campaigns"], 2);
    assert_eq!(json["active_campaigns"], 1);
    assert_eq!(json["total_raised"], 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_campaign_validates_status(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let category = seed_category(&pool, "Health").await;
    let campaign = seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;
    let uri = format!("/api/v1/admin/campaigns/{}", campaign.id);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &uri, serde_json::json!({"status": "archived"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &uri,
        serde_json::json!({"status": "rejected", "title": "Clinic (edited)"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["title"], "Clinic (edited)");
    assert_eq!(json["goal"], 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_campaign_is_soft(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let category = seed_category(&pool, "Health").await;
    let campaign = seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;
    seed_donation(&pool, campaign.id, "a@example.com", 25, common::today(), true).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/admin/campaigns/{}", campaign.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/campaigns").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/admin/campaigns").await).await;
    assert_eq!(json["campaigns"][0]["status"], "deleted");

    // Donations survive the soft delete.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/admin/donations").await).await;
    assert_eq!(json["donations"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unknown_campaign_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/admin/campaigns/{}", uuid::Uuid::now_v7()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_donations_with_fees(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let category = seed_category(&pool, "Health").await;
    let campaign = seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;
    let today = common::today();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    seed_donation(&pool, campaign.id, "a@example.com", 100, yesterday, true).await;
    seed_donation(&pool, campaign.id, "b@example.com", 60, today, true).await;
    seed_donation(&pool, campaign.id, "c@example.com", 40, today, false).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/admin/donations").await).await;

    assert_eq!(json["total_donations"], 2);
    assert_eq!(json["total_amount"], 160);
    assert_eq!(json["pending_amount"], 40);
    assert_eq!(json["admin_earnings"], 8.0);

    let rows = json["donations"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["amount"], 100);
    assert_eq!(rows[2]["platform_fee_display"], "$5.00");
    assert_eq!(rows[2]["campaign_title"], "Clinic");
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_crud(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/categories",
        serde_json::json!({"name": "Animals", "description": "Shelters"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/admin/categories/{id}"),
        serde_json::json!({"name": "Pets"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Pets");
    assert_eq!(json["description"], "Shelters");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/admin/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/admin/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_returns_409(pool: PgPool) {
    seed_category(&pool, "Health").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/categories",
        serde_json::json!({"name": "Health"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categories_sorted_by_usage_and_delete_cascades(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let quiet = seed_category(&pool, "Arts").await;
    let busy = seed_category(&pool, "Health").await;
    seed_campaign(&pool, owner.id, busy.id, "Clinic", 100).await;
    seed_campaign(&pool, owner.id, busy.id, "Ward", 100).await;
    seed_campaign(&pool, owner.id, quiet.id, "Mural", 100).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/admin/categories").await).await;
    assert_eq!(json["data"][0]["name"], "Health");
    assert_eq!(json["data"][0]["campaign_count"], 2);
    assert_eq!(json["data"][1]["campaign_count"], 1);

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v1/admin/categories/{}", busy.id)).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/admin/campaigns").await).await;
    assert_eq!(json["total_campaigns"], 1);
    assert_eq!(json["campaigns"][0]["title"], "Mural");
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_member_reports_new_state(pool: PgPool) {
    let member = seed_member(&pool, "carol").await;
    let uri = format!("/api/v1/admin/members/{}/toggle", member.id);

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Member carol deactivated successfully!");

    let app = common::build_test_app(pool.clone());
    let json = body_json(post_empty(app, &uri).await).await;
    assert_eq!(json["message"], "Member carol activated successfully!");

    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/v1/admin/members/999999/toggle").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_members_newest_first(pool: PgPool) {
    seed_member(&pool, "first").await;
    seed_member(&pool, "second").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/admin/members").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["username"], "second");
    assert_eq!(data[0]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_member_owning_campaigns_returns_409(pool: PgPool) {
    let owner = seed_member(&pool, "owner").await;
    let idle = seed_member(&pool, "idle").await;
    let category = seed_category(&pool, "Health").await;
    seed_campaign(&pool, owner.id, category.id, "Clinic", 100).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/admin/members/{}", owner.id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/admin/members/{}", idle.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
