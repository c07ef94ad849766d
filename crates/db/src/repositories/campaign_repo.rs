//! Repository for the `campaigns` table.

use qonty_core::campaign::CampaignStatus;
use qonty_core::types::{DbId, EntityUuid};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::campaign::{Campaign, CampaignListing, CreateCampaign, UpdateCampaign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, user_id, category_id, created_at, status, \
                       image_url, goal, location, deadline, is_active";

/// Listing select with owner, category and approved total. Expects the
/// `campaigns c`, `users u` and `categories cat` aliases.
const SELECT_LISTING: &str = "SELECT c.id, c.title, c.description, c.user_id, \
            u.username AS owner_username, c.category_id, cat.name AS category_name, \
            c.created_at, c.status, c.image_url, c.goal, c.location, c.deadline, c.is_active, \
            COALESCE((SELECT SUM(d.amount) FROM donations d \
                      WHERE d.campaign_id = c.id AND d.approved), 0)::BIGINT AS total_raised \
     FROM campaigns c \
     JOIN users u ON u.id = c.user_id \
     JOIN categories cat ON cat.id = c.category_id";

/// Provides CRUD and listing queries for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign with the given moderation state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCampaign,
        status: CampaignStatus,
        is_active: bool,
    ) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns
                (id, title, description, user_id, category_id, status, image_url,
                 goal, location, deadline, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(status.as_str())
            .bind(&input.image_url)
            .bind(input.goal)
            .bind(&input.location)
            .bind(input.deadline)
            .bind(is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: EntityUuid,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A single campaign with owner, category and approved total.
    pub async fn find_listing(
        pool: &PgPool,
        id: EntityUuid,
    ) -> Result<Option<CampaignListing>, sqlx::Error> {
        let query = format!("{SELECT_LISTING} WHERE c.id = $1");
        sqlx::query_as::<_, CampaignListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Public listing, newest first. Deleted campaigns are hidden.
    ///
    /// `like_pattern` (already escaped and wrapped in `%`) is matched
    /// case-insensitively against title, description, location and
    /// category name.
    pub async fn list_public(
        pool: &PgPool,
        like_pattern: Option<&str>,
    ) -> Result<Vec<CampaignListing>, sqlx::Error> {
        match like_pattern {
            Some(pattern) => {
                let query = format!(
                    "{SELECT_LISTING}
                     WHERE c.status <> 'deleted'
                       AND (c.title ILIKE $1 OR c.description ILIKE $1
                            OR c.location ILIKE $1 OR cat.name ILIKE $1)
                     ORDER BY c.created_at DESC"
                );
                sqlx::query_as::<_, CampaignListing>(&query)
                    .bind(pattern)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "{SELECT_LISTING} WHERE c.status <> 'deleted' ORDER BY c.created_at DESC"
                );
                sqlx::query_as::<_, CampaignListing>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Non-deleted campaigns in one category, newest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<CampaignListing>, sqlx::Error> {
        let query = format!(
            "{SELECT_LISTING}
             WHERE c.category_id = $1 AND c.status <> 'deleted'
             ORDER BY c.created_at DESC"
        );
        sqlx::query_as::<_, CampaignListing>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Every campaign owned by a member, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CampaignListing>, sqlx::Error> {
        let query = format!("{SELECT_LISTING} WHERE c.user_id = $1 ORDER BY c.created_at DESC");
        sqlx::query_as::<_, CampaignListing>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Every campaign regardless of status, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<CampaignListing>, sqlx::Error> {
        let query = format!("{SELECT_LISTING} ORDER BY c.created_at DESC");
        sqlx::query_as::<_, CampaignListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// The `limit` most recently created campaigns.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<CampaignListing>, sqlx::Error> {
        let query = format!("{SELECT_LISTING} ORDER BY c.created_at DESC LIMIT $1");
        sqlx::query_as::<_, CampaignListing>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Distinct campaigns that received donations from `email`, ordered by
    /// the most recent such donation.
    pub async fn donated_to_by_email(
        pool: &PgPool,
        email: &str,
        limit: i64,
    ) -> Result<Vec<CampaignListing>, sqlx::Error> {
        let query = format!(
            "{SELECT_LISTING}
             JOIN (SELECT campaign_id, MAX(donated_on) AS last_donated_on
                   FROM donations
                   WHERE email = $1
                   GROUP BY campaign_id) latest ON latest.campaign_id = c.id
             ORDER BY latest.last_donated_on DESC, c.created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, CampaignListing>(&query)
            .bind(email)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM campaigns")
            .fetch_one(pool)
            .await
    }

    /// Count campaigns flagged `is_active`, optionally for one owner.
    pub async fn count_active(pool: &PgPool, user_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*)::BIGINT FROM campaigns
             WHERE is_active AND ($1::BIGINT IS NULL OR user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Update a campaign. Only non-`None` fields in `input` are applied.
    ///
    /// `input.status` must already be validated against [`CampaignStatus`].
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityUuid,
        input: &UpdateCampaign,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category_id = COALESCE($4, category_id),
                status = COALESCE($5, status),
                image_url = COALESCE($6, image_url),
                goal = COALESCE($7, goal),
                location = COALESCE($8, location),
                deadline = COALESCE($9, deadline),
                is_active = COALESCE($10, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.status)
            .bind(&input.image_url)
            .bind(input.goal)
            .bind(&input.location)
            .bind(input.deadline)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Set the moderation status. Returns `true` if a row was updated.
    pub async fn set_status(
        pool: &PgPool,
        id: EntityUuid,
        status: CampaignStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE campaigns SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
