//! Repository for the `users` table.

use qonty_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member};

/// Member columns with the joined country name. Expects `users u` and
/// `countries co` aliases.
const SELECT_MEMBER: &str = "SELECT u.id, u.username, u.email, u.first_name, u.last_name, \
                                    u.country_id, co.name AS country_name, u.is_active, \
                                    u.is_superuser, u.date_joined";

/// Provides queries over members (user accounts).
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "WITH u AS (
                INSERT INTO users (username, email, first_name, last_name, country_id, is_superuser)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
             )
             {SELECT_MEMBER} FROM u LEFT JOIN countries co ON co.id = u.country_id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.country_id)
            .bind(input.is_superuser)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "{SELECT_MEMBER} FROM users u LEFT JOIN countries co ON co.id = u.country_id
             WHERE u.id = $1"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all members, most recently joined first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "{SELECT_MEMBER} FROM users u LEFT JOIN countries co ON co.id = u.country_id
             ORDER BY u.date_joined DESC, u.id DESC"
        );
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// The `limit` most recently joined members.
    pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "{SELECT_MEMBER} FROM users u LEFT JOIN countries co ON co.id = u.country_id
             ORDER BY u.date_joined DESC, u.id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM users")
            .fetch_one(pool)
            .await
    }

    /// Flip `is_active`, returning the updated member or `None` if missing.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "WITH u AS (
                UPDATE users SET is_active = NOT is_active
                WHERE id = $1
                RETURNING *
             )
             {SELECT_MEMBER} FROM u LEFT JOIN countries co ON co.id = u.country_id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a member. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while the member still owns campaigns.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
