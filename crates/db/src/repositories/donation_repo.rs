//! Repository for the `donations` table, including the aggregate queries
//! behind the dashboard totals and daily charts.

use std::collections::HashMap;

use chrono::NaiveDate;
use qonty_core::timeseries::DailyAggregate;
use qonty_core::types::{DbId, EntityUuid};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::donation::{
    CreateDonation, DailyTotalRow, Donation, DonationFilter, DonationTotals, DonationWithCampaign,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campaign_id, fullname, email, country, postal_code, amount, \
                       anonymous, approved, comment, donated_on";

/// Donation columns plus campaign title. Expects `donations d` and
/// `campaigns c` aliases.
const SELECT_WITH_CAMPAIGN: &str = "SELECT d.id, d.campaign_id, c.title AS campaign_title, \
            d.fullname, d.email, d.country, d.postal_code, d.amount, d.anonymous, \
            d.approved, d.comment, d.donated_on \
     FROM donations d \
     JOIN campaigns c ON c.id = d.campaign_id";

/// Join used by every filtered aggregate.
const AGGREGATE_FROM: &str = " FROM donations d JOIN campaigns c ON c.id = d.campaign_id";

/// Provides CRUD and aggregate queries for donations.
pub struct DonationRepo;

impl DonationRepo {
    /// Record a donation to `campaign_id` dated `donated_on`.
    ///
    /// Ids are UUIDv7 so that, within one day, newer donations sort after
    /// older ones.
    pub async fn create(
        pool: &PgPool,
        campaign_id: EntityUuid,
        input: &CreateDonation,
        donated_on: NaiveDate,
        approved: bool,
    ) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations
                (id, campaign_id, fullname, email, country, postal_code, amount,
                 anonymous, approved, comment, donated_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(Uuid::now_v7())
            .bind(campaign_id)
            .bind(&input.fullname)
            .bind(&input.email)
            .bind(&input.country)
            .bind(&input.postal_code)
            .bind(input.amount)
            .bind(input.anonymous)
            .bind(approved)
            .bind(&input.comment)
            .bind(donated_on)
            .fetch_one(pool)
            .await
    }

    /// Donations to one campaign, newest first (date, then id).
    pub async fn list_for_campaign(
        pool: &PgPool,
        campaign_id: EntityUuid,
        approved_only: bool,
        limit: i64,
    ) -> Result<Vec<Donation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM donations
             WHERE campaign_id = $1 AND (NOT $2 OR approved)
             ORDER BY donated_on DESC, id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(campaign_id)
            .bind(approved_only)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Donations received on campaigns owned by `owner_id`, newest first.
    pub async fn list_received(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<DonationWithCampaign>, sqlx::Error> {
        let query = format!(
            "{SELECT_WITH_CAMPAIGN}
             WHERE c.user_id = $1
             ORDER BY d.donated_on DESC, d.id DESC"
        );
        sqlx::query_as::<_, DonationWithCampaign>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Every donation, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DonationWithCampaign>, sqlx::Error> {
        let query = format!("{SELECT_WITH_CAMPAIGN} ORDER BY d.donated_on DESC, d.id DESC");
        sqlx::query_as::<_, DonationWithCampaign>(&query)
            .fetch_all(pool)
            .await
    }

    /// Sum and count of donations matching `filter`.
    pub async fn totals(
        pool: &PgPool,
        filter: &DonationFilter,
    ) -> Result<DonationTotals, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT COALESCE(SUM(d.amount), 0)::BIGINT AS total_amount, \
                    COUNT(*)::BIGINT AS donation_count",
        );
        qb.push(AGGREGATE_FROM);
        push_filter(&mut qb, filter);

        qb.build_query_as::<DonationTotals>().fetch_one(pool).await
    }

    /// Per-day sum and count of donations matching `filter` with
    /// `donated_on` in `[start, end]`. Days without donations are absent.
    pub async fn daily_totals(
        pool: &PgPool,
        filter: &DonationFilter,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyTotalRow>, sqlx::Error> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT d.donated_on AS day, \
                    COALESCE(SUM(d.amount), 0)::BIGINT AS total, \
                    COUNT(*)::BIGINT AS count",
        );
        qb.push(AGGREGATE_FROM);
        push_filter(&mut qb, filter);
        qb.push(" AND d.donated_on >= ").push_bind(start);
        qb.push(" AND d.donated_on <= ").push_bind(end);
        qb.push(" GROUP BY d.donated_on ORDER BY d.donated_on");

        let rows = qb.build_query_as::<DailyTotalRow>().fetch_all(pool).await?;
        tracing::debug!(days = rows.len(), %start, %end, "Loaded daily donation totals");
        Ok(rows)
    }

    /// [`daily_totals`](Self::daily_totals) keyed by day, ready for
    /// zero-filling.
    pub async fn daily_aggregates(
        pool: &PgPool,
        filter: &DonationFilter,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HashMap<NaiveDate, DailyAggregate>, sqlx::Error> {
        let rows = Self::daily_totals(pool, filter, start, end).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.day,
                    DailyAggregate {
                        total: row.total,
                        count: row.count,
                    },
                )
            })
            .collect())
    }
}

/// Append a `WHERE` clause for `filter`. Always emits `WHERE`, so callers
/// may continue with `AND ...`.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &DonationFilter) {
    qb.push(" WHERE TRUE");
    if let Some(approved) = filter.approved {
        qb.push(" AND d.approved = ").push_bind(approved);
    }
    if let Some(campaign_id) = filter.campaign_id {
        qb.push(" AND d.campaign_id = ").push_bind(campaign_id);
    }
    if let Some(owner_id) = filter.campaign_owner_id {
        qb.push(" AND c.user_id = ").push_bind(owner_id);
    }
    if let Some(email) = &filter.donor_email {
        qb.push(" AND d.email = ").push_bind(email.clone());
    }
}
