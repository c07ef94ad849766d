//! Repository for the `countries` table.

use sqlx::PgPool;

use crate::models::country::{Country, CreateCountry};

pub struct CountryRepo;

impl CountryRepo {
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "INSERT INTO countries (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// List all countries alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries ORDER BY name")
            .fetch_all(pool)
            .await
    }
}
