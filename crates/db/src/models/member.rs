//! Member (user account) model and DTOs.

use qonty_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table joined with its country name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub country_id: Option<DbId>,
    pub country_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub date_joined: Timestamp,
}

impl Member {
    /// First and last name joined by a space, or the username when both are blank.
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// DTO for creating a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub country_id: Option<DbId>,
    #[serde(default)]
    pub is_superuser: bool,
}
