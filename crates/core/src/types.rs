/// Primary keys for members, categories and countries are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Campaigns and donations are keyed by UUID.
pub type EntityUuid = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
