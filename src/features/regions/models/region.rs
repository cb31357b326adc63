use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database record for a region.
///
/// `id` is the internal storage key and never crosses the API boundary;
/// `ulid` is the public identifier clients see.
#[derive(Debug, Clone, FromRow)]
pub struct Region {
    pub id: i64,
    pub ulid: String,
    pub region_id: String,
    pub region_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
