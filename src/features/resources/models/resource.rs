use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database record for a resource.
///
/// Both `id` and the `region_id` foreign key are internal storage keys;
/// only `ulid` identifies a resource outside the boundary.
#[derive(Debug, Clone, FromRow)]
pub struct Resource {
    pub id: i64,
    pub ulid: String,
    pub name: String,
    pub region_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
