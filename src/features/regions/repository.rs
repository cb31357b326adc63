use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::regions::models::Region;

/// Read access to the `regions` table.
#[async_trait]
pub trait RegionRepository: Send + Sync + 'static {
    async fn find_all(&self) -> sqlx::Result<Vec<Region>>;
    async fn find_by_ulid(&self, ulid: &str) -> sqlx::Result<Option<Region>>;
}

pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn find_all(&self) -> sqlx::Result<Vec<Region>> {
        sqlx::query_as(
            r#"
            SELECT id, ulid, region_id, region_name, created_at, updated_at
            FROM regions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_ulid(&self, ulid: &str) -> sqlx::Result<Option<Region>> {
        sqlx::query_as(
            r#"
            SELECT id, ulid, region_id, region_name, created_at, updated_at
            FROM regions
            WHERE ulid = $1
            "#,
        )
        .bind(ulid)
        .fetch_optional(&self.pool)
        .await
    }
}
