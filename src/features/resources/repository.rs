use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::resources::models::Resource;

/// Read access to the `resources` table.
#[async_trait]
pub trait ResourceRepository: Send + Sync + 'static {
    async fn find_by_region_id(&self, region_id: i64) -> sqlx::Result<Vec<Resource>>;
}

pub struct PgResourceRepository {
    pool: PgPool,
}

impl PgResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    async fn find_by_region_id(&self, region_id: i64) -> sqlx::Result<Vec<Resource>> {
        sqlx::query_as(
            r#"
            SELECT id, ulid, name, region_id, description, created_at, updated_at
            FROM resources
            WHERE region_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(region_id)
        .fetch_all(&self.pool)
        .await
    }
}
