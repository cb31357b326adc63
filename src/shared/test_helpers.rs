//! In-memory doubles and fixtures shared by feature tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::features::regions::models::Region;
use crate::features::regions::repository::RegionRepository;
use crate::features::regions::{routes as regions_routes, RegionService};
use crate::features::resources::models::Resource;
use crate::features::resources::repository::ResourceRepository;
use crate::features::resources::{routes as resources_routes, ResourceService};
use crate::shared::validation::ExistenceChecker;

pub fn region(id: i64, ulid: &str, region_id: &str, region_name: &str) -> Region {
    let now = Utc::now();
    Region {
        id,
        ulid: ulid.to_string(),
        region_id: region_id.to_string(),
        region_name: region_name.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn resource(id: i64, ulid: &str, name: &str, region_id: i64, description: &str) -> Resource {
    let now = Utc::now();
    Resource {
        id,
        ulid: ulid.to_string(),
        name: name.to_string(),
        region_id,
        description: description.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Filler description text for fixtures that don't assert on it.
pub fn any_description() -> String {
    Sentence(3..8).fake()
}

pub struct InMemoryRegionRepository {
    regions: Vec<Region>,
}

impl InMemoryRegionRepository {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn find_all(&self) -> sqlx::Result<Vec<Region>> {
        Ok(self.regions.clone())
    }

    async fn find_by_ulid(&self, ulid: &str) -> sqlx::Result<Option<Region>> {
        Ok(self.regions.iter().find(|r| r.ulid == ulid).cloned())
    }
}

pub struct InMemoryResourceRepository {
    resources: Vec<Resource>,
}

impl InMemoryResourceRepository {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_by_region_id(&self, region_id: i64) -> sqlx::Result<Vec<Resource>> {
        Ok(self
            .resources
            .iter()
            .filter(|r| r.region_id == region_id)
            .cloned()
            .collect())
    }
}

/// Existence checker over fixed `{table}.{column}` value sets.
#[derive(Default)]
pub struct InMemoryExistenceChecker {
    rows: HashMap<(String, String), HashSet<String>>,
}

impl InMemoryExistenceChecker {
    pub fn with_values(
        table: &str,
        column: &str,
        values: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut rows = HashMap::new();
        rows.insert(
            (table.to_string(), column.to_string()),
            values.into_iter().collect(),
        );
        Self { rows }
    }
}

#[async_trait]
impl ExistenceChecker for InMemoryExistenceChecker {
    async fn exists(&self, table: &str, column: &str, value: &str) -> sqlx::Result<bool> {
        Ok(self
            .rows
            .get(&(table.to_string(), column.to_string()))
            .is_some_and(|values| values.contains(value)))
    }
}

/// The application router over in-memory stores, wired the way `main` wires
/// the real one.
pub fn test_app(regions: Vec<Region>, resources: Vec<Resource>) -> Router {
    let checker: Arc<dyn ExistenceChecker> = Arc::new(InMemoryExistenceChecker::with_values(
        "regions",
        "ulid",
        regions.iter().map(|r| r.ulid.clone()),
    ));
    let region_repository: Arc<dyn RegionRepository> =
        Arc::new(InMemoryRegionRepository::new(regions));
    let resource_repository: Arc<dyn ResourceRepository> =
        Arc::new(InMemoryResourceRepository::new(resources));

    let region_service = Arc::new(RegionService::new(Arc::clone(&region_repository)));
    let resource_service = Arc::new(ResourceService::new(region_repository, resource_repository));

    Router::new()
        .merge(regions_routes::routes(region_service))
        .merge(resources_routes::routes(resource_service, checker))
}
