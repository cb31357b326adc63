use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::repository::RegionRepository;
use crate::features::resources::dtos::ResourceResponseDto;
use crate::features::resources::repository::ResourceRepository;

/// Service for listing resources scoped to a region.
pub struct ResourceService {
    regions: Arc<dyn RegionRepository>,
    resources: Arc<dyn ResourceRepository>,
}

impl ResourceService {
    pub fn new(
        regions: Arc<dyn RegionRepository>,
        resources: Arc<dyn ResourceRepository>,
    ) -> Self {
        Self { regions, resources }
    }

    /// List resources belonging to the region with the given public identifier.
    ///
    /// The params validator has already vouched for the identifier. A region
    /// deleted between validation and this lookup yields an empty listing,
    /// not an error.
    pub async fn list_by_region(&self, region_ulid: &str) -> Result<Vec<ResourceResponseDto>> {
        let region = self.regions.find_by_ulid(region_ulid).await.map_err(|e| {
            tracing::error!("Failed to fetch region {}: {:?}", region_ulid, e);
            AppError::Database(e)
        })?;

        let Some(region) = region else {
            tracing::debug!("Region {} gone after validation, listing nothing", region_ulid);
            return Ok(Vec::new());
        };

        let resources = self
            .resources
            .find_by_region_id(region.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch resources for region {}: {:?}", region_ulid, e);
                AppError::Database(e)
            })?;

        Ok(resources.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        region, resource, InMemoryRegionRepository, InMemoryResourceRepository,
    };

    fn service() -> ResourceService {
        ResourceService::new(
            Arc::new(InMemoryRegionRepository::new(vec![
                region(1, "01HAAA", "us-east", "US East"),
                region(2, "01HBBB", "eu-west", "EU West"),
            ])),
            Arc::new(InMemoryResourceRepository::new(vec![
                resource(10, "01HRES1", "db1", 1, "primary db"),
                resource(11, "01HRES2", "db2", 1, "replica db"),
                resource(12, "01HRES3", "cache", 2, "edge cache"),
            ])),
        )
    }

    #[tokio::test]
    async fn lists_only_the_regions_own_resources() {
        let listed = service().list_by_region("01HAAA").await.unwrap();
        let ulids: Vec<&str> = listed.iter().map(|r| r.ulid.as_str()).collect();
        assert_eq!(ulids, vec!["01HRES1", "01HRES2"]);
    }

    #[tokio::test]
    async fn a_region_without_resources_lists_nothing() {
        let service = ResourceService::new(
            Arc::new(InMemoryRegionRepository::new(vec![region(
                1, "01HAAA", "us-east", "US East",
            )])),
            Arc::new(InMemoryResourceRepository::new(Vec::new())),
        );

        assert!(service.list_by_region("01HAAA").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn a_region_gone_after_validation_lists_nothing() {
        // The validator said yes, but the row vanished before the service ran.
        let listed = service().list_by_region("01HGONE").await.unwrap();
        assert!(listed.is_empty());
    }
}
