use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::RegionResponseDto;
use crate::features::regions::repository::RegionRepository;

/// Service for listing known regions.
pub struct RegionService {
    regions: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(regions: Arc<dyn RegionRepository>) -> Self {
        Self { regions }
    }

    /// List all regions in storage order.
    pub async fn list(&self) -> Result<Vec<RegionResponseDto>> {
        let regions = self.regions.find_all().await.map_err(|e| {
            tracing::error!("Failed to fetch regions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(regions.into_iter().map(Into::into).collect())
    }
}
