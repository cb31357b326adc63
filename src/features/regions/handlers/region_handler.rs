use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::regions::dtos::RegionResponseDto;
use crate::features::regions::services::RegionService;

/// List all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List of regions", body = Vec<RegionResponseDto>),
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<RegionResponseDto>>> {
    let regions = service.list().await?;
    Ok(Json(regions))
}
