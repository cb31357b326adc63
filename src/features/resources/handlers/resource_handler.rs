use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::core::error::{Result, ValidationErrorBody};
use crate::features::resources::dtos::ResourceResponseDto;
use crate::features::resources::services::ResourceService;
use crate::shared::validation::Schema;

/// State for resource handlers: the service plus the compiled params schema.
#[derive(Clone)]
pub struct ResourcesState {
    pub service: Arc<ResourceService>,
    pub params_schema: Arc<Schema>,
}

/// List resources belonging to a region
///
/// The `regionId` path value is validated against the `regions` table before
/// the lookup runs; unknown identifiers are rejected with a 422.
#[utoipa::path(
    get,
    path = "/api/regions/{regionId}/resources",
    params(
        ("regionId" = String, Path, description = "Region public identifier")
    ),
    responses(
        (status = 200, description = "Resources in the region", body = Vec<ResourceResponseDto>),
        (status = 422, description = "Unknown region identifier", body = ValidationErrorBody)
    ),
    tag = "resources"
)]
pub async fn list_resources_by_region(
    State(state): State<ResourcesState>,
    Path(region_id): Path<String>,
) -> Result<Json<Vec<ResourceResponseDto>>> {
    let mut params = Map::new();
    params.insert("regionId".to_string(), Value::String(region_id));
    state.params_schema.validate(&mut params).await?;

    let region_ulid = params
        .get("regionId")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let resources = state.service.list_by_region(region_ulid).await?;
    Ok(Json(resources))
}
