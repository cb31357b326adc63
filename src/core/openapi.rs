use utoipa::{Modify, OpenApi};

use crate::core::error::{ErrorBody, ValidationErrorBody};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::resources::{dtos as resources_dtos, handlers as resources_handlers};
use crate::shared::validation::ValidationError;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        // Resources
        resources_handlers::list_resources_by_region,
    ),
    components(
        schemas(
            regions_dtos::RegionResponseDto,
            resources_dtos::ResourceResponseDto,
            ErrorBody,
            ValidationErrorBody,
            ValidationError,
        )
    ),
    tags(
        (name = "regions", description = "Region catalog (public)"),
        (name = "resources", description = "Resources grouped under a region (public)"),
    ),
    info(
        title = "Region Catalog API",
        version = "0.1.0",
        description = "Read-only API for regions and their resources",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
