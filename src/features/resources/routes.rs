use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::resources::handlers::{self, ResourcesState};
use crate::features::resources::services::ResourceService;
use crate::features::resources::validators;
use crate::shared::validation::ExistenceChecker;

/// Create routes for the resources feature
pub fn routes(service: Arc<ResourceService>, checker: Arc<dyn ExistenceChecker>) -> Router {
    let state = ResourcesState {
        service,
        params_schema: Arc::new(validators::list_resources_schema(checker)),
    };

    Router::new()
        .route(
            "/api/regions/{regionId}/resources",
            get(handlers::list_resources_by_region),
        )
        .with_state(state)
}
