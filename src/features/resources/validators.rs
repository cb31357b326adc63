use std::sync::Arc;

use crate::shared::validation::{
    ExistenceChecker, Exists, ExistsOptions, Required, RuleRegistry, Schema, Trim,
};

/// Params schema for `GET /api/regions/{regionId}/resources`.
///
/// `regionId` must be a non-empty trimmed string naming an existing region's
/// public identifier.
pub fn list_resources_schema(checker: Arc<dyn ExistenceChecker>) -> Schema {
    let mut registry = RuleRegistry::default();
    registry.register(Arc::new(Trim));
    registry.register(Arc::new(Required));
    registry.register(Arc::new(Exists::new(
        ExistsOptions {
            table: "regions",
            column: "ulid",
        },
        checker,
    )));

    Schema::builder()
        .field("regionId", &registry, &["trim", "required", "exists"])
        .build()
}
