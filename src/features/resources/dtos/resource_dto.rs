use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::resources::models::Resource;

/// Response DTO for a resource.
///
/// The public `ulid` is serialized as `id`; the internal storage key and the
/// `region_id` foreign key are never emitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponseDto {
    #[serde(rename = "id")]
    pub ulid: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceResponseDto {
    fn from(resource: Resource) -> Self {
        Self {
            ulid: resource.ulid,
            name: resource.name,
            description: resource.description,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}
