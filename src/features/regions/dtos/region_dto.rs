use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::Region;

/// Response DTO for a region.
///
/// The public `ulid` is serialized as `id`; the internal storage key is
/// never emitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    #[serde(rename = "id")]
    pub ulid: String,
    pub region_id: String,
    pub region_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            ulid: region.ulid,
            region_id: region.region_id,
            region_name: region.region_name,
            created_at: region.created_at,
            updated_at: region.updated_at,
        }
    }
}
