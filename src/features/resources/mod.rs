//! Resources scoped to a region.
//!
//! A resource belongs to exactly one region. The listing endpoint resolves
//! the region from its public identifier after the params validator has
//! confirmed that identifier exists.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/{regionId}/resources` | List resources in a region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod validators;

pub use services::ResourceService;
