pub mod resource_handler;

pub use resource_handler::{__path_list_resources_by_region, list_resources_by_region, ResourcesState};
