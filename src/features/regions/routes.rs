use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions", get(handlers::list_regions))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::shared::test_helpers::{region, test_app};

    #[tokio::test]
    async fn lists_all_regions_with_public_fields_only() {
        let server = TestServer::new(test_app(
            vec![
                region(1, "01HAAA", "us-east", "US East"),
                region(2, "01HBBB", "eu-west", "EU West"),
            ],
            Vec::new(),
        ))
        .unwrap();

        let response = server.get("/api/regions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "01HAAA");
        assert_eq!(items[0]["regionId"], "us-east");
        assert_eq!(items[0]["regionName"], "US East");
        assert_eq!(items[1]["id"], "01HBBB");

        for item in items {
            let object = item.as_object().unwrap();
            assert!(!object.contains_key("ulid"));
            assert!(object["id"].is_string());
        }
    }

    #[tokio::test]
    async fn an_empty_catalog_yields_an_empty_array() {
        let server = TestServer::new(test_app(Vec::new(), Vec::new())).unwrap();

        let response = server.get("/api/regions").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), serde_json::json!([]));
    }

    #[tokio::test]
    async fn repeated_reads_return_identical_results() {
        let server = TestServer::new(test_app(
            vec![region(1, "01HAAA", "us-east", "US East")],
            Vec::new(),
        ))
        .unwrap();

        let first: Value = server.get("/api/regions").await.json();
        let second: Value = server.get("/api/regions").await.json();
        assert_eq!(first, second);
    }
}
