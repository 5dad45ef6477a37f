// API Integration Tests
//
// Purpose: Exercise every endpoint against an in-memory world catalog
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot
    use world_encyclopedia::{
        create_router, AppState, LookupError, World, WorldCatalog, WorldLookup,
    };

    const CATALOG: &str = r#"[
        {
            "id": 1,
            "name": "Veyra",
            "img": { "landscape": "veyra.png" },
            "description": "Tidally locked.",
            "geoDynamics": { "shape": "Sphere", "size": "Large", "climate": "Mild" },
            "magicTechnology": { "magicLvl": 4, "techLvl": 2, "magic": ["runes", "oaths"], "technology": ["steam"] },
            "species": [{ "id": 11, "img": "s.png", "imagine": "Sunborn", "name": "Sunborn", "lore": "Bright.", "alignment": "Lawful", "politics": "Theocracy" }],
            "lore": ["It stopped to listen."]
        },
        { "id": 2, "name": "Orun" }
    ]"#;

    struct BrokenLookup;

    #[async_trait]
    impl WorldLookup for BrokenLookup {
        async fn fetch_world_detail(&self, _id: &str) -> Result<World, LookupError> {
            Err(LookupError::from_message("upstream timed out"))
        }
    }

    fn create_test_app() -> axum::Router {
        let catalog = WorldCatalog::from_json_str(CATALOG).expect("catalog fixture parses");
        create_router(AppState::new(catalog, Duration::from_secs(60)))
    }

    fn create_broken_app() -> axum::Router {
        let catalog = Arc::new(WorldCatalog::from_json_str(CATALOG).expect("catalog fixture parses"));
        let state = AppState::with_lookup(catalog, Arc::new(BrokenLookup), Duration::from_secs(60));
        create_router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, serde_json::from_slice(&body).expect("Failed to parse JSON"))
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, json) = get(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_worlds() {
        let (status, json) = get(create_test_app(), "/api/worlds").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["rows"], 2);
        assert_eq!(json["data"][0]["name"], "Veyra");
        assert_eq!(json["data"][0]["landscape"], "veyra.png");
    }

    #[tokio::test]
    async fn test_get_world_page() {
        let (status, json) = get(create_test_app(), "/api/worlds/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["state"], "ready");
        assert_eq!(json["active_tab"], "Inhabitants");

        let strip = json["tab_strip"].as_array().unwrap();
        let keys: Vec<&str> = strip.iter().map(|t| t["key"].as_str().unwrap()).collect();
        assert_eq!(keys, ["Inhabitants", "Locations", "Characters", "Events", "History"]);
        assert_eq!(strip[0]["active"], true);

        let overview = &json["page"]["overview"];
        assert_eq!(overview["magic"]["details"], "Runes and oaths");
        assert_eq!(overview["geo"][0]["value"], "Sphere");

        let tabs = json["page"]["tabs"].as_array().unwrap();
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0]["content"]["kind"], "details");
        assert_eq!(tabs[0]["content"]["value"][0]["additional_details"][1], "Politics: Theocracy");
        assert_eq!(tabs[1]["content"]["kind"], "unknown");
        assert_eq!(tabs[1]["content"]["value"], "This world's locations is unknown.");
    }

    #[tokio::test]
    async fn test_get_world_page_twice_uses_cache() {
        let app = create_test_app();
        let (first_status, first) = get(app.clone(), "/api/worlds/2").await;
        let (second_status, second) = get(app, "/api/worlds/2").await;
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_world_is_404() {
        let (status, json) = get(create_test_app(), "/api/worlds/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("999"));
    }

    #[tokio::test]
    async fn test_failed_lookup_is_500() {
        let (status, json) = get(create_broken_app(), "/api/worlds/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_history_tab() {
        let (status, json) = get(create_test_app(), "/api/worlds/1/tabs/History").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tab"], "History");
        assert_eq!(json["content"]["kind"], "paragraphs");
        assert_eq!(json["content"]["value"][0], "It stopped to listen.");
    }

    #[tokio::test]
    async fn test_unknown_tab_has_null_content() {
        let (status, json) = get(create_test_app(), "/api/worlds/1/tabs/Weather").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tab"], "Weather");
        assert!(json["content"].is_null());
    }
}
