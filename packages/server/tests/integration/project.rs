use crate::common::{TestApp, routes};

mod listing {
    use super::*;

    #[tokio::test]
    async fn returns_projects_in_declared_order() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PROJECTS).await;

        assert_eq!(res.status, 200);
        let slugs: Vec<&str> = res.body.as_array().unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, vec!["alpha-app", "beta-tool", "gamma-site"]);
    }

    #[tokio::test]
    async fn featured_filter_preserves_relative_order() {
        let app = TestApp::spawn().await;

        let res = app.get(&format!("{}?featured=true", routes::PROJECTS)).await;

        assert_eq!(res.status, 200);
        let slugs: Vec<&str> = res.body.as_array().unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, vec!["alpha-app", "gamma-site"]);
    }

    #[tokio::test]
    async fn category_filter_matches_exactly() {
        let app = TestApp::spawn().await;

        let res = app.get(&format!("{}?category=Tooling", routes::PROJECTS)).await;
        assert_eq!(res.status, 200);
        let items = res.body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["slug"], "beta-tool");

        let all = app.get(&format!("{}?category=All", routes::PROJECTS)).await;
        assert_eq!(all.body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_items_carry_summary_fields() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PROJECTS).await;
        let first = &res.body.as_array().unwrap()[0];

        assert_eq!(first["title"], "Alpha App");
        assert_eq!(first["status"], "Completed");
        assert_eq!(first["tech"][0], "Rust");
    }
}

mod resolution {
    use super::*;

    #[tokio::test]
    async fn known_slug_with_detail_resolves_rich() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::project("alpha-app")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["project"]["slug"], "alpha-app");
        let detail = &res.body["detail"];
        assert!(!detail.is_null());
        assert!(detail["content"].as_str().unwrap().contains("# Alpha App"));
    }

    #[tokio::test]
    async fn dangling_details_key_degrades_to_fallback() {
        let app = TestApp::spawn().await;

        // beta-tool references "beta-tool.md" but no such detail file exists.
        let res = app.get(&routes::project("beta-tool")).await;

        assert_eq!(res.status, 200, "fallback must not be an error: {}", res.text);
        assert_eq!(res.body["project"]["slug"], "beta-tool");
        assert!(res.body["detail"].is_null());
    }

    #[tokio::test]
    async fn absent_details_file_resolves_to_fallback() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::project("gamma-site")).await;

        assert_eq!(res.status, 200);
        assert!(res.body["detail"].is_null());
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::project("nonexistent")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn slug_lookup_is_case_sensitive() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::project("Alpha-App")).await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn resolution_is_repeatable() {
        let app = TestApp::spawn().await;

        for _ in 0..3 {
            let res = app.get(&routes::project("alpha-app")).await;
            assert_eq!(res.status, 200);
            assert!(!res.body["detail"].is_null());
        }
    }
}
