use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    alliances::{calculate_alliance, get_top_alliances},
    health::get_health,
    import::import_file,
    matches::{create_match, get_matches},
    stats::get_overview,
    teams::{get_team, get_teams, upsert_team},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(get_health))
        .route("/api/teams", get(get_teams).post(upsert_team))
        .route("/api/teams/:number", get(get_team))
        .route("/api/matches", get(get_matches).post(create_match))
        .route("/api/stats/overview", get(get_overview))
        .route("/api/alliances/top", get(get_top_alliances))
        .route("/api/alliances/calc", post(calculate_alliance))
        .route("/api/import/file", post(import_file))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::settings::AppConfig;
    use crate::database::SqliteStore;

    struct TestApp {
        _dir: TempDir,
        router: Router,
    }

    impl TestApp {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("api.db");
            let config = AppConfig::new().with_database_path(path.to_str().unwrap());
            let store = SqliteStore::open(&config.store.database_path).unwrap();
            let router = create_router(Arc::new(AppState { store, config }));
            Self { _dir: dir, router }
        }

        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(json) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };
            self.call(request).await
        }

        async fn send_raw(&self, uri: &str, content_type: &str, body: impl Into<Body>) -> (StatusCode, Value) {
            let request = Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(body.into())
                .unwrap();
            self.call(request).await
        }

        async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }

        async fn seed_teams(&self) {
            let teams = [
                json!({ "teamNumber": 254, "name": "The Cheesy Poofs", "rating": 95, "matches": 12, "avgScore": 85, "reliability": 0.92, "auto": 15, "teleop": 65, "endgame": 5 }),
                json!({ "teamNumber": 118, "name": "Robonauts", "rating": 88, "matches": 12, "avgScore": 78, "reliability": 0.89, "auto": 12, "teleop": 58, "endgame": 8 }),
                json!({ "teamNumber": "1678", "name": "Citrus Circuits", "rating": "92", "matches": 12, "avgScore": 82, "reliability": 0.91, "auto": 14, "teleop": 60, "endgame": 8 }),
                json!({ "teamNumber": 971, "name": "Spartan Robotics", "rating": 72, "reliability": 0.8, "auto": 9, "teleop": 40, "endgame": 10 }),
            ];
            for team in teams {
                let (status, _) = self.send(Method::POST, "/api/teams", Some(team)).await;
                assert_eq!(status, StatusCode::CREATED);
            }
        }
    }

    #[tokio::test]
    async fn test_health() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_team_upsert_and_listing() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app.send(Method::GET, "/api/teams", None).await;

        assert_eq!(status, StatusCode::OK);
        let numbers: Vec<u64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["teamNumber"].as_u64().unwrap())
            .collect();
        assert_eq!(numbers, vec![254, 1678, 118, 971]);
        assert_eq!(body[0]["ratingClass"], "excellent");
        assert_eq!(body[2]["ratingClass"], "good");
        assert_eq!(body[3]["ratingClass"], "average");
        assert!(body[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_team_lookup() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app.send(Method::GET, "/api/teams/1678", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Citrus Circuits");
        assert_eq!(body["rating"], 92.0);

        let (status, body) = app.send(Method::GET, "/api/teams/9999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_team_without_number_is_rejected() {
        let app = TestApp::new();

        let (status, body) = app
            .send(Method::POST, "/api/teams", Some(json!({ "name": "Nameless", "rating": 80 })))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Team number must be a positive integer");
    }

    #[tokio::test]
    async fn test_top_alliances() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app.send(Method::GET, "/api/alliances/top?limit=2", None).await;

        assert_eq!(status, StatusCode::OK);
        let alliances = body.as_array().unwrap();
        assert_eq!(alliances.len(), 2);
        assert_eq!(alliances[0]["teams"], json!([254, 1678, 118]));
        let strength = alliances[0]["strength"].as_f64().unwrap();
        assert!((strength - 284.64).abs() < 0.01);
        assert!(strength >= alliances[1]["strength"].as_f64().unwrap());
    }

    #[tokio::test]
    async fn test_top_alliances_defaults_to_all_when_roster_small() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (_, body) = app.send(Method::GET, "/api/alliances/top", None).await;

        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_top_alliances_empty_roster() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/api/alliances/top", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_calculate_alliance() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app
            .send(Method::POST, "/api/alliances/calc", Some(json!({ "teamNumbers": [254, "118", 1678] })))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["teams"], json!([254, 118, 1678]));
        assert!((body["strength"].as_f64().unwrap() - 284.64).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_calculate_alliance_needs_three_known_teams() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app
            .send(Method::POST, "/api/alliances/calc", Some(json!({ "teamNumbers": [254, 9999, 254] })))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Three valid teams required");
    }

    #[tokio::test]
    async fn test_matches_and_overview() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, created) = app
            .send(Method::POST, "/api/matches", Some(json!({ "teamNumber": 254, "score": 120 })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["score"], 120);
        assert!(created["id"].is_i64());

        let (_, matches) = app.send(Method::GET, "/api/matches", None).await;
        assert_eq!(matches.as_array().unwrap().len(), 1);
        assert_eq!(matches[0]["teamNumber"], 254);

        let (status, overview) = app.send(Method::GET, "/api/stats/overview", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(overview, json!({ "totalTeams": 4, "avgRating": 87.0, "topTeam": 254, "dataPoints": 1 }));
    }

    #[tokio::test]
    async fn test_top_alliances_limit_zero_is_empty() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app.send(Method::GET, "/api/alliances/top?limit=0", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_top_alliances_large_limit_returns_full_ranking() {
        let app = TestApp::new();
        for number in 1..=20 {
            let team = json!({ "teamNumber": number, "rating": number, "reliability": 0.5, "auto": 1, "teleop": 1, "endgame": 1 });
            let (status, _) = app.send(Method::POST, "/api/teams", Some(team)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = app.send(Method::GET, "/api/alliances/top?limit=5000", None).await;

        assert_eq!(status, StatusCode::OK);
        let alliances = body.as_array().unwrap();
        assert_eq!(alliances.len(), 1140);
        assert_eq!(alliances[0]["teams"], json!([20, 19, 18]));
    }

    #[tokio::test]
    async fn test_top_alliances_rejects_non_numeric_limit() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/api/alliances/top?limit=abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_team_lookup_rejects_non_numeric_path() {
        let app = TestApp::new();

        let (status, body) = app.send(Method::GET, "/api/teams/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_rejected_as_json() {
        let app = TestApp::new();

        let (status, body) = app.send_raw("/api/teams", "application/json", "{\"teamNumber\": 254,").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = app.send_raw("/api/matches", "application/json", "[1, 2]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_team_name_accepts_number() {
        let app = TestApp::new();

        let (status, body) = app
            .send(Method::POST, "/api/teams", Some(json!({ "teamNumber": 5, "name": 5 })))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "5");
    }

    #[tokio::test]
    async fn test_calculate_alliance_with_null_team_numbers() {
        let app = TestApp::new();
        app.seed_teams().await;

        let (status, body) = app
            .send(Method::POST, "/api/alliances/calc", Some(json!({ "teamNumbers": null })))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Three valid teams required");
    }

    const BOUNDARY: &str = "roster-upload-boundary";

    fn multipart_body(field: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"roster.csv\"\r\nContent-Type: text/csv\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[tokio::test]
    async fn test_import_file_upload() {
        let app = TestApp::new();
        let csv = "\
Team Number,Team Name,Rating,Matches,Avg Score,Reliability,Auto Points,Teleop Points,Endgame Points
254,The Cheesy Poofs,95,12,85,0.92,15,65,5
118,Robonauts,88,12,78,0.89,12,58,8
,Unnumbered,70,1,1,1,1,1,1
1678,Citrus Circuits,92,12,82,0.91,14,60,8
";
        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");

        let (status, body) = app
            .send_raw("/api/import/file", &content_type, multipart_body("file", csv.as_bytes()))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true, "inserted": 3 }));

        let (_, top) = app.send(Method::GET, "/api/alliances/top", None).await;
        assert_eq!(top[0]["teams"], json!([254, 1678, 118]));
    }

    #[tokio::test]
    async fn test_import_file_failures() {
        let app = TestApp::new();
        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");

        let (status, body) = app
            .send_raw("/api/import/file", &content_type, multipart_body("other", b"Team Number\n1\n"))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file uploaded");

        let unreadable = b"Team Number,Team Name\n254,\xff\xfe\n".to_vec();
        let (status, body) = app
            .send_raw("/api/import/file", &content_type, multipart_body("file", &unreadable))
            .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Import failed");
    }
}
