// Copyright (C) 2026 StarHuntingGames
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    docs,
    handlers::{
        create_game_handler, delete_game_handler, get_game_handler, list_games_handler,
        update_game_handler,
    },
    store::GameStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/games", get(list_games_handler).post(create_game_handler))
        .route(
            "/games/{id}",
            get(get_game_handler)
                .put(update_game_handler)
                .delete(delete_game_handler),
        )
        .merge(docs::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"ok": true, "service": "games-service"}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryGameStore, SqlGameStore};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(AppState::new(Arc::new(InMemoryGameStore::default())))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let parsed = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, parsed)
    }

    #[tokio::test]
    async fn health_reports_service_name() {
        let (status, body) = send(&test_router(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true, "service": "games-service"}));
    }

    #[tokio::test]
    async fn create_returns_201_with_generated_id() {
        let router = test_router();
        let (status, body) = send(
            &router,
            Method::POST,
            "/games",
            Some(json!({"title": "The Witcher 3", "platform": "PC"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].is_i64());
        assert_eq!(body["title"], "The Witcher 3");
        assert_eq!(body["platform"], "PC");
    }

    #[tokio::test]
    async fn create_rejects_short_title_and_empty_platform() {
        let router = test_router();
        let (status, body) = send(
            &router,
            Method::POST,
            "/games",
            Some(json!({"title": "Go", "platform": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid input");
        let issues = body["issues"].as_array().expect("issues array");
        assert!(issues.contains(&json!({
            "field": "body.platform",
            "message": "platform is required"
        })));
        assert!(issues.contains(&json!({
            "field": "body.title",
            "message": "title must be at least 3 characters"
        })));

        let (_, listed) = send(&router, Method::GET, "/games", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn create_rejects_missing_platform() {
        let (status, body) = send(
            &test_router(),
            Method::POST,
            "/games",
            Some(json!({"title": "Half-Life"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["issues"],
            json!([{"field": "body.platform", "message": "platform is required"}])
        );
    }

    #[tokio::test]
    async fn write_without_json_content_type_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/games")
            .body(Body::from(r#"{"title":"Hades","platform":"PC"}"#))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_id_returns_404_for_get_update_delete() {
        let router = test_router();
        let expected = json!({"error": "game not found"});

        let (status, body) = send(&router, Method::GET, "/games/9999", None).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, expected.clone()));

        let (status, body) = send(
            &router,
            Method::PUT,
            "/games/9999",
            Some(json!({"title": "Hades", "platform": "PC"})),
        )
        .await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, expected.clone()));

        let (status, body) = send(&router, Method::DELETE, "/games/9999", None).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, expected));
    }

    #[tokio::test]
    async fn non_numeric_id_returns_404() {
        let (status, body) = send(&test_router(), Method::GET, "/games/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "game not found"}));
    }

    #[tokio::test]
    async fn invalid_utf8_id_returns_404_json() {
        let router = test_router();
        let expected = json!({"error": "game not found"});

        for (method, body) in [
            (Method::GET, None),
            (Method::PUT, Some(json!({"title": "Hades", "platform": "PC"}))),
            (Method::DELETE, None),
        ] {
            let (status, response) = send(&router, method.clone(), "/games/%FF", body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
            assert_eq!(response, expected, "{method}");
        }
    }

    #[tokio::test]
    async fn update_validates_before_looking_up_id() {
        let (status, body) = send(
            &test_router(),
            Method::PUT,
            "/games/9999",
            Some(json!({"title": "Go", "platform": "PC"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["issues"][0]["field"], "body.title");
    }

    #[tokio::test]
    async fn full_lifecycle_against_sqlite() {
        let store = SqlGameStore::connect("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
        let router = build_router(AppState::new(Arc::new(store)));

        let (status, created) = send(
            &router,
            Method::POST,
            "/games",
            Some(json!({"title": "Celeste", "platform": "Switch"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let path = format!("/games/{}", created["id"]);

        let (status, fetched) = send(&router, Method::GET, &path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &router,
            Method::PUT,
            &path,
            Some(json!({"title": "Celeste", "platform": "PC"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["platform"], "PC");

        let (status, listed) = send(&router, Method::GET, "/games", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([updated]));

        let (status, body) = send(&router, Method::DELETE, &path, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&router, Method::GET, &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&router, Method::DELETE, &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failure_returns_generic_500() {
        // No schema: every query fails inside the store.
        let store = SqlGameStore::connect("sqlite::memory:").await.unwrap();
        let router = build_router(AppState::new(Arc::new(store)));

        let (status, body) = send(&router, Method::GET, "/games", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "internal server error"}));
    }

    #[tokio::test]
    async fn serves_api_docs() {
        let router = test_router();
        let (status, spec) = send(&router, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(spec["paths"].get("/games/{id}").is_some());

        let request = Request::builder()
            .uri("/api-docs")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }
}
