//! Service metadata routes. None of these handlers touch the database.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::{AppState, SERVICE_NAME};

/// OpenAPI description of every route, served at `/docs`.
pub const OPENAPI_YAML: &str = include_str!("../../openapi/openapi.yaml");

/// Path advertised by the root endpoint.
pub const DOCS_PATH: &str = "/docs";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: String,
    pub docs: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(DOCS_PATH, get(docs))
}

/// Liveness probe.
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: format!("Welcome to {SERVICE_NAME}"),
        docs: DOCS_PATH,
    })
}

async fn docs() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/yaml; charset=utf-8")],
        OPENAPI_YAML,
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::routes::test_support::{send, test_app};

    #[tokio::test]
    async fn test_health() {
        let (app, _db) = test_app().await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_health_does_not_need_database() {
        let (app, db) = test_app().await;
        db.close().await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));

        // Item routes do need it, and a lost store is a plain 500.
        let (status, body) = send(&app, Method::GET, "/items", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "detail": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_root_welcome() {
        let (app, _db) = test_app().await;

        let (status, body) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "Welcome to Portfolio API", "docs": "/docs" })
        );
    }

    #[tokio::test]
    async fn test_docs_served_where_root_points() {
        let (app, _db) = test_app().await;

        let (_, welcome) = send(&app, Method::GET, "/", None).await;
        let docs_path = welcome["docs"].as_str().unwrap().to_string();

        let res = app
            .clone()
            .oneshot(Request::builder().uri(&docs_path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[header::CONTENT_TYPE],
            "application/yaml; charset=utf-8"
        );

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("openapi: 3"));
        for path in ["/health:", "/items:", "/items/{id}:"] {
            assert!(text.contains(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _db) = test_app().await;

        let (status, _) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
