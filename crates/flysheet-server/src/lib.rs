//! HTTP server for Flysheet.
//!
//! Exposes the artifact lifecycle over two endpoints — `POST /artifacts`
//! to render and register a document, `GET /artifacts/{id}` to retrieve it
//! while it remains valid — plus a health probe. Retrieval is
//! unauthenticated: any holder of the identifier may fetch.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::FlysheetServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::Router;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        FlysheetServer::new(ServerConfig::default())
            .router()
            .unwrap()
    }

    fn create_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/artifacts")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn create_then_fetch_cycle() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(create_request(r#"{"text":"Hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let json = body_json(response).await;
        let url = json["url"].as_str().expect("url in response");
        assert!(json["expiresAt"].is_string());

        // The URL embeds the identifier; fetch through the same router.
        let path = url
            .strip_prefix("http://127.0.0.1:8080")
            .expect("url built from public base");
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["content-type"],
            "application/pdf"
        );
        assert!(response.headers()["content-disposition"]
            .to_str()
            .unwrap()
            .starts_with("inline; filename="));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let app = test_router();
        let response = app
            .oneshot(create_request(r#"{"text":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let json = body_json(response).await;
        assert_eq!(json["error"], "text is required");
    }

    #[tokio::test]
    async fn missing_text_field_is_a_client_error() {
        let app = test_router();
        let response = app.oneshot(create_request(r#"{}"#)).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn unknown_artifact_is_not_found() {
        let app = test_router();
        let id = flysheet_types::ArtifactId::mint();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/artifacts/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 404);

        let json = body_json(response).await;
        assert_eq!(json["error"], "artifact not found or expired");
    }

    #[tokio::test]
    async fn malformed_artifact_id_is_not_found() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/artifacts/not-a-valid-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = test_router();
        let mut request = create_request(r#"{"text":"cross-origin"}"#);
        request
            .headers_mut()
            .insert("origin", "https://app.example.com".parse().unwrap());

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
