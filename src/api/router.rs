//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. No auth middleware: the service is a
//! stateless pure function over the request body, with nothing to protect.

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with all routes nested under `/api/`.
pub fn api_router() -> Router {
    let ctx = ApiContext::new();

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/diagnostics", post(endpoints::diagnostics::analyze))
        .with_state(ctx);

    Router::new().nest("/api", routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::extraction::INCORRECT_PARAMETER;

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = api_router();

        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], crate::config::APP_VERSION);
    }

    #[tokio::test]
    async fn diagnostics_end_to_end() {
        let app = api_router();
        let text = "paciente pesa 70 quilos altura 1 m 70 cm sintomas febre tosse";

        let req = json_post(
            "/api/diagnostics",
            &format!("{{\"text\":\"{text}\"}}"),
        );
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = body_string(response).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["weight"], serde_json::json!(70.0));
        assert_eq!(value["height"], serde_json::json!(170.0));
        assert_eq!(value["symptoms"], "febre");
        assert_eq!(value["full_text"], text);
    }

    #[tokio::test]
    async fn diagnostics_missing_text_returns_fixed_payload() {
        let app = api_router();

        let req = json_post("/api/diagnostics", "{}");
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, INCORRECT_PARAMETER);
    }

    #[tokio::test]
    async fn diagnostics_empty_text_returns_fixed_payload() {
        let app = api_router();

        let req = json_post("/api/diagnostics", "{\"text\":\"\"}");
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, INCORRECT_PARAMETER);
    }

    #[tokio::test]
    async fn diagnostics_malformed_body_returns_fixed_payload() {
        let app = api_router();

        let req = json_post("/api/diagnostics", "not json at all");
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, INCORRECT_PARAMETER);
    }

    #[tokio::test]
    async fn diagnostics_unmatched_fields_are_soft_nulls() {
        let app = api_router();

        let req = json_post("/api/diagnostics", "{\"text\":\"consulta de rotina\"}");
        let response = app.oneshot(req).await.unwrap();

        // Well-formed request with nothing to extract is NOT an error.
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["weight"], serde_json::Value::Null);
        assert_eq!(value["symptoms"], serde_json::Value::Null);
        assert_eq!(value["full_text"], "consulta de rotina");
    }
}
