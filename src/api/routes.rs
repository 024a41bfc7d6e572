//! API Routes
//!
//! Configures the Axum router with all student endpoints.

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, health_handler,
    list_students_handler, root_handler, update_student_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// The collection is served both with and without the trailing slash.
///
/// # Middleware
/// - CORS: Any origin for GET/POST/PUT/DELETE, without credentials
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Wildcard origins cannot be combined with credentials, so credentials stay off
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let collection = get(list_students_handler).post(create_student_handler);
    let member = get(get_student_handler)
        .put(update_student_handler)
        .delete(delete_student_handler);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/estudiantes", collection.clone())
        .route("/estudiantes/", collection)
        .route("/estudiantes/:id", member)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::in_memory())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_without_trailing_slash() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/estudiantes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estudiantes/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"nombre":"Ana","edad":20}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/estudiantes/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_preflight_without_credentials() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/estudiantes/")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert!(headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }
}
