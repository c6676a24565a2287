pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/profiles/:id",
            get(handlers::handle_get_profile).put(handlers::handle_save_profile),
        )
        .route(
            "/api/v1/profiles/:id/edit",
            get(handlers::handle_edit_profile),
        )
        .route(
            "/api/v1/profiles/:id/resume",
            post(handlers::handle_upload_resume),
        )
        // Resume uploads exceed axum's default 2 MiB body cap.
        .layer(DefaultBodyLimit::max(handlers::MAX_UPLOAD_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::memory::MemoryStore;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .build();
        build_router(AppState {
            store: Arc::new(MemoryStore::seeded()),
            s3: aws_sdk_s3::Client::from_conf(s3_config),
            config: Config {
                database_url: None,
                s3_bucket: "test-bucket".to_string(),
                s3_endpoint: "http://localhost:9000".to_string(),
                aws_access_key_id: "test".to_string(),
                aws_secret_access_key: "test".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        })
    }

    fn get_request(uri: &str, viewer: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(viewer) = viewer {
            builder = builder.header("x-user-id", viewer);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let res = test_app().oneshot(get_request("/health", None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn read_view_is_public() {
        let res = test_app()
            .oneshot(get_request("/api/v1/profiles/1", None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let res = test_app()
            .oneshot(get_request("/api/v1/profiles/999", Some("999")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_form_is_owner_only() {
        let res = test_app()
            .oneshot(get_request("/api/v1/profiles/1/edit", None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = test_app()
            .oneshot(get_request("/api/v1/profiles/1/edit", Some("2")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = test_app()
            .oneshot(get_request("/api/v1/profiles/1/edit", Some("1")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn owner_can_save_field_changes() {
        let req = Request::builder()
            .method(Method::PUT)
            .uri("/api/v1/profiles/1")
            .header("x-user-id", "1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"changes": [{"field": "title", "value": "Head of Product"}]}"#,
            ))
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn save_with_unknown_field_is_rejected() {
        let req = Request::builder()
            .method(Method::PUT)
            .uri("/api/v1/profiles/1")
            .header("x-user-id", "1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"changes": [{"field": "id", "value": "u9"}]}"#,
            ))
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
