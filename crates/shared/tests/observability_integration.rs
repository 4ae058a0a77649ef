//! 可观测性模块集成测试
//!
//! 测试 metrics 记录函数和 HTTP 中间件的核心行为。

mod metrics_tests {
    use employee_shared::observability::metrics::{
        record_employee_operation, record_http_request,
    };

    /// 未安装 recorder 时记录指标不应 panic（metrics crate 使用 noop recorder）
    #[test]
    fn test_record_http_request_without_recorder() {
        record_http_request("GET", "/api/employees", 200, 0.05);
        record_http_request("POST", "/api/employees", 200, 0.12);
        record_http_request("PUT", "/api/employees/{id}", 200, 0.08);
        record_http_request("DELETE", "/api/employees/{id}", 200, 0.03);
    }

    #[test]
    fn test_record_employee_operation_without_recorder() {
        for op in ["list", "get", "create", "update", "delete"] {
            record_employee_operation(op, "ok");
        }
        record_employee_operation("create", "error");
    }
}

mod middleware_tests {
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use employee_shared::observability::middleware::{
        REQUEST_ID_HEADER, RequestId, http_tracing, request_id,
    };
    use tower::ServiceExt;

    async fn echo_request_id(Extension(id): Extension<RequestId>) -> String {
        id.as_str().to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/echo", get(echo_request_id))
            .layer(middleware::from_fn(http_tracing))
            .layer(middleware::from_fn(request_id))
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/echo")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"req-123");
    }

    #[tokio::test]
    async fn test_request_id_is_generated_when_missing() {
        let response = app()
            .oneshot(Request::builder().uri("/echo").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let header = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string();
        assert!(uuid_like(&header), "应生成 UUID: {header}");
    }

    #[tokio::test]
    async fn test_http_tracing_passes_status_through() {
        let response = app()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn uuid_like(s: &str) -> bool {
        s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
    }
}
