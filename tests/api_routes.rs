#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use todolist::db::db::DB_FILE_NAME;
    use todolist::server::{router, store::Store, AppState};
    use tower::ServiceExt;

    struct ApiTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        app: Router,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join(DB_FILE_NAME);
            let store = Store::open(&db_path).unwrap();
            ApiTestContext {
                _temp_dir: temp_dir,
                db_path,
                app: router(AppState::new(store)),
            }
        }
    }

    impl ApiTestContext {
        async fn call(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
            let mut request = Request::builder().method(method).uri(uri);
            if body.is_some() {
                request = request.header(header::CONTENT_TYPE, "application/json");
            }
            let request = request.body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty)).unwrap();

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
            (status, value)
        }

        async fn create(&self, title: &str) -> Value {
            let (status, body) = self
                .call(Method::POST, "/api/todos", Some(&json!({ "title": title }).to_string()))
                .await;
            assert_eq!(status, StatusCode::CREATED);
            body["data"].clone()
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_list_empty(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::GET, "/api/todos", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["count"], 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_todo(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::POST, "/api/todos", Some(r#"{"title":"  Buy milk  "}"#)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Todo created successfully");
        assert_eq!(body["data"]["title"], "Buy milk");
        assert_eq!(body["data"]["completed"], false);
        assert!(body["data"]["id"].as_i64().unwrap() > 0);
        assert!(body["data"]["created_at"].is_string());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_rejects_bad_titles(ctx: &mut ApiTestContext) {
        let cases = [
            (r#"{"title":"   "}"#, "Title is required and cannot be empty"),
            (r#"{}"#, "Title is required and cannot be empty"),
            (r#"{"title":42}"#, "Title is required and cannot be empty"),
        ];
        for (payload, message) in cases {
            let (status, body) = ctx.call(Method::POST, "/api/todos", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], message);
        }

        let long = json!({ "title": "a".repeat(256) }).to_string();
        let (status, body) = ctx.call(Method::POST, "/api/todos", Some(&long)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Title cannot exceed 255 characters");

        let (_, list) = ctx.call(Method::GET, "/api/todos", None).await;
        assert_eq!(list["count"], 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_without_body(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::POST, "/api/todos", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Title is required and cannot be empty");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_with_malformed_json(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::POST, "/api/todos", Some("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_list_newest_first_with_count(ctx: &mut ApiTestContext) {
        ctx.create("A").await;
        ctx.create("B").await;
        ctx.create("C").await;

        let (status, body) = ctx.call(Method::GET, "/api/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);

        let titles: Vec<&str> = body["data"].as_array().unwrap().iter().map(|t| t["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_toggle_todo(ctx: &mut ApiTestContext) {
        let created = ctx.create("Walk the dog").await;
        let uri = format!("/api/todos/{}", created["id"]);

        let (status, body) = ctx.call(Method::PATCH, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Todo updated successfully");
        assert_eq!(body["data"]["completed"], true);
        assert_eq!(body["data"]["id"], created["id"]);
        assert_eq!(body["data"]["created_at"], created["created_at"]);

        let (_, body) = ctx.call(Method::PATCH, &uri, None).await;
        assert_eq!(body["data"]["completed"], false);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_toggle_unknown_and_invalid_ids(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::PATCH, "/api/todos/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Todo not found");

        for id in ["abc", "0", "-1", "1.5"] {
            let (status, body) = ctx.call(Method::PATCH, &format!("/api/todos/{}", id), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "id {}", id);
            assert_eq!(body["message"], "Invalid todo ID");
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_undecodable_id_gets_envelope(ctx: &mut ApiTestContext) {
        for method in [Method::PATCH, Method::DELETE] {
            let (status, body) = ctx.call(method.clone(), "/api/todos/%FF", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "method {}", method);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], "Invalid todo ID");
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_oversized_body_gets_envelope(ctx: &mut ApiTestContext) {
        // Above axum's default 2 MB body limit
        let title = "a".repeat(3 * 1024 * 1024);
        let payload = json!({ "title": title }).to_string();
        let (status, body) = ctx.call(Method::POST, "/api/todos", Some(&payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_storage_failure_is_500(ctx: &mut ApiTestContext) {
        let created = ctx.create("Doomed").await;
        let uri = format!("/api/todos/{}", created["id"]);
        rusqlite::Connection::open(&ctx.db_path)
            .unwrap()
            .execute("DROP TABLE todos", [])
            .unwrap();

        let cases = [
            (Method::GET, "/api/todos".to_string(), None, "Failed to fetch todos"),
            (Method::POST, "/api/todos".to_string(), Some(r#"{"title":"New"}"#), "Failed to create todo"),
            (Method::PATCH, uri.clone(), None, "Failed to update todo"),
            (Method::DELETE, uri, None, "Failed to delete todo"),
        ];
        for (method, uri, payload, message) in cases {
            let (status, body) = ctx.call(method.clone(), &uri, payload).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], message);
            assert!(body["error"].as_str().unwrap().contains("no such table"));
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_delete_todo(ctx: &mut ApiTestContext) {
        let created = ctx.create("Temporary").await;
        let uri = format!("/api/todos/{}", created["id"]);

        let (status, body) = ctx.call(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Todo deleted successfully");
        assert!(body.get("data").is_none());

        let (status, body) = ctx.call(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Todo not found");

        let (status, _) = ctx.call(Method::DELETE, "/api/todos/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_unknown_route(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::GET, "/api/unknown", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Endpoint not found");
        assert_eq!(body["path"], "/api/unknown");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_unsupported_method(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::PUT, "/api/todos", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Endpoint not found");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_health(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.call(Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_cors_allows_any_origin(ctx: &mut ApiTestContext) {
        let request = Request::builder()
            .uri("/api/todos")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = ctx.app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    }
}
