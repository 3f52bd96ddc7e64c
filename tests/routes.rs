#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use taskmesh::api::UsersClient;
    use taskmesh::db::db::Db;
    use taskmesh::server;
    use test_context::{test_context, AsyncTestContext};
    use tower::ServiceExt;

    struct AppTestContext {
        app: Router,
    }

    impl AsyncTestContext for AppTestContext {
        async fn setup() -> Self {
            AppTestContext {
                app: server::combined_app(&Db::in_memory().unwrap()),
            }
        }
    }

    impl AppTestContext {
        async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let request = Request::builder().method(method).uri(uri);
            let request = match body {
                Some(body) => request
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
                None => request.body(Body::empty()).unwrap(),
            };

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
            (status, value)
        }
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_project_lifecycle(ctx: &mut AppTestContext) {
        let (status, created) = ctx
            .send(Method::POST, "/projects", Some(json!({"title": "Apollo", "description": "Moon"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();

        let (status, fetched) = ctx.send(Method::GET, &format!("/projects/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, json!({"id": id, "title": "Apollo", "description": "Moon"}));

        let (status, updated) = ctx
            .send(Method::PUT, &format!("/projects/{id}"), Some(json!({"title": "Artemis", "description": "Moon again"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Artemis");

        let (status, list) = ctx.send(Method::GET, "/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, _) = ctx.send(Method::DELETE, &format!("/projects/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = ctx.send(Method::DELETE, &format!("/projects/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = ctx.send(Method::GET, &format!("/projects/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Project not found"}));
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_user_name_endpoint(ctx: &mut AppTestContext) {
        let (status, user) = ctx
            .send(Method::POST, "/users", Some(json!({"name": "Alice", "email": "alice@example.com"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        let id = user["id"].as_i64().unwrap();

        let (status, name) = ctx.send(Method::GET, &format!("/users/{id}/name"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(name, json!({"name": "Alice"}));

        let (status, name) = ctx.send(Method::GET, "/users/999/name", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(name, json!({"name": "Unknown"}));

        let (status, body) = ctx.send(Method::GET, "/users/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_nameless_user_reads_as_unknown(ctx: &mut AppTestContext) {
        let (status, user) = ctx.send(Method::POST, "/users", Some(json!({"email": "x@example.com"}))).await;
        assert_eq!(status, StatusCode::OK);
        let user_id = user["id"].as_i64().unwrap();

        let (_, name) = ctx.send(Method::GET, &format!("/users/{user_id}/name"), None).await;
        assert_eq!(name, json!({"name": "Unknown"}));

        let (_, task) = ctx
            .send(Method::POST, "/tasks", Some(json!({"title": "t", "status": "TODO", "userId": user_id})))
            .await;
        let task_id = task["id"].as_i64().unwrap();
        let (_, enriched) = ctx.send(Method::GET, &format!("/tasks/{task_id}/with-username"), None).await;
        assert_eq!(enriched["username"], "Unknown");
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_task_with_username(ctx: &mut AppTestContext) {
        let (_, user) = ctx.send(Method::POST, "/users", Some(json!({"name": "Alice", "email": "a@x"}))).await;
        let user_id = user["id"].as_i64().unwrap();

        let (status, task) = ctx
            .send(
                Method::POST,
                "/tasks",
                Some(json!({"title": "Write", "description": "docs", "status": "TODO", "projectId": 1, "userId": user_id})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let task_id = task["id"].as_i64().unwrap();
        assert_eq!(task["projectId"], 1);

        let (status, enriched) = ctx.send(Method::GET, &format!("/tasks/{task_id}/with-username"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(enriched["username"], "Alice");
        assert_eq!(enriched["userId"], user_id);
        assert_eq!(enriched["title"], "Write");
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_task_with_unknown_owner(ctx: &mut AppTestContext) {
        let (_, task) = ctx
            .send(Method::POST, "/tasks", Some(json!({"title": "Orphan", "status": "TODO", "userId": 999})))
            .await;
        let task_id = task["id"].as_i64().unwrap();

        let (status, enriched) = ctx.send(Method::GET, &format!("/tasks/{task_id}/with-username"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(enriched["username"], "Unknown");

        let (status, body) = ctx.send(Method::GET, "/tasks/12345/with-username", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Task not found"}));
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_task_listings(ctx: &mut AppTestContext) {
        let (_, bob) = ctx.send(Method::POST, "/users", Some(json!({"name": "Bob", "email": "b@x"}))).await;
        let bob_id = bob["id"].as_i64().unwrap();

        for (title, project) in [("one", 1), ("two", 2), ("three", 1)] {
            ctx.send(
                Method::POST,
                "/tasks",
                Some(json!({"title": title, "status": "TODO", "projectId": project, "userId": bob_id})),
            )
            .await;
        }

        let (status, by_project) = ctx.send(Method::GET, "/tasks/project/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<&str> = by_project.as_array().unwrap().iter().map(|t| t["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["one", "three"]);

        let (status, empty) = ctx.send(Method::GET, "/tasks/project/42", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(empty, json!([]));

        let (status, enriched) = ctx.send(Method::GET, "/tasks/with-usernames", None).await;
        assert_eq!(status, StatusCode::OK);
        let enriched = enriched.as_array().unwrap();
        assert_eq!(enriched.len(), 3);
        assert!(enriched.iter().all(|t| t["username"] == "Bob"));
        assert_eq!(enriched[0]["title"], "one");
        assert_eq!(enriched[2]["title"], "three");
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_task_update_and_delete(ctx: &mut AppTestContext) {
        let (_, task) = ctx
            .send(Method::POST, "/tasks", Some(json!({"title": "Draft", "status": "TODO", "projectId": 3})))
            .await;
        let id = task["id"].as_i64().unwrap();

        let (status, updated) = ctx
            .send(Method::PUT, &format!("/tasks/{id}"), Some(json!({"title": "Final", "description": "x", "status": "DONE"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "DONE");
        assert_eq!(updated["projectId"], Value::Null);

        let (status, _) = ctx
            .send(Method::PUT, "/tasks/999", Some(json!({"title": "Nope", "status": "TODO"})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = ctx.send(Method::DELETE, &format!("/tasks/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = ctx.send(Method::DELETE, &format!("/tasks/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = ctx.send(Method::GET, &format!("/tasks/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tasks_app_with_unreachable_users_service() {
        let resolver = Arc::new(UsersClient::new("http://127.0.0.1:1", std::time::Duration::from_millis(200)).unwrap());
        let ctx = AppTestContext {
            app: server::tasks_app(&Db::in_memory().unwrap(), resolver),
        };

        let (status, task) = ctx
            .send(Method::POST, "/tasks", Some(json!({"title": "Still works", "status": "TODO", "userId": 100})))
            .await;
        assert_eq!(status, StatusCode::OK);
        let id = task["id"].as_i64().unwrap();

        let (status, enriched) = ctx.send(Method::GET, &format!("/tasks/{id}/with-username"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(enriched["username"], "Unknown");
    }
}
