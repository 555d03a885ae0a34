//! HTTP server for the notes service.
//!
//! Exposes the in-memory note store as a JSON REST resource. Every response
//! body carries a `success` flag; failures add a human-readable `message`
//! and map to 400 (bad input), 404 (unknown note), or 500.

pub mod config;
pub mod error;
pub mod handler;
pub mod payload;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::NotesServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use notes_store::InMemoryNoteStore;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn app() -> Router {
        NotesServer::new(ServerConfig::default()).router().unwrap()
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn create(app: &Router, title: &str, content: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": title, "content": content})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["note"].clone()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "notes-server");
        assert_eq!(body["notesRoot"], "/api/notes");
    }

    #[tokio::test]
    async fn banner_can_be_disabled() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Server is Running!");

        let config = ServerConfig { expose_banner: false, ..Default::default() };
        let quiet = NotesServer::new(config).router().unwrap();
        let (status, body) = send(&quiet, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (status, body) = send(&app(), Method::GET, "/api/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "message": "Route not found"}));
    }

    #[tokio::test]
    async fn note_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": "A", "content": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Note created successfully");
        assert_eq!(body["note"]["id"], 1);
        assert_eq!(body["note"]["createdAt"], body["note"]["updatedAt"]);

        let (status, body) =
            send(&app, Method::PUT, "/api/notes/1", Some(json!({"content": "C"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Note updated successfully");
        assert_eq!(body["note"]["title"], "A");
        assert_eq!(body["note"]["content"], "C");

        let (status, body) = send(&app, Method::DELETE, "/api/notes/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Note deleted successfully");
        assert_eq!(body["deletedNote"]["id"], 1);

        let (status, body) = send(&app, Method::GET, "/api/notes/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "message": "Note not found"}));
    }

    #[tokio::test]
    async fn list_returns_count_and_order() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/notes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "count": 0, "notes": []}));

        create(&app, "first", "1").await;
        create(&app, "second", "2").await;

        let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["notes"][0]["title"], "first");
        assert_eq!(body["notes"][1]["title"], "second");
    }

    #[tokio::test]
    async fn get_by_id() {
        let app = app();
        let created = create(&app, "  padded  ", " text ").await;
        assert_eq!(created["title"], "padded");

        let (status, body) = send(&app, Method::GET, "/api/notes/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["note"], created);
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let app = app();
        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&app, method, "/api/notes/abc", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], "Invalid note ID");
        }
        let (status, _) =
            send(&app, Method::PUT, "/api/notes/abc", Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_requires_both_fields() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/notes",
            Some(json!({"title": "A", "content": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Please provide both title and content");

        let (status, _) = send(&app, Method::POST, "/api/notes", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = app();
        let (status, body) =
            send(&app, Method::POST, "/api/notes", Some(json!({"title": 5, "content": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/notes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_requires_a_field() {
        let app = app();
        create(&app, "A", "B").await;
        let (status, body) = send(&app, Method::PUT, "/api/notes/1", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please provide title or content to update");
    }

    #[tokio::test]
    async fn update_and_delete_missing_note() {
        let app = app();
        let (status, _) =
            send(&app, Method::PUT, "/api/notes/7", Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::DELETE, "/api/notes/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn clear_all_resets_ids() {
        let app = app();
        create(&app, "a", "1").await;
        create(&app, "b", "2").await;

        let (status, body) = send(&app, Method::DELETE, "/api/notes/clear/all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Cleared 2 notes");
        assert_eq!(body["deletedCount"], 2);

        let (_, body) = send(&app, Method::GET, "/api/notes", None).await;
        assert_eq!(body["count"], 0);

        let note = create(&app, "again", "3").await;
        assert_eq!(note["id"], 1);
    }

    #[tokio::test]
    async fn custom_root_and_shared_store() {
        let store = Arc::new(InMemoryNoteStore::new());
        let config = ServerConfig { notes_root: "/v2/notes".into(), ..Default::default() };
        let app = NotesServer::with_store(config, store.clone()).router().unwrap();

        let (status, _) = send(
            &app,
            Method::POST,
            "/v2/notes",
            Some(json!({"title": "t", "content": "c"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(notes_store::NoteStore::len(&*store).unwrap(), 1);

        let (status, _) = send(&app, Method::GET, "/api/notes", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn ids_are_read_like_parse_int() {
        let app = app();
        let created = create(&app, "A", "B").await;
        for uri in ["/api/notes/1abc", "/api/notes/1.5", "/api/notes/%201"] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["note"], created);
        }
    }

    #[tokio::test]
    async fn undecodable_id_is_json_bad_request() {
        let app = app();
        create(&app, "A", "B").await;
        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&app, method, "/api/notes/%FF", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"success": false, "message": "Invalid note ID"}));
        }
        let (status, body) =
            send(&app, Method::PUT, "/api/notes/%FF", Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid note ID");
    }

    #[tokio::test]
    async fn wrong_method_is_json_405() {
        let app = app();
        for (method, uri) in [
            (Method::PATCH, "/api/notes/1"),
            (Method::GET, "/api/notes/clear/all"),
            (Method::DELETE, "/api/notes"),
        ] {
            let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
            assert!(response.headers().contains_key(header::ALLOW), "{uri}");
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({"success": false, "message": "Method not allowed"}));
        }
    }

    #[tokio::test]
    async fn trailing_slash_root_serves_collection() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/notes/",
            Some(json!({"title": "A", "content": "B"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::GET, "/api/notes/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["notes"][0]["title"], "A");
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/notes")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }
}
