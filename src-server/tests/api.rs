use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{json, Value};
use tower::ServiceExt;

use taskboard_server::config::ServerConfig;
use taskboard_server::{router, AppState};

fn config_with_latency(latency: Duration) -> ServerConfig {
    ServerConfig {
        latency,
        ..ServerConfig::default()
    }
}

#[fixture]
fn app() -> Router {
    let config = config_with_latency(Duration::ZERO);
    router(AppState::in_memory(&config), &config)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, task) = send(app, request(Method::POST, "/tasks", Some(body))).await;
    assert_eq!(status, StatusCode::CREATED);
    task
}

#[rstest]
#[tokio::test]
async fn empty_store_lists_nothing(app: Router) {
    let (status, body) = send(&app, request(Method::GET, "/tasks", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[rstest]
#[tokio::test]
async fn create_assigns_id_and_defaults_status(app: Router) {
    let task = create(&app, json!({"title": "Write docs"})).await;
    assert_eq!(task["title"], "Write docs");
    assert_eq!(task["status"], "todo");
    assert_eq!(task["description"], "");
    let id = task["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(!id.starts_with("temp-"));
    assert!(task.get("isPending").is_none());

    let (_, listed) = send(&app, request(Method::GET, "/tasks", None)).await;
    assert_eq!(listed, json!([task]));
}

#[rstest]
#[tokio::test]
async fn list_keeps_insertion_order(app: Router) {
    for title in ["A", "B", "C"] {
        create(&app, json!({"title": title, "status": "in-progress"})).await;
    }
    let (_, listed) = send(&app, request(Method::GET, "/tasks", None)).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A", "B", "C"]);
}

#[rstest]
#[case(json!({"title": "   "}))]
#[case(json!({"description": "no title"}))]
#[case(json!({"title": "x", "status": "blocked"}))]
#[tokio::test]
async fn invalid_create_is_rejected(app: Router, #[case] body: Value) {
    let (status, error) = send(&app, request(Method::POST, "/tasks", Some(body))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[rstest]
#[tokio::test]
async fn malformed_json_is_rejected(app: Router) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, error) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[rstest]
#[tokio::test]
async fn get_returns_one_task(app: Router) {
    let task = create(&app, json!({"title": "A"})).await;
    let uri = format!("/tasks/{}", task["id"].as_str().unwrap());
    let (status, fetched) = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, task);
}

#[rstest]
#[case(Method::GET, None)]
#[case(Method::PUT, Some(json!({"status": "done"})))]
#[case(Method::DELETE, None)]
#[tokio::test]
async fn unknown_id_is_not_found(app: Router, #[case] method: Method, #[case] body: Option<Value>) {
    let (status, error) = send(&app, request(method, "/tasks/missing", body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn unknown_id_wins_over_bad_update_body(app: Router) {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/tasks/missing")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, error) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn update_merges_and_keeps_id(app: Router) {
    let task = create(&app, json!({"title": "A", "description": "first"})).await;
    let id = task["id"].as_str().unwrap();
    let uri = format!("/tasks/{id}");

    let (status, updated) = send(
        &app,
        request(Method::PUT, &uri, Some(json!({"id": "hijack", "status": "done"}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["status"], "done");
    assert_eq!(updated["title"], "A");
    assert_eq!(updated["description"], "first");

    let (_, fetched) = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test]
async fn update_rejects_blank_title(app: Router) {
    let task = create(&app, json!({"title": "A"})).await;
    let uri = format!("/tasks/{}", task["id"].as_str().unwrap());
    let (status, error) = send(&app, request(Method::PUT, &uri, Some(json!({"title": ""})))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"][0]["field"], "title");
}

#[rstest]
#[tokio::test]
async fn delete_removes_task(app: Router) {
    let task = create(&app, json!({"title": "A"})).await;
    let uri = format!("/tasks/{}", task["id"].as_str().unwrap());

    let (status, body) = send(&app, request(Method::DELETE, &uri, None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, request(Method::GET, &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn login_with_demo_account_sets_cookie(app: Router) {
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/auth/login",
            Some(json!({"email": "test@example.com", "password": "123pass456"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("session_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=604800"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let session: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(session["user"]["email"], "test@example.com");
    assert!(!session["token"].as_str().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn login_with_wrong_password_is_unauthorized(app: Router) {
    let (status, error) = send(
        &app,
        request(
            Method::POST,
            "/auth/login",
            Some(json!({"email": "test@example.com", "password": "wrongpassword"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["code"], "INVALID_CREDENTIALS");
}

#[rstest]
#[tokio::test]
async fn logout_expires_cookie(app: Router) {
    let response = app
        .clone()
        .oneshot(request(Method::POST, "/auth/logout", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[rstest]
#[tokio::test]
async fn health_reports_ok(app: Router) {
    let (status, body) = send(&app, request(Method::GET, "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn configured_latency_delays_responses() {
    let config = config_with_latency(Duration::from_millis(60));
    let app = router(AppState::in_memory(&config), &config);

    let started = Instant::now();
    let (status, _) = send(&app, request(Method::GET, "/tasks", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(60));
}

#[tokio::test]
async fn static_dir_serves_index_for_unknown_paths() {
    let dir = std::env::temp_dir().join(format!("taskboard-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>taskboard</html>").unwrap();

    let config = ServerConfig {
        latency: Duration::ZERO,
        static_dir: Some(dir.clone()),
        ..ServerConfig::default()
    };
    let app = router(AppState::in_memory(&config), &config);

    let response = app.oneshot(request(Method::GET, "/dashboard", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<html>taskboard</html>");

    std::fs::remove_dir_all(dir).ok();
}

#[tokio::test]
async fn static_assets_skip_the_latency() {
    let dir = std::env::temp_dir().join(format!("taskboard-assets-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>taskboard</html>").unwrap();
    std::fs::write(dir.join("styles.css"), "body {}").unwrap();

    let config = ServerConfig {
        latency: Duration::from_secs(5),
        static_dir: Some(dir.clone()),
        ..ServerConfig::default()
    };
    let app = router(AppState::in_memory(&config), &config);

    let started = Instant::now();
    for uri in ["/styles.css", "/dashboard"] {
        let response = app.clone().oneshot(request(Method::GET, uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert!(started.elapsed() < Duration::from_secs(1));

    std::fs::remove_dir_all(dir).ok();
}
