//! Integration tests for the HTTP surface: the browser test page, the JSON
//! run trigger and the completion-log endpoints, driven through the full
//! router the way production builds it.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use std::fs;
use std::path::Path;
use tower::ServiceExt;

use youtube_automation::app::create_app;
use youtube_automation::config::settings::AppConfig;
use youtube_automation::state::AppState;

/// Build the production router against a throwaway pipeline directory.
///
/// `python_bin` stands in for the interpreter: `cat` makes each step print
/// its own script file, `echo` makes it print the script name, `false`
/// makes every step fail silently.
fn build_test_app(dir: &Path, python_bin: &str) -> Router {
    let config = AppConfig {
        server_port: 0,
        pipeline_dir: dir.to_path_buf(),
        log_file: dir.join("automation.log"),
        python_bin: python_bin.to_string(),
    };
    create_app(AppState::new(config))
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path(), "echo");

    let response = get(app, "/api/v1/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

// ---------------------------------------------------------------------------
// Test: GET /test renders every step, in order, escaped
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_page_renders_steps_in_order_and_escaped() {
    let dir = tempfile::tempdir().unwrap();
    // `cat <script>` prints the script file itself, so each file's contents
    // become that step's blob.
    fs::write(dir.path().join("content_pipeline.py"), "<b>bold & raw</b>").unwrap();
    fs::write(dir.path().join("runway_generator.py"), "rendering done").unwrap();
    fs::write(dir.path().join("youtube_uploader.py"), "uploaded 1 video").unwrap();
    let app = build_test_app(dir.path(), "cat");

    let response = get(app, "/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("<h1>YouTube Automation Pipeline Test</h1>"));

    let s1 = page.find("Step 1: Running Content Pipeline...").unwrap();
    let s2 = page.find("Step 2: Running Runway Generator...").unwrap();
    let s3 = page.find("Step 3: Running YouTube Uploader...").unwrap();
    assert!(s1 < s2 && s2 < s3);
    assert!(page.contains("Test Complete"));

    // Captured markup must come out escaped, never as live tags.
    assert!(page.contains("&lt;b&gt;bold &amp; raw&lt;/b&gt;"));
    assert!(!page.contains("<b>bold"));
    assert!(page.contains("rendering done"));
    assert!(page.contains("uploaded 1 video"));
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/pipeline/run reports all steps and appends one line
// ---------------------------------------------------------------------------

#[tokio::test]
async fn run_reports_all_steps_and_appends_completion_line() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path(), "echo");

    let response = post(app, "/api/v1/pipeline/run").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");

    let steps = json["data"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["label"], "Content Pipeline");
    assert_eq!(steps[1]["label"], "Runway Generator");
    assert_eq!(steps[2]["label"], "YouTube Uploader");
    assert!(steps.iter().all(|s| s["exit_code"] == 0));

    let log = fs::read_to_string(dir.path().join("automation.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - Execution completed"));

    // `YYYY-MM-DD HH:MM:SS` prefix.
    let stamp = lines[0].split(" - ").next().unwrap();
    assert_eq!(stamp.len(), 19);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[13..14], ":");
}

// ---------------------------------------------------------------------------
// Test: failing steps neither stop the run nor suppress the completion line
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failing_steps_do_not_stop_the_run_or_the_log_append() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path(), "false");

    let response = post(app, "/api/v1/pipeline/run").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let steps = json["data"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert!(steps.iter().all(|s| s["exit_code"] == 1));

    let log = fs::read_to_string(dir.path().join("automation.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/pipeline/log
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tail_log_404_when_no_run_has_happened() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path(), "echo");

    let response = get(app, "/api/v1/pipeline/log").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn tail_log_returns_completion_lines_after_runs() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path(), "echo");

    let run = post(app.clone(), "/api/v1/pipeline/run").await;
    assert_eq!(run.status(), StatusCode::OK);
    let run = post(app.clone(), "/api/v1/pipeline/run").await;
    assert_eq!(run.status(), StatusCode::OK);

    let response = get(app, "/api/v1/pipeline/log?lines=1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let lines = json["data"]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0]
            .as_str()
            .unwrap()
            .ends_with(" - Execution completed")
    );
}

// ---------------------------------------------------------------------------
// Test: unknown routes fall through to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path(), "echo");

    let response = get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
