#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tokio::sync::broadcast;
use tower::ServiceExt;

use mealshare_api::config::ServerConfig;
use mealshare_api::router::build_app_router;
use mealshare_api::state::AppState;
use mealshare_events::{EventBus, SiteEvent};

const BOUNDARY: &str = "mealshare-test-boundary";

/// Build a test `ServerConfig` with safe defaults and no listing delay.
pub fn test_config(public_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        public_dir: public_dir.to_path_buf(),
        listing_delay_ms: 0,
        listing_route: "/meals".to_string(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// Everything an integration test needs to drive and inspect the app.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    /// Receives every event published on the app's bus.
    pub events: broadcast::Receiver<SiteEvent>,
    /// Keeps the public directory alive for the duration of the test.
    pub public_dir: TempDir,
}

impl TestApp {
    /// Path on disk where an image with this file name would be stored.
    pub fn image_path(&self, file_name: &str) -> std::path::PathBuf {
        self.public_dir.path().join("images").join(file_name)
    }

    /// Number of files in the images directory (0 if it does not exist).
    pub fn image_count(&self) -> usize {
        std::fs::read_dir(self.public_dir.path().join("images"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

/// Build the full application router over `pool` with a fresh temporary
/// public directory.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    build_test_app_with(pool, |_| {})
}

/// Like [`build_test_app`] but lets the caller adjust the config first.
pub fn build_test_app_with(pool: SqlitePool, tweak: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let public_dir = tempfile::tempdir().expect("create temp public dir");
    let mut config = test_config(public_dir.path());
    tweak(&mut config);

    let event_bus = Arc::new(EventBus::default());
    let events = event_bus.subscribe();
    let state = AppState::new(pool, config, event_bus);
    let router = build_app_router(state.clone());

    TestApp {
        router,
        state,
        events,
        public_dir,
    }
}

/// Send a GET request.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a multipart POST request built by [`MultipartForm`].
pub async fn post_multipart(app: &Router, uri: &str, form: MultipartForm) -> Response<Body> {
    let request = Request::post(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(form.finish()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// Fake image payload.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n-not-really-a-png";

/// A complete, valid share form for `title`.
pub fn valid_form(title: &str) -> MultipartForm {
    MultipartForm::default()
        .text("name", "Maria Rossi")
        .text("email", "maria@example.com")
        .text("title", title)
        .text("summary", "Quick and tasty.")
        .text("instructions", "Boil water.\nAdd <b>pasta</b> & salt.")
        .file("image", "photo.png", PNG_BYTES)
}
