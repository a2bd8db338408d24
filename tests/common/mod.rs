#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_gate::{GateConfig, IdentityStrategy};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ALLOWED_HTML: &str = "<html><body>Welcome</body></html>";
pub const FORBIDDEN_HTML: &str = "<html><body>403 Forbidden</body></html>";
pub const EXPECTED_DOMAIN: &str = "expected-domain";

/// A content root holding both gate artifacts.
pub fn content_root() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    std::fs::write(dir.path().join("static.html"), ALLOWED_HTML).expect("write static.html");
    std::fs::write(dir.path().join("403.html"), FORBIDDEN_HTML).expect("write 403.html");
    dir
}

pub fn config_for(root: &TempDir, strategy: IdentityStrategy) -> GateConfig {
    let mut config = GateConfig::default();
    config.gate.expected_domain = Some(EXPECTED_DOMAIN.to_string());
    config.identity.strategy = strategy;
    config.content.root = root.path().to_string_lossy().into_owned();
    config
}

pub async fn get_root(app: Router, headers: &[(&str, &str)]) -> (StatusCode, String) {
    let mut builder = Request::builder().method("GET").uri("/");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).expect("failed to build request");

    let response = app.oneshot(request).await.expect("failed to make request");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, String::from_utf8(body.to_vec()).expect("body is utf-8"))
}

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
