use crate::core::gate::IdentityGate;
use crate::core::{Decision, Storage};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// `GET /`: serves the allowed page with 200 or the forbidden page with 403.
///
/// If the page itself cannot be read the client gets a bare 500; the cause
/// only goes to the log.
pub async fn gated_page<S: Storage + 'static>(
    State(gate): State<Arc<IdentityGate<S>>>,
    headers: HeaderMap,
) -> Response {
    match gate.respond(&headers).await {
        Ok(page) => {
            let status = match page.decision {
                Decision::Allowed => StatusCode::OK,
                Decision::Forbidden => StatusCode::FORBIDDEN,
            };
            (status, [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], page.body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load gate artifact");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub async fn health_check() -> &'static str {
    "ok"
}
