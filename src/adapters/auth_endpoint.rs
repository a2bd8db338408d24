use crate::domain::model::AuthMePayload;
use crate::domain::ports::IdentitySource;
use crate::utils::error::{GateError, Result};
use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_AUTH_PATH: &str = "/.auth/me";

/// Asks an authentication introspection endpoint who the caller is.
///
/// The caller's credential headers (session cookie, bearer token) are forwarded
/// so the endpoint can resolve the same session the request belongs to. The
/// endpoint URL comes from configuration and never from the request's `Host`.
#[derive(Debug, Clone)]
pub struct AuthEndpointIdentitySource {
    client: Client,
    endpoint: Url,
    forward_headers: Vec<HeaderName>,
    timeout: Duration,
}

impl AuthEndpointIdentitySource {
    pub fn new(
        base_url: &str,
        path: &str,
        forward_headers: &[String],
        timeout: Duration,
    ) -> Result<Self> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| GateError::InvalidConfigValueError {
                field: "identity.auth_path".to_string(),
                value: format!("{}{}", base_url, path),
                reason: format!("Invalid URL format: {}", e),
            })?;

        let forward_headers = forward_headers
            .iter()
            .map(|name| {
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    GateError::InvalidConfigValueError {
                        field: "identity.forward_headers".to_string(),
                        value: name.clone(),
                        reason: e.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            forward_headers,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl IdentitySource for AuthEndpointIdentitySource {
    fn name(&self) -> &'static str {
        "auth_endpoint"
    }

    async fn acquire(&self, headers: &HeaderMap) -> Result<Option<String>> {
        let mut request = self.client.get(self.endpoint.clone());
        for name in &self.forward_headers {
            for value in headers.get_all(name) {
                request = request.header(name.clone(), value.clone());
            }
        }

        tracing::debug!("Requesting identity from: {}", self.endpoint);
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GateError::TimeoutError {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                GateError::HttpError(e)
            }
        })?;

        let status = response.status();
        tracing::debug!("Auth endpoint response status: {}", status);
        if !status.is_success() {
            return Err(GateError::AcquisitionError {
                reason: status
                    .canonical_reason()
                    .map(|reason| format!("{} {}", status.as_u16(), reason))
                    .unwrap_or_else(|| status.as_u16().to_string()),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                GateError::TimeoutError {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                GateError::HttpError(e)
            }
        })?;

        let payload: AuthMePayload =
            serde_json::from_slice(&body).map_err(|e| GateError::ParseError {
                message: format!("expected JSON with a string 'user_id': {}", e),
            })?;

        Ok(payload.into_user_id().filter(|id| !id.is_empty()))
    }
}
