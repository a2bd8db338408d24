use crate::core::{ConfigProvider, Decision, IdentitySource, Storage};
use crate::domain::services::{extract_domain, is_authorized};
use crate::utils::error::Result;
use axum::http::HeaderMap;
use std::sync::Arc;

/// The page selected for a request, ready to be written to the response.
#[derive(Debug, Clone)]
pub struct GatePage {
    pub decision: Decision,
    pub body: Vec<u8>,
}

pub struct IdentityGate<S: Storage> {
    source: Arc<dyn IdentitySource>,
    storage: S,
    expected_domain: String,
    allowed_file: String,
    forbidden_file: String,
}

impl<S: Storage> IdentityGate<S> {
    pub fn new<C: ConfigProvider>(source: Arc<dyn IdentitySource>, storage: S, config: &C) -> Self {
        Self {
            source,
            storage,
            expected_domain: config.expected_domain().to_string(),
            allowed_file: config.allowed_file().to_string(),
            forbidden_file: config.forbidden_file().to_string(),
        }
    }

    /// Resolves the caller's identity and decides whether the domain matches.
    ///
    /// Acquisition errors never escape: they are logged and become `Forbidden`.
    pub async fn decide(&self, headers: &HeaderMap) -> Decision {
        let identity = match self.source.acquire(headers).await {
            Ok(identity) => identity,
            Err(e) if e.is_acquisition_failure() => {
                tracing::warn!(
                    strategy = self.source.name(),
                    error = %e,
                    "Identity acquisition failed"
                );
                None
            }
            Err(e) => {
                tracing::error!(
                    strategy = self.source.name(),
                    error = %e,
                    "Identity source misbehaved"
                );
                None
            }
        };

        if identity.is_none() {
            tracing::debug!(strategy = self.source.name(), "No identity on request");
        }

        let domain = extract_domain(identity.as_deref());
        tracing::debug!(
            identity = identity.as_deref().unwrap_or(""),
            domain = %domain,
            "Resolved request domain"
        );

        let decision = Decision::from(is_authorized(&domain, &self.expected_domain));
        tracing::info!(strategy = self.source.name(), %decision, "Gate decision");
        decision
    }

    pub fn artifact_for(&self, decision: Decision) -> &str {
        match decision {
            Decision::Allowed => &self.allowed_file,
            Decision::Forbidden => &self.forbidden_file,
        }
    }

    /// Decides and loads the matching artifact. Only a storage failure is an error.
    pub async fn respond(&self, headers: &HeaderMap) -> Result<GatePage> {
        let decision = self.decide(headers).await;
        let body = self.storage.read_file(self.artifact_for(decision)).await?;
        Ok(GatePage { decision, body })
    }
}
