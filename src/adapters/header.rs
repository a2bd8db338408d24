use crate::domain::ports::IdentitySource;
use crate::utils::error::{GateError, Result};
use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName};

pub const DEFAULT_PRINCIPAL_HEADER: &str = "X-MS-CLIENT-PRINCIPAL-NAME";

/// Reads the principal name injected by an authenticating reverse proxy.
#[derive(Debug, Clone)]
pub struct HeaderIdentitySource {
    header: HeaderName,
}

impl HeaderIdentitySource {
    pub fn new(header_name: &str) -> Result<Self> {
        let header = HeaderName::from_bytes(header_name.as_bytes()).map_err(|e| {
            GateError::InvalidConfigValueError {
                field: "identity.header_name".to_string(),
                value: header_name.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { header })
    }
}

impl Default for HeaderIdentitySource {
    fn default() -> Self {
        Self {
            header: HeaderName::from_static("x-ms-client-principal-name"),
        }
    }
}

#[async_trait]
impl IdentitySource for HeaderIdentitySource {
    fn name(&self) -> &'static str {
        "header"
    }

    async fn acquire(&self, headers: &HeaderMap) -> Result<Option<String>> {
        let value = headers
            .get(&self.header)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
            .filter(|v| !v.is_empty())
            .map(String::from);
        Ok(value)
    }
}
