// Adapters layer: concrete implementations of the domain ports (identity sources, content storage).

pub mod auth_endpoint;
pub mod header;
pub mod storage;

use crate::config::toml_config::IdentitySection;
use crate::domain::model::IdentityStrategy;
use crate::domain::ports::IdentitySource;
use crate::utils::error::Result;
use std::sync::Arc;

pub use auth_endpoint::AuthEndpointIdentitySource;
pub use header::HeaderIdentitySource;
pub use storage::LocalStorage;

/// Builds the identity source selected by `identity.strategy`.
pub fn build_identity_source(identity: &IdentitySection) -> Result<Arc<dyn IdentitySource>> {
    let source: Arc<dyn IdentitySource> = match identity.strategy {
        IdentityStrategy::Header => Arc::new(HeaderIdentitySource::new(&identity.header_name)?),
        IdentityStrategy::AuthEndpoint => Arc::new(AuthEndpointIdentitySource::new(
            &identity.auth_base_url,
            &identity.auth_path,
            &identity.forward_headers,
            identity.timeout(),
        )?),
    };
    Ok(source)
}
