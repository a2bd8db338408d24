use crate::utils::error::Result;
use async_trait::async_trait;
use axum::http::HeaderMap;

/// Produces the raw identity string for one request, if there is one.
///
/// `Ok(None)` means the request carried no identity; errors describe why one
/// could not be obtained. The gate treats both as forbidden.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn acquire(&self, headers: &HeaderMap) -> Result<Option<String>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn expected_domain(&self) -> &str;
    fn content_root(&self) -> &str;
    fn allowed_file(&self) -> &str;
    fn forbidden_file(&self) -> &str;
}
