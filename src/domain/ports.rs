use crate::domain::model::RawResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}

/// One-shot HTTP GET. Implementations report failures to reach the server as
/// `SwapiError::TransportError` and hand back every completed response, whatever its status.
#[async_trait]
pub trait FilmTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}
