use crate::domain::model::RawResponse;
use crate::domain::ports::FilmTransport;
use crate::utils::error::{Result, SwapiError};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl FilmTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SwapiError::transport(url, e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| SwapiError::transport(url, e))?;

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
