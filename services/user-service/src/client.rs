//! Address Service Client
//!
//! Explicit HTTP client for `GET /addresses/{addressId}` on the address
//! service. The base URL carries the logical service name
//! (`http://address-service:8081` by default); resolving it is left to DNS or
//! whatever the deployment puts in front.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::dto::AddressDto;

/// Errors from a remote address lookup
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be built, sent, or answered
    #[error("Address service request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Address service answered with a non-2xx status
    #[error("Address service returned {0}")]
    UnexpectedStatus(StatusCode),

    /// Body was not a valid address
    #[error("Failed to decode address response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Remote lookup of a single address.
#[async_trait]
pub trait AddressClient: Send + Sync {
    async fn get_address(&self, address_id: i64) -> Result<AddressDto, ClientError>;
}

/// [`AddressClient`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpAddressClient {
    http_client: Client,
    base_url: String,
}

impl HttpAddressClient {
    /// Client with reqwest's default settings; no timeout is set.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = Client::builder().build().map_err(ClientError::Transport)?;
        Ok(Self::with_client(http_client, base_url))
    }

    pub fn with_client(http_client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn address_url(&self, address_id: i64) -> String {
        format!("{}/addresses/{}", self.base_url, address_id)
    }
}

#[async_trait]
impl AddressClient for HttpAddressClient {
    async fn get_address(&self, address_id: i64) -> Result<AddressDto, ClientError> {
        let url = self.address_url(address_id);
        debug!("Fetching address: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status));
        }

        response.json::<AddressDto>().await.map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_url_strips_trailing_slash() {
        let client = HttpAddressClient::new("http://address-service:8081/").unwrap();
        assert_eq!(client.base_url(), "http://address-service:8081");
        assert_eq!(
            client.address_url(3),
            "http://address-service:8081/addresses/3"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 1 is never bound in test environments.
        let client = HttpAddressClient::new("http://127.0.0.1:1").unwrap();
        let result = client.get_address(1).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[test]
    fn test_status_error_message() {
        let err = ClientError::UnexpectedStatus(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Address service returned 404 Not Found");
    }
}
