use std::sync::Arc;

use crate::client::{AddressClient, ClientError};
use crate::dto::AddressDto;

/// Resolves user-facing address lookups through the address service.
#[derive(Clone)]
pub struct UserService {
    address_client: Arc<dyn AddressClient>,
}

impl UserService {
    pub fn new(address_client: Arc<dyn AddressClient>) -> Self {
        Self { address_client }
    }

    pub async fn get_user_address(&self, address_id: i64) -> Result<AddressDto, ClientError> {
        self.address_client.get_address(address_id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    /// Answers id 1, fails id 500 with a server error, 404s the rest.
    pub(crate) struct StubAddressClient;

    #[async_trait]
    impl AddressClient for StubAddressClient {
        async fn get_address(&self, address_id: i64) -> Result<AddressDto, ClientError> {
            match address_id {
                1 => Ok(AddressDto {
                    address_id: 1,
                    user_id: 100,
                    receiver_name: "张三".to_string(),
                    phone: "13800000001".to_string(),
                    full_address: "北京市朝阳区某街道123号".to_string(),
                }),
                500 => Err(ClientError::UnexpectedStatus(
                    StatusCode::INTERNAL_SERVER_ERROR,
                )),
                _ => Err(ClientError::UnexpectedStatus(StatusCode::NOT_FOUND)),
            }
        }
    }

    #[tokio::test]
    async fn test_get_user_address_delegates() {
        let service = UserService::new(Arc::new(StubAddressClient));

        let address = service.get_user_address(1).await.unwrap();
        assert_eq!(address.user_id, 100);
        assert_eq!(address.receiver_name, "张三");
    }

    #[tokio::test]
    async fn test_get_user_address_keeps_client_error() {
        let service = UserService::new(Arc::new(StubAddressClient));

        let err = service.get_user_address(500).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
