use serde::{Deserialize, Serialize};

/// The user service's view of an address fetched from the address service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub address_id: i64,
    pub user_id: i64,
    pub receiver_name: String,
    pub phone: String,
    pub full_address: String,
}
