use serde::{Deserialize, Serialize};

/// A stored address entry, keyed by `address_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub address_id: i64,
    /// Opaque owner id; no user entity lives in this service
    pub user_id: i64,
    pub receiver_name: String,
    pub phone: String,
    pub full_address: String,
}

impl AddressRecord {
    pub fn new(
        address_id: i64,
        user_id: i64,
        receiver_name: impl Into<String>,
        phone: impl Into<String>,
        full_address: impl Into<String>,
    ) -> Self {
        Self {
            address_id,
            user_id,
            receiver_name: receiver_name.into(),
            phone: phone.into(),
            full_address: full_address.into(),
        }
    }
}
