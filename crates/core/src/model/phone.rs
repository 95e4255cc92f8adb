use serde::{Deserialize, Serialize};

use super::{CustomerId, HasCustomerId};

pub type PhoneNumberId = i32;

/// Phone number as stored by the backing source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberInformation {
    pub phone_number_id: PhoneNumberId,
    pub customer_id: CustomerId,
    pub number: String,
    pub phone_number_type_id: i32,
    /// Marks the customer's preferred number
    #[serde(default)]
    pub is_primary: bool,
}

/// Phone number attached to a partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub customer_id: CustomerId,
    pub phone_number_id: PhoneNumberId,
    pub number: String,
    pub phone_number_type_id: i32,
}

impl HasCustomerId for PhoneNumberInformation {
    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

impl HasCustomerId for PhoneNumber {
    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

impl From<&PhoneNumberInformation> for PhoneNumber {
    fn from(info: &PhoneNumberInformation) -> Self {
        Self {
            customer_id: info.customer_id,
            phone_number_id: info.phone_number_id,
            number: info.number.clone(),
            phone_number_type_id: info.phone_number_type_id,
        }
    }
}

impl From<PhoneNumberInformation> for PhoneNumber {
    fn from(info: PhoneNumberInformation) -> Self {
        Self {
            customer_id: info.customer_id,
            phone_number_id: info.phone_number_id,
            number: info.number,
            phone_number_type_id: info.phone_number_type_id,
        }
    }
}
