use serde::{Deserialize, Serialize};

use super::{CustomerId, HasCustomerId};

/// Postal address owned by one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressInformation {
    /// Owning customer
    pub customer_id: CustomerId,
    pub address_type_id: i32,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    pub city: String,
    /// State or province code, e.g. "IA"
    pub region_id: String,
    pub postal_code: String,
    pub county_id: i32,
    pub county: String,
    /// ISO country code
    pub country_id: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl HasCustomerId for AddressInformation {
    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}
