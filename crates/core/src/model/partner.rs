use serde::{Deserialize, Serialize};

use super::{AddressInformation, CustomerId, HasCustomerId, PhoneNumber, PhoneNumberId};

/// Partner as stored by the backing source, without related records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualPartnerInformation {
    pub customer_id: CustomerId,
    pub first_name: String,
    #[serde(default)]
    pub preferred_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub email: String,
    /// Locale name, e.g. "en-US"
    pub culture: String,
    #[serde(default)]
    pub is_primary_decision_maker: bool,
}

impl HasCustomerId for IndividualPartnerInformation {
    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

/// Partner entity assembled by the enrichment pipeline
///
/// Values are never changed in place. Each enrichment step consumes the
/// previous value and returns a new one through [`with_addresses`] or
/// [`with_phone_numbers`], carrying every other field forward.
///
/// [`with_addresses`]: IndividualPartner::with_addresses
/// [`with_phone_numbers`]: IndividualPartner::with_phone_numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualPartner {
    customer_id: CustomerId,
    last_name: String,
    first_name: String,
    middle_name: String,
    preferred_name: String,
    suffix: String,
    email: String,
    addresses: Vec<AddressInformation>,
    phone_numbers: Vec<PhoneNumber>,
    culture_name: String,
    primary_phone_number_id: Option<PhoneNumberId>,
}

impl IndividualPartner {
    /// Replace the address collection
    pub fn with_addresses(self, addresses: Vec<AddressInformation>) -> Self {
        Self { addresses, ..self }
    }

    /// Replace the phone collection together with the primary number
    pub fn with_phone_numbers(
        self,
        phone_numbers: Vec<PhoneNumber>,
        primary_phone_number_id: Option<PhoneNumberId>,
    ) -> Self {
        Self {
            phone_numbers,
            primary_phone_number_id,
            ..self
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn preferred_name(&self) -> &str {
        &self.preferred_name
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn culture_name(&self) -> &str {
        &self.culture_name
    }

    pub fn addresses(&self) -> &[AddressInformation] {
        &self.addresses
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phone_numbers
    }

    pub fn primary_phone_number_id(&self) -> Option<PhoneNumberId> {
        self.primary_phone_number_id
    }

    /// Display name, preferring the preferred name over the first name
    pub fn display_name(&self) -> String {
        let given = if self.preferred_name.is_empty() {
            &self.first_name
        } else {
            &self.preferred_name
        };

        [given.as_str(), self.last_name.as_str(), self.suffix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<IndividualPartnerInformation> for IndividualPartner {
    fn from(info: IndividualPartnerInformation) -> Self {
        Self {
            customer_id: info.customer_id,
            last_name: info.last_name,
            first_name: info.first_name,
            middle_name: info.middle_name,
            preferred_name: info.preferred_name,
            suffix: info.suffix,
            email: info.email,
            addresses: Vec::new(),
            phone_numbers: Vec::new(),
            culture_name: info.culture,
            primary_phone_number_id: None,
        }
    }
}

impl HasCustomerId for IndividualPartner {
    fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}
